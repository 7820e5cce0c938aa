use crate::models::TransactionRecord;
use crate::types::OrderId;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Order [{order_id}] has a negative total amount [{total_amount}]")]
    NegativeAmount {
        order_id: OrderId,
        total_amount: Decimal
    },
    #[error("Order [{order_id}] appears more than once")]
    DuplicateOrder {
        order_id: OrderId
    }
}

impl DatasetError {
    pub fn negative_amount(record: &TransactionRecord) -> Self {
        Self::NegativeAmount {
            order_id: record.order_id.clone(),
            total_amount: record.total_amount
        }
    }

    pub fn duplicate_order(record: &TransactionRecord) -> Self {
        Self::DuplicateOrder {
            order_id: record.order_id.clone()
        }
    }
}
