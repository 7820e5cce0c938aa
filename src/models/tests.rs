use super::{DatasetError, GroupKey, GroupLabel, TransactionDataset, TransactionRecord};

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::analysis::AnalysisError;
use crate::types::MonthBucket;

fn create_record(order_id: &str, city: Option<&str>, amount: &str, order_date: &str) -> Result<TransactionRecord> {
    Ok(TransactionRecord {
        order_id: order_id.to_string(),
        city: city.map(str::to_string),
        product_category: Some("Electronics".to_string()),
        total_amount: Decimal::from_str(amount)?,
        payment_method: Some("Credit Card".to_string()),
        order_date: order_date.to_string()
    })
}

#[test]
fn test_order_date_accepts_supported_formats() -> Result<()> {
    let expected = NaiveDate::from_ymd_opt(2024, 8, 15).ok_or_else(|| anyhow::anyhow!("invalid date"))?;
    let test_cases = vec![
        "2024-08-15",
        "2024-08-15 13:45:00",
        "2024-08-15T13:45:00",
        "2024-08-15 13:45",
        "2024-08-15T13:45:00+03:00",
        " 2024-08-15 ",
    ];

    for input in test_cases {
        let record = create_record("ORD-1", Some("Amman"), "10.0", input)?;
        assert_eq!(record.order_date()?, expected, "failed for {input}");
    }

    Ok(())
}

#[test]
fn test_unparseable_order_date_names_the_order() -> Result<()> {
    let record = create_record("ORD-42", Some("Amman"), "10.0", "15/08/2024x")?;

    match record.order_date() {
        Err(AnalysisError::DateParse { order_id, value }) => {
            assert_eq!(order_id, "ORD-42");
            assert_eq!(value, "15/08/2024x");
        }
        other => panic!("expected a date parse error, got {other:?}")
    }

    Ok(())
}

#[test]
fn test_month_projection_does_not_modify_record() -> Result<()> {
    let record = create_record("ORD-1", Some("Amman"), "10.0", "2024-10-31 23:59:59")?;
    let before = record.clone();

    assert_eq!(record.month()?, MonthBucket::new(2024, 10)?);
    assert_eq!(record, before);

    Ok(())
}

#[test]
fn test_label_projects_each_group_key() -> Result<()> {
    let record = create_record("ORD-1", Some("Irbid"), "10.0", "2024-09-01")?;

    assert_eq!(record.label(GroupKey::City)?, GroupLabel::Value("Irbid".to_string()));
    assert_eq!(record.label(GroupKey::ProductCategory)?, GroupLabel::Value("Electronics".to_string()));
    assert_eq!(record.label(GroupKey::PaymentMethod)?, GroupLabel::Value("Credit Card".to_string()));
    assert_eq!(record.label(GroupKey::Month)?, GroupLabel::Month(MonthBucket::new(2024, 9)?));

    Ok(())
}

#[test]
fn test_blank_and_absent_values_are_missing_labels() -> Result<()> {
    let absent = create_record("ORD-1", None, "10.0", "2024-09-01")?;
    let blank = create_record("ORD-2", Some("   "), "10.0", "2024-09-01")?;

    assert_eq!(absent.label(GroupKey::City)?, GroupLabel::Missing);
    assert_eq!(blank.label(GroupKey::City)?, GroupLabel::Missing);
    assert_eq!(GroupLabel::Missing.to_string(), "(missing)");
    assert!(!GroupLabel::Missing.matches("(missing)"));

    Ok(())
}

#[test]
fn test_group_key_parses_only_known_names() -> Result<()> {
    assert_eq!(GroupKey::from_str("city")?, GroupKey::City);
    assert_eq!(GroupKey::from_str(" Product_Category ")?, GroupKey::ProductCategory);
    assert_eq!(GroupKey::from_str("payment_method")?, GroupKey::PaymentMethod);
    assert_eq!(GroupKey::from_str("month")?, GroupKey::Month);

    assert!(matches!(GroupKey::from_str("cty"), Err(AnalysisError::UnknownGroupKey(_))));

    Ok(())
}

#[test]
fn test_dataset_rejects_negative_amounts_and_duplicates() -> Result<()> {
    let negative = TransactionDataset::new(vec![create_record("ORD-1", Some("Amman"), "-0.01", "2024-08-01")?]);
    let duplicate = TransactionDataset::new(vec![
        create_record("ORD-1", Some("Amman"), "1.0", "2024-08-01")?,
        create_record("ORD-1", Some("Irbid"), "2.0", "2024-08-02")?,
    ]);

    assert!(matches!(negative, Err(DatasetError::NegativeAmount { .. })));
    assert!(matches!(duplicate, Err(DatasetError::DuplicateOrder { .. })));

    Ok(())
}

#[test]
fn test_dataset_accepts_zero_amounts_and_totals_revenue() -> Result<()> {
    let dataset = TransactionDataset::new(vec![
        create_record("ORD-1", Some("Amman"), "0.00", "2024-08-01")?,
        create_record("ORD-2", Some("Amman"), "19.99", "2024-08-02")?,
        create_record("ORD-3", Some("Irbid"), "0.01", "2024-08-03")?,
    ])?;

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.total_revenue()?, Decimal::from_str("20.00")?);
    assert_eq!(dataset.amounts().len(), 3);

    Ok(())
}
