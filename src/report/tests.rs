use super::{BusinessInsights, InsightsConfig, TrendDirection};

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::analysis::AnalysisError;
use crate::loader::read_dataset;
use crate::models::{GroupLabel, TransactionDataset};
use crate::types::MonthBucket;

const SAMPLE_CSV: &str = "order_id,city,product_category,total_amount,payment_method,order_date
ORD-1,Amman,Electronics,1000.00,Credit Card,2024-08-04
ORD-2,Irbid,Fashion,150.00,Cash on Delivery,2024-08-19
ORD-3,Amman,Fashion,250.00,Credit Card,2024-09-02
ORD-4,Zarqa,Home,90.00,Wallet,2024-09-21
ORD-5,Amman,Fashion,120.00,Credit Card,2024-10-07
ORD-6,Irbid,Electronics,1100.00,Cash on Delivery,2024-10-25";

fn sample_dataset() -> Result<TransactionDataset> {
    Ok(read_dataset(SAMPLE_CSV.as_bytes())?)
}

#[test]
fn test_insights_use_defaults_and_first_to_last_month_growth() -> Result<()> {
    let insights = BusinessInsights::compute(&sample_dataset()?, &InsightsConfig::default())?;

    assert_eq!(insights.config.focus_city, "Amman");
    assert_eq!(insights.revenue_by_city.top(), Some(&(GroupLabel::Value("Amman".to_string()), Decimal::from(1370))));
    assert_eq!(insights.order_values.count, 6);

    let growth = insights.growth.as_ref().ok_or_else(|| anyhow!("growth missing"))?;

    // August 1150 -> October 1220
    assert_eq!(growth.from, MonthBucket::new(2024, 8)?);
    assert_eq!(growth.to, MonthBucket::new(2024, 10)?);
    assert_eq!(growth.rate.as_ref().ok().map(|rate| rate.round_dp(2)), Some(Decimal::from_str("6.09")?));
    assert_eq!(growth.direction(), Some(TrendDirection::Growing));

    Ok(())
}

#[test]
fn test_insights_answer_challenges_with_configured_values() -> Result<()> {
    let config = InsightsConfig::new()
        .with_focus_city("Irbid")
        .with_amount_threshold(Decimal::from(1000))
        .with_growth_window(MonthBucket::new(2024, 9)?, MonthBucket::new(2024, 10)?);

    let insights = BusinessInsights::compute(&sample_dataset()?, &config)?;

    assert_eq!(insights.focus_city_categories.len(), 2);
    // Only ORD-6 is strictly above 1000
    assert_eq!(insights.share_above_threshold.round_dp(2), Decimal::from_str("16.67")?);
    assert_eq!(insights.average_by_city.top().map(|(label, _)| label.to_string()), Some("Irbid".to_string()));
    assert_eq!(insights.payment_counts.top(), Some(&(GroupLabel::Value("Credit Card".to_string()), Decimal::from(3))));

    let growth = insights.growth.as_ref().ok_or_else(|| anyhow!("growth missing"))?;

    assert_eq!(growth.from, MonthBucket::new(2024, 9)?);

    Ok(())
}

#[test]
fn test_zero_revenue_start_month_renders_undefined_growth() -> Result<()> {
    let csv_content = "order_id,city,product_category,total_amount,payment_method,order_date
ORD-1,Amman,Books,0,Wallet,2024-08-01
ORD-2,Amman,Books,50,Wallet,2024-09-01";

    let insights = BusinessInsights::compute(&read_dataset(csv_content.as_bytes())?, &InsightsConfig::default())?;
    let growth = insights.growth.as_ref().ok_or_else(|| anyhow!("growth missing"))?;

    assert!(matches!(growth.rate, Err(AnalysisError::DivisionByZero { .. })));
    assert_eq!(growth.direction(), None);
    assert!(insights.to_string().contains("Sales growth (2024-08 -> 2024-09): undefined"));

    Ok(())
}

#[test]
fn test_insights_fail_on_empty_dataset() {
    let result = BusinessInsights::compute(&TransactionDataset::default(), &InsightsConfig::default());

    assert!(matches!(result, Err(AnalysisError::InsufficientData { .. })));
}

#[test]
fn test_insights_render_every_section() -> Result<()> {
    let rendered = BusinessInsights::compute(&sample_dataset()?, &InsightsConfig::default())?.to_string();

    for heading in [
        "KEY BUSINESS INSIGHTS",
        "1. GEOGRAPHIC PERFORMANCE",
        "2. ORDER ECONOMICS",
        "3. PRODUCT PERFORMANCE",
        "4. SALES TREND",
        "5. PAYMENT PREFERENCES",
        "6. CHALLENGES",
    ] {
        assert!(rendered.contains(heading), "missing section {heading}");
    }

    assert!(rendered.contains("Top revenue city: Amman (1370"));
    assert!(rendered.contains("Most popular category in Amman: Fashion (2"));
    assert!(rendered.contains("Trend: GROWING"));

    Ok(())
}

#[test]
fn test_insights_surface_overflow_for_huge_amounts() -> Result<()> {
    let csv_content = "order_id,city,product_category,total_amount,payment_method,order_date
ORD-1,Amman,Books,0,Wallet,2024-08-01
ORD-2,Amman,Books,1000000000000000,Wallet,2024-09-01";

    let result = BusinessInsights::compute(&read_dataset(csv_content.as_bytes())?, &InsightsConfig::default());

    assert!(matches!(result, Err(AnalysisError::Overflow { .. })));

    Ok(())
}
