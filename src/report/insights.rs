use crate::analysis::{
    average_order_by, average_order_by_city, date_range, monthly_trend, order_counts_by, revenue_by,
    share_above_threshold, summarize, top_category_in_city, AggregationResult, AnalysisError, MonthlyTrend, Summary
};
use crate::models::{GroupKey, GroupLabel, TransactionDataset};
use crate::report::InsightsConfig;
use crate::types::MonthBucket;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::{info, warn};

const RULE_WIDTH: usize = 80;
const UNDEFINED: &str = "undefined";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TrendDirection {
    Growing,
    Declining,
    Flat
}

/// Growth across the report's month window.
///
/// `rate` stays an explicit `Err` when the starting month has no revenue.
#[derive(Debug)]
pub struct GrowthWindow {
    pub from: MonthBucket,
    pub to: MonthBucket,
    pub rate: Result<Decimal, AnalysisError>
}

impl GrowthWindow {
    pub fn direction(&self) -> Option<TrendDirection> {
        let rate = self.rate.as_ref().ok()?;

        Some(if rate.is_zero() {
            TrendDirection::Flat
        } else if rate.is_sign_positive() {
            TrendDirection::Growing
        } else {
            TrendDirection::Declining
        })
    }
}

/// The headline metrics of a dataset, each derived from one analysis query.
#[derive(Debug)]
pub struct BusinessInsights {
    pub config: InsightsConfig,
    pub revenue_by_city: AggregationResult,
    pub top_city_share: Result<Decimal, AnalysisError>,
    pub order_values: Summary,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub orders_by_category: AggregationResult,
    pub revenue_by_category: AggregationResult,
    pub average_by_category: AggregationResult,
    pub monthly_trend: MonthlyTrend,
    pub growth: Option<GrowthWindow>,
    pub payment_counts: AggregationResult,
    pub payment_shares: Vec<(GroupLabel, Decimal)>,
    pub focus_city_categories: AggregationResult,
    pub share_above_threshold: Decimal,
    pub average_by_city: AggregationResult
}

impl BusinessInsights {
    /// Runs every query the report needs.
    ///
    /// # Errors
    /// `InsufficientData` for an empty dataset and `DateParse` for a bad order
    /// date. An undefined growth rate does not fail the report.
    pub fn compute(dataset: &TransactionDataset, config: &InsightsConfig) -> Result<Self, AnalysisError> {
        let order_values = summarize(&dataset.amounts())?;
        let revenue_by_city = revenue_by(dataset, GroupKey::City)?;
        let top_city_share = match revenue_by_city.top() {
            Some((city, _)) => revenue_by_city.share_of_label(city),
            None => Err(AnalysisError::division_by_zero("share of total"))
        };

        let monthly_trend = monthly_trend(dataset)?;
        let growth = growth_window(&monthly_trend, config);

        if let Some(GrowthWindow { from, to, rate: Err(error) }) = &growth {
            warn!("Growth from {from} to {to} is {UNDEFINED}: {error}");
        }

        let payment_counts = order_counts_by(dataset, GroupKey::PaymentMethod)?;
        let payment_shares = payment_counts.percentages()?;

        let insights = Self {
            config: config.clone(),
            revenue_by_city,
            top_city_share,
            order_values,
            date_range: date_range(dataset)?,
            orders_by_category: order_counts_by(dataset, GroupKey::ProductCategory)?,
            revenue_by_category: revenue_by(dataset, GroupKey::ProductCategory)?,
            average_by_category: average_order_by(dataset, GroupKey::ProductCategory)?,
            monthly_trend,
            growth,
            payment_counts,
            payment_shares,
            focus_city_categories: top_category_in_city(dataset, &config.focus_city)?,
            share_above_threshold: share_above_threshold(dataset, config.amount_threshold)?,
            average_by_city: average_order_by_city(dataset)?
        };

        info!("Computed business insights over {} transactions", insights.order_values.count);

        Ok(insights)
    }
}

fn growth_window(trend: &MonthlyTrend, config: &InsightsConfig) -> Option<GrowthWindow> {
    let (from, to) = match config.growth_window {
        Some(window) => window,
        None => (trend.first()?.0, trend.last()?.0)
    };

    Some(GrowthWindow {
        from,
        to,
        rate: trend.growth_between(from, to)
    })
}

fn write_rule(formatter: &mut Formatter<'_>) -> fmt::Result {
    writeln!(formatter, "{}", "=".repeat(RULE_WIDTH))
}

fn write_heading(formatter: &mut Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(formatter)?;
    writeln!(formatter, "{title}")?;
    writeln!(formatter, "{}", "-".repeat(title.len()))
}

fn write_ranking(formatter: &mut Formatter<'_>, result: &AggregationResult) -> fmt::Result {
    for (label, value) in result {
        writeln!(formatter, "   {label:<24} {:>14}", value.round_dp(2))?;
    }
    Ok(())
}

fn write_top(formatter: &mut Formatter<'_>, caption: &str, result: &AggregationResult) -> fmt::Result {
    match result.top() {
        Some((label, value)) => writeln!(formatter, "   * {caption}: {label} ({})", value.round_dp(2)),
        None => writeln!(formatter, "   * {caption}: none")
    }
}

fn write_percentage(formatter: &mut Formatter<'_>, value: &Result<Decimal, AnalysisError>) -> fmt::Result {
    match value {
        Ok(value) => write!(formatter, "{:.1}%", value.round_dp(1)),
        Err(_) => write!(formatter, "{UNDEFINED}")
    }
}

impl Display for BusinessInsights {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write_rule(formatter)?;
        writeln!(formatter, "KEY BUSINESS INSIGHTS")?;
        write_rule(formatter)?;

        write_heading(formatter, "1. GEOGRAPHIC PERFORMANCE")?;
        write_ranking(formatter, &self.revenue_by_city)?;
        write_top(formatter, "Top revenue city", &self.revenue_by_city)?;
        write!(formatter, "   * Share of total revenue: ")?;
        write_percentage(formatter, &self.top_city_share)?;
        writeln!(formatter)?;

        write_heading(formatter, "2. ORDER ECONOMICS")?;
        writeln!(formatter, "   * Total transactions: {}", self.order_values.count)?;
        writeln!(formatter, "   * Average order value: {}", self.order_values.mean.round_dp(2))?;
        writeln!(formatter, "   * Median order value: {}", self.order_values.median.round_dp(2))?;
        match self.order_values.standard_deviation() {
            Ok(deviation) => writeln!(formatter, "   * Standard deviation: {}", deviation.round_dp(2))?,
            Err(_) => writeln!(formatter, "   * Standard deviation: {UNDEFINED}")?
        }
        writeln!(formatter, "   * Order value range: {} to {}", self.order_values.min.round_dp(2), self.order_values.max.round_dp(2))?;
        if let Some((earliest, latest)) = self.date_range {
            writeln!(formatter, "   * Date range: {earliest} to {latest}")?;
        }

        write_heading(formatter, "3. PRODUCT PERFORMANCE")?;
        write_ranking(formatter, &self.orders_by_category)?;
        write_top(formatter, "Most ordered category", &self.orders_by_category)?;
        write_top(formatter, "Highest revenue category", &self.revenue_by_category)?;
        write_top(formatter, "Highest average order value", &self.average_by_category)?;

        write_heading(formatter, "4. SALES TREND")?;
        for (month, revenue) in &self.monthly_trend {
            writeln!(formatter, "   {month:<24} {:>14}", revenue.round_dp(2))?;
        }
        if let Some(growth) = &self.growth {
            write!(formatter, "   * Sales growth ({} -> {}): ", growth.from, growth.to)?;
            write_percentage(formatter, &growth.rate)?;
            writeln!(formatter)?;

            let trend = match growth.direction() {
                Some(TrendDirection::Growing) => "GROWING",
                Some(TrendDirection::Declining) => "DECLINING",
                Some(TrendDirection::Flat) => "FLAT",
                None => UNDEFINED
            };
            writeln!(formatter, "   * Trend: {trend}")?;
        }

        write_heading(formatter, "5. PAYMENT PREFERENCES")?;
        for ((label, count), (_, share)) in self.payment_counts.iter().zip(&self.payment_shares) {
            writeln!(formatter, "   {label:<24} {count:>6} orders {:>7.1}%", share.round_dp(1))?;
        }
        write_top(formatter, "Most popular method", &self.payment_counts)?;

        write_heading(formatter, "6. CHALLENGES")?;
        write_top(formatter, &format!("Most popular category in {}", self.config.focus_city), &self.focus_city_categories)?;
        writeln!(
            formatter,
            "   * Orders above {}: {:.1}%",
            self.config.amount_threshold,
            self.share_above_threshold.round_dp(1)
        )?;
        writeln!(formatter, "   * Average order value by city:")?;
        write_ranking(formatter, &self.average_by_city)?;

        writeln!(formatter)?;
        write_rule(formatter)
    }
}
