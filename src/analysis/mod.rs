mod aggregate;
mod errors;
mod filter;
mod ratio;
mod statistics;
mod trend;

pub use aggregate::{aggregate, average_order_by, order_counts_by, revenue_by, AggregationResult, Metric, Operation, SortOrder};
pub use errors::AnalysisError;
pub use filter::{average_order_by_city, filter, share_above_threshold, top_category_in_city, Predicate};
pub use ratio::ratio;
pub use statistics::{standard_deviation, summarize, Summary};
pub use trend::{date_range, growth_rate, monthly_trend, MonthlyTrend};
