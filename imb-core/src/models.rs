mod metrics;
mod report;
mod settlement;

pub use metrics::{DailyImbalance, PeakImbalanceHour};
pub use report::DailyReport;
pub use settlement::{STANDARD_DAY_PERIODS, SettlementDay, SettlementPoint};
