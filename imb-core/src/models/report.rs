use super::{DailyImbalance, PeakImbalanceHour, SettlementDay};

/// Everything a report renderer needs to describe a settlement day: the
/// computed metrics plus the raw points they were computed from.
#[derive(Clone, Copy, Debug)]
pub struct DailyReport<'a> {
    /// The validated settlement day
    pub day: &'a SettlementDay,
    /// Daily imbalance cost and unit rate
    pub imbalance: DailyImbalance,
    /// The hour with the highest absolute imbalance volume
    pub peak: PeakImbalanceHour,
    /// Absolute imbalance volume per hour of day
    pub hourly: [f64; 24],
}
