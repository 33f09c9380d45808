/// Aggregate imbalance cost for a settlement day.
///
/// Values are unrounded; rounding for display belongs to the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DailyImbalance {
    /// Sum over all periods of |volume| * imbalance price (£)
    pub total_cost: f64,
    /// Total cost divided by total |volume| (£/MWh), or 0 when no volume was imbalanced
    pub unit_rate: f64,
}

/// The clock hour carrying the most absolute imbalance volume.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PeakImbalanceHour {
    /// Hour of day, 0 to 23
    pub hour: u8,
    /// Sum of |volume| over the periods starting in that hour (MWh)
    pub volume: f64,
}
