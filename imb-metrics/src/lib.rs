#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use imb_core::models::{DailyImbalance, PeakImbalanceHour, SettlementDay};

/// Total imbalance cost and unit rate for a day.
///
/// Each period costs `|net_imbalance_volume| * max(buy_price, sell_price)`.
/// The unit rate is the total cost over the total absolute volume, or 0 if
/// no volume was imbalanced at all. Nothing is rounded.
pub fn calculate_daily_imbalance(day: &SettlementDay) -> DailyImbalance {
    let (total_cost, total_volume) =
        day.points().iter().fold((0.0, 0.0), |(cost, volume), point| {
            let imbalance = point.imbalance_volume();
            (cost + imbalance * point.imbalance_price(), volume + imbalance)
        });

    let unit_rate = if total_volume > 0.0 {
        total_cost / total_volume
    } else {
        0.0
    };

    DailyImbalance {
        total_cost,
        unit_rate,
    }
}

/// Absolute imbalance volume bucketed by the hour of each period's start time.
///
/// The hour is read in the offset the timestamp carries; provider data is in
/// UTC, so bucket 0 is 00:00-00:59 UTC.
pub fn hourly_imbalance(day: &SettlementDay) -> [f64; 24] {
    let mut buckets = [0.0; 24];
    for point in day.points() {
        buckets[point.start_time.hour() as usize] += point.imbalance_volume();
    }
    buckets
}

/// The hour with the highest absolute imbalance volume.
///
/// Hours are scanned in increasing order and only a strictly greater volume
/// replaces the running maximum, so ties resolve to the earliest hour. An
/// empty day reports hour 0 with zero volume.
pub fn find_highest_imbalance_hour(day: &SettlementDay) -> PeakImbalanceHour {
    hourly_imbalance(day)
        .into_iter()
        .enumerate()
        .fold(PeakImbalanceHour::default(), |peak, (hour, volume)| {
            if volume > peak.volume {
                PeakImbalanceHour {
                    hour: hour as u8,
                    volume,
                }
            } else {
                peak
            }
        })
}
