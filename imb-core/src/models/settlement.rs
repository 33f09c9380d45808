use crate::ports::FetchError;
use time::{Date, OffsetDateTime};

/// The number of half-hour settlement periods in a day without a clock change.
pub const STANDARD_DAY_PERIODS: usize = 48;

/// The system prices and net imbalance volume of a single settlement period.
#[derive(Clone, Debug, PartialEq)]
pub struct SettlementPoint {
    /// The settlement period, numbered from 1 within the settlement day
    pub period: u32,
    /// When the period starts, in the offset reported by the provider
    pub start_time: OffsetDateTime,
    /// The system sell price (£/MWh)
    pub sell_price: f64,
    /// The system buy price (£/MWh)
    pub buy_price: f64,
    /// Net imbalance volume (MWh). Negative means the system was short,
    /// positive means it was long.
    pub net_imbalance_volume: f64,
}

impl SettlementPoint {
    /// The price the imbalance is settled at, approximated as the greater of
    /// the buy and sell prices.
    pub fn imbalance_price(&self) -> f64 {
        self.buy_price.max(self.sell_price)
    }

    /// The magnitude of the imbalance, regardless of direction.
    pub fn imbalance_volume(&self) -> f64 {
        self.net_imbalance_volume.abs()
    }
}

/// A day's worth of settlement points, in settlement period order.
///
/// A day owns its points and exposes them read-only. Days built by a
/// fetcher have gone through [`SettlementDay::validate`]; days built directly
/// with [`SettlementDay::new`] carry no completeness guarantee.
#[derive(Clone, Debug, PartialEq)]
pub struct SettlementDay {
    date: Date,
    points: Vec<SettlementPoint>,
}

impl SettlementDay {
    /// Assemble a day from points without validating completeness.
    pub fn new(date: Date, points: Vec<SettlementPoint>) -> Self {
        Self { date, points }
    }

    /// Check that the day holds exactly `expected` points whose periods run
    /// contiguously from 1 to `expected` in insertion order.
    ///
    /// # Errors
    ///
    /// - [`FetchError::IncompleteData`] if the number of points differs from `expected`
    /// - [`FetchError::OutOfSequence`] if a period is missing, repeated or out of order
    pub fn validate(self, expected: usize) -> Result<Self, FetchError> {
        if self.points.len() != expected {
            return Err(FetchError::IncompleteData {
                expected,
                actual: self.points.len(),
            });
        }

        for (position, point) in self.points.iter().enumerate() {
            let period = position as u32 + 1;
            if point.period != period {
                return Err(FetchError::OutOfSequence {
                    position,
                    expected: period,
                    found: point.period,
                });
            }
        }

        Ok(self)
    }

    /// The settlement date
    pub fn date(&self) -> Date {
        self.date
    }

    /// The settlement points, in period order
    pub fn points(&self) -> &[SettlementPoint] {
        &self.points
    }

    /// The number of settlement points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the day holds no points at all
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
