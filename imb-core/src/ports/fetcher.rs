use crate::models::SettlementDay;
use std::future::Future;
use time::Date;

/// The ways fetching a settlement day can fail.
///
/// "No data for this date" is not an error: fetchers report it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The caller asked for a date that cannot be settled yet, or passed a date
    /// that could not be understood.
    #[error("{0}")]
    InvalidRequest(String),

    /// The provider could not be reached or answered with an unexpected status.
    #[error("failed to retrieve settlement data: {0}")]
    Retrieval(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The provider answered, but a record lacked a required field.
    #[error("unexpected data format in provider response: {0}")]
    MalformedData(String),

    /// The provider answered with the wrong number of settlement periods.
    #[error("expected {expected} settlement periods, received {actual}")]
    IncompleteData {
        /// Periods in a complete day
        expected: usize,
        /// Periods actually received
        actual: usize,
    },

    /// The provider answered with the right number of periods, but they do not
    /// run contiguously from 1.
    #[error("settlement period {found} at position {position}, expected period {expected}")]
    OutOfSequence {
        /// Zero-based index of the offending record
        position: usize,
        /// The period that belongs at this position
        expected: u32,
        /// The period that was received
        found: u32,
    },
}

impl FetchError {
    /// A record is missing `field`.
    pub fn missing_field(field: &str, record: usize) -> Self {
        Self::MalformedData(format!("record {record} is missing field `{field}`"))
    }

    /// Whether the failure is attributable to the request or to the shape of
    /// the provider's data, as opposed to a transport failure.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Retrieval(_))
    }
}

/// Reject dates that are not strictly before `today`.
///
/// Settlement data is only published once a day has closed, so "today" and
/// anything later are never requested from a provider.
pub fn ensure_settled(date: Date, today: Date) -> Result<(), FetchError> {
    if date < today {
        Ok(())
    } else {
        Err(FetchError::InvalidRequest(format!(
            "requested date {date} must be at least one day in the past (today is {today})"
        )))
    }
}

/// A source of settlement data, one implementation per provider.
pub trait SettlementFetcher {
    /// Retrieve and validate the settlement day for `date`.
    ///
    /// Implementations issue at most one upstream request per call, and none
    /// at all when `date` fails [`ensure_settled`].
    ///
    /// # Returns
    ///
    /// - `Ok(Some(day))` with a day that passed [`SettlementDay::validate`]
    /// - `Ok(None)` if the provider has no data for `date`
    fn fetch(
        &self,
        date: Date,
    ) -> impl Future<Output = Result<Option<SettlementDay>, FetchError>> + Send;
}
