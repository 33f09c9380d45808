#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use imb_core::{
    calendar,
    models::{STANDARD_DAY_PERIODS, SettlementDay},
    ports::{Clock, FetchError, SettlementFetcher, SystemClock, ensure_settled},
};
use reqwest::{StatusCode, header::ACCEPT};
use time::Date;
use tracing::{Level, event};

pub mod config;
mod types;

use config::BmrsConfig;
use types::SystemPrices;

/// Fetches settlement days from the Elexon BMRS API.
///
/// The fetcher holds a pooled HTTP client and is cheap to clone. The clock
/// decides which dates count as settled; production code uses the system
/// clock, tests pin it with [`imb_core::ports::FixedClock`].
///
/// # Example
///
/// ```no_run
/// # use imb_bmrs::{BmrsFetcher, config::BmrsConfig};
/// # use imb_core::ports::{Clock as _, SettlementFetcher as _, SystemClock};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = BmrsFetcher::open(&BmrsConfig::default())?;
/// let yesterday = SystemClock.previous_business_date();
/// if let Some(day) = fetcher.fetch(yesterday).await? {
///     println!("{} periods on {}", day.len(), day.date());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct BmrsFetcher<C = SystemClock> {
    client: reqwest::Client,
    base_url: String,
    clock_change_aware: bool,
    clock: C,
}

impl BmrsFetcher {
    /// Build a fetcher against the system clock.
    ///
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the HTTP client cannot be initialised
    /// (for example, if no TLS backend is available).
    pub fn open(config: &BmrsConfig) -> Result<Self, reqwest::Error> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> BmrsFetcher<C> {
    /// Build a fetcher that reads "today" from `clock`.
    pub fn with_clock(config: &BmrsConfig, clock: C) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            clock_change_aware: config.clock_change_aware,
            clock,
        })
    }

    fn url(&self, date: Date) -> String {
        format!(
            "{}/balancing/settlement/system-prices/{}",
            self.base_url, date
        )
    }

    fn expected_periods(&self, date: Date) -> usize {
        if self.clock_change_aware {
            calendar::settlement_periods(date)
        } else {
            STANDARD_DAY_PERIODS
        }
    }
}

fn retrieval(err: reqwest::Error) -> FetchError {
    FetchError::Retrieval(Box::new(err))
}

impl<C: Clock + Sync> SettlementFetcher for BmrsFetcher<C> {
    async fn fetch(&self, date: Date) -> Result<Option<SettlementDay>, FetchError> {
        ensure_settled(date, self.clock.business_date())?;

        let url = self.url(date);
        event!(Level::DEBUG, %url, "requesting system prices");

        let response = self
            .client
            .get(&url)
            .query(&[("format", "json")])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(retrieval)?;

        if response.status() == StatusCode::NOT_FOUND {
            event!(Level::DEBUG, %date, "no system prices published");
            return Ok(None);
        }

        let body = response
            .error_for_status()
            .map_err(retrieval)?
            .bytes()
            .await
            .map_err(retrieval)?;

        let records = serde_json::from_slice::<SystemPrices>(&body)
            .map_err(|err| FetchError::MalformedData(err.to_string()))?
            .data
            .ok_or_else(|| FetchError::MalformedData("response is missing field `data`".into()))?;

        let points = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_point(index))
            .collect::<Result<Vec<_>, _>>()?;

        let day = SettlementDay::new(date, points).validate(self.expected_periods(date))?;
        event!(Level::INFO, %date, periods = day.len(), "fetched system prices");

        Ok(Some(day))
    }
}
