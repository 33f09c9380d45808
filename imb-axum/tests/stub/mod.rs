use imb_core::{
    models::{DailyReport, SettlementDay, SettlementPoint},
    ports::{
        Application, Clock as _, FetchError, FixedClock, ReportRenderer, SettlementFetcher,
        ensure_settled,
    },
};
use std::sync::{Arc, Mutex};
use time::{Date, OffsetDateTime, macros::datetime};

type Respond = dyn Fn(Date) -> Result<Option<SettlementDay>, FetchError> + Send + Sync;

/// A fetcher answering from a closure, remembering which dates were asked for
#[derive(Clone)]
pub struct StubFetcher {
    clock: FixedClock,
    respond: Arc<Respond>,
    requests: Arc<Mutex<Vec<Date>>>,
}

impl SettlementFetcher for StubFetcher {
    async fn fetch(&self, date: Date) -> Result<Option<SettlementDay>, FetchError> {
        ensure_settled(date, self.clock.business_date())?;
        self.requests.lock().unwrap().push(date);
        (self.respond)(date)
    }
}

/// Renders the summary as plain text, or fails on demand
#[derive(Clone)]
pub struct TextRenderer {
    pub fail: bool,
}

impl ReportRenderer for TextRenderer {
    type Error = std::io::Error;

    fn content_type(&self) -> &'static str {
        "text/plain"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, report: &DailyReport<'_>) -> Result<Vec<u8>, Self::Error> {
        if self.fail {
            return Err(std::io::Error::other("renderer out of ink"));
        }
        Ok(format!(
            "{} {} {:.2} {}",
            report.day.date(),
            report.day.len(),
            report.imbalance.total_cost,
            report.peak.hour
        )
        .into_bytes())
    }
}

#[derive(Clone)]
pub struct TestApp {
    pub fetcher: StubFetcher,
    pub clock: FixedClock,
    pub renderer: TextRenderer,
}

// 13:00 in London, so yesterday is 2023-05-01
pub const NOW: OffsetDateTime = datetime!(2023-05-02 12:00 UTC);

impl TestApp {
    pub fn new(
        respond: impl Fn(Date) -> Result<Option<SettlementDay>, FetchError> + Send + Sync + 'static,
    ) -> Self {
        let clock = FixedClock(NOW);
        Self {
            fetcher: StubFetcher {
                clock,
                respond: Arc::new(respond),
                requests: Default::default(),
            },
            clock,
            renderer: TextRenderer { fail: false },
        }
    }

    pub fn requests(&self) -> Vec<Date> {
        self.fetcher.requests.lock().unwrap().clone()
    }
}

impl Application for TestApp {
    type Fetcher = StubFetcher;
    type Clock = FixedClock;
    type Renderer = TextRenderer;

    fn fetcher(&self) -> &Self::Fetcher {
        &self.fetcher
    }

    fn clock(&self) -> &Self::Clock {
        &self.clock
    }

    fn renderer(&self) -> &Self::Renderer {
        &self.renderer
    }
}

/// Three periods across hours 0, 0 and 1 on `date`
pub fn sample_day(date: Date) -> SettlementDay {
    let midnight = date.midnight().assume_utc();
    let point = |period: u32, minutes: i64, sell: f64, buy: f64, volume: f64| SettlementPoint {
        period,
        start_time: midnight + time::Duration::minutes(minutes),
        sell_price: sell,
        buy_price: buy,
        net_imbalance_volume: volume,
    };

    SettlementDay::new(
        date,
        vec![
            point(1, 0, 10.0, 15.0, -50.0),
            point(2, 30, 12.0, 18.0, 30.0),
            point(3, 60, 11.0, 16.0, 40.0),
        ],
    )
}
