//! Concrete wiring of the ports into a servable application.
//!
//! Settlement data comes from the Elexon BMRS API, business dates from the
//! system clock, and day reports are produced as CSV documents.

use crate::report::CsvReport;
use imb_bmrs::BmrsFetcher;
use imb_core::ports::{Application, SystemClock};

/// The production application state shared by every request handler.
#[derive(Clone, Debug)]
pub struct ImbalanceApp {
    /// Source of settlement data
    pub fetcher: BmrsFetcher,
    /// Wall clock used to resolve default dates
    pub clock: SystemClock,
    /// Report renderer backing `/energy_report`
    pub renderer: CsvReport,
}

impl ImbalanceApp {
    /// Assemble the application around an already opened fetcher.
    pub fn new(fetcher: BmrsFetcher) -> Self {
        Self {
            fetcher,
            clock: SystemClock,
            renderer: CsvReport,
        }
    }
}

impl Application for ImbalanceApp {
    type Fetcher = BmrsFetcher;
    type Clock = SystemClock;
    type Renderer = CsvReport;

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

#[cfg(test)]
mod tests {
    use super::*;
    use imb_bmrs::config::BmrsConfig;

    fn servable<T: imb_axum::ApiApplication>(_: &T) {}

    #[test]
    fn builds_a_servable_application() {
        let fetcher = BmrsFetcher::open(&BmrsConfig::default()).unwrap();
        let app = ImbalanceApp::new(fetcher);
        servable(&app);

        let (_, api) = imb_axum::router(app);
        let paths = api.paths.unwrap();
        assert!(paths.paths.contains_key("/daily_imbalance"));
        assert!(paths.paths.contains_key("/energy_report"));
    }
}
