mod clock;
mod fetcher;
mod renderer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use fetcher::{FetchError, SettlementFetcher, ensure_settled};
pub use renderer::ReportRenderer;

/// The service-level composition of all ports.
///
/// Handlers are written against this trait alone; a binary (or a test)
/// supplies the concrete fetcher, clock and renderer.
pub trait Application {
    /// The settlement data provider
    type Fetcher: SettlementFetcher;

    /// The source of "now" for business-date calculations
    type Clock: Clock;

    /// The renderer used for downloadable day reports
    type Renderer: ReportRenderer;

    /// Get the settlement data provider
    fn fetcher(&self) -> &Self::Fetcher;

    /// Get the clock
    fn clock(&self) -> &Self::Clock;

    /// Get the report renderer
    fn renderer(&self) -> &Self::Renderer;
}
