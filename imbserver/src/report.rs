//! A CSV rendition of the settlement day report.

use imb_core::{models::DailyReport, ports::ReportRenderer};
use time::format_description::well_known::Rfc3339;

/// Failure to produce a CSV report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A record could not be written
    #[error("failed to write report: {0}")]
    Csv(#[from] csv::Error),
    /// The buffered output could not be flushed
    #[error("failed to flush report: {0}")]
    Io(#[from] std::io::Error),
    /// A period start time could not be formatted
    #[error("failed to format start time: {0}")]
    Format(#[from] time::error::Format),
}

/// Renders the day report as a sectioned CSV document.
///
/// Sections follow each other in one file, each introduced by a title row:
/// the daily imbalance summary, the highest imbalance hour, the hourly
/// volume profile, and the detailed per-period data. Monetary amounts and
/// volumes are written with two decimal places.
#[derive(Clone, Copy, Debug, Default)]
pub struct CsvReport;

fn money(value: f64) -> String {
    format!("{value:.2}")
}

impl ReportRenderer for CsvReport {
    type Error = ReportError;

    fn content_type(&self) -> &'static str {
        "text/csv; charset=utf-8"
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }

    fn render(&self, report: &DailyReport<'_>) -> Result<Vec<u8>, Self::Error> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());
        let date = report.day.date().to_string();

        writer.write_record(["Energy Data Report"])?;

        writer.write_record(["Daily Imbalance"])?;
        writer.write_record(["Date", "Total Cost (£)", "Unit Rate (£/MWh)"])?;
        writer.write_record([
            date.clone(),
            money(report.imbalance.total_cost),
            money(report.imbalance.unit_rate),
        ])?;

        writer.write_record(["Highest Imbalance Hour"])?;
        writer.write_record(["Date", "Hour", "Volume (MWh)"])?;
        writer.write_record([
            date,
            format!("{:02}:00", report.peak.hour),
            money(report.peak.volume),
        ])?;

        writer.write_record(["Hourly Imbalance"])?;
        writer.write_record(["Hour", "Volume (MWh)"])?;
        for (hour, volume) in report.hourly.iter().enumerate() {
            writer.write_record([format!("{hour:02}:00"), money(*volume)])?;
        }

        writer.write_record(["Detailed Energy Data"])?;
        writer.write_record([
            "Period",
            "Start Time",
            "System Sell Price (£)",
            "System Buy Price (£)",
            "Net Imbalance Volume (MWh)",
        ])?;
        for point in report.day.points() {
            writer.write_record([
                point.period.to_string(),
                point.start_time.format(&Rfc3339)?,
                money(point.sell_price),
                money(point.buy_price),
                money(point.net_imbalance_volume),
            ])?;
        }

        writer.into_inner().map_err(|err| err.into_error().into())
    }
}
