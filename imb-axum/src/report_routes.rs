//! REST API endpoint for downloadable settlement day reports.

use crate::{
    ApiApplication,
    settlement::{DateQuery, load_day, unexpected},
};
use aide::axum::{ApiRouter, IntoApiResponse, routing::get_with};
use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse as _,
};
use imb_core::{
    models::DailyReport,
    ports::ReportRenderer as _,
};
use imb_metrics::{calculate_daily_imbalance, find_highest_imbalance_hour, hourly_imbalance};
use tracing::{Level, event};

/// Creates a router with the report endpoint.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new().api_route(
        "/energy_report",
        get_with(energy_report::<T>, |op| {
            op.tag("report")
                .summary("Download the settlement day report")
        }),
    )
}

/// Render the metrics and raw data of a settlement day as a downloadable file.
///
/// # Returns
///
/// - `200 OK`: The rendered report, sent as an attachment
/// - `400 Bad Request`: Invalid date, or the provider's data was malformed or incomplete
/// - `404 Not Found`: The provider has no data for the date
/// - `500 Internal Server Error`: The provider could not be reached or rendering failed
async fn energy_report<T: ApiApplication>(
    State(app): State<T>,
    Query(query): Query<DateQuery>,
) -> impl IntoApiResponse {
    let date = match query.resolve(&app) {
        Ok(date) => date,
        Err(failure) => return failure.into_response(),
    };
    let day = match load_day(&app, date).await {
        Ok(day) => day,
        Err(failure) => return failure.into_response(),
    };

    let report = DailyReport {
        day: &day,
        imbalance: calculate_daily_imbalance(&day),
        peak: find_highest_imbalance_hour(&day),
        hourly: hourly_imbalance(&day),
    };

    let renderer = app.renderer();
    match renderer.render(&report) {
        Ok(document) => {
            event!(Level::INFO, %date, bytes = document.len(), "report generated");
            let filename = format!(
                "energy_report_{date}.{}",
                renderer.file_extension()
            );
            (
                [
                    (header::CONTENT_TYPE, renderer.content_type().to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{filename}\""),
                    ),
                ],
                document,
            )
                .into_response()
        }
        Err(err) => {
            event!(Level::ERROR, %date, err = err.to_string());
            unexpected().into_response()
        }
    }
}
