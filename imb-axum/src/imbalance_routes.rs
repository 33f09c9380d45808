//! REST API endpoints for the derived imbalance metrics.

use crate::{
    ApiApplication,
    settlement::{DateQuery, Failure, load_day, round2},
};
use aide::axum::{ApiRouter, routing::get_with};
use axum::{
    Json,
    extract::{Query, State},
};
use imb_metrics::{calculate_daily_imbalance, find_highest_imbalance_hour};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{Level, event};

/// Daily imbalance cost and unit rate, rounded to two decimal places
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct DailyImbalanceResponse {
    /// The settlement date
    pub date: String,
    /// Total cost of the day's imbalances (£)
    pub total_daily_imbalance_cost: f64,
    /// Average imbalance cost per MWh (£/MWh)
    pub daily_imbalance_unit_rate: f64,
}

/// The hour with the highest absolute imbalance volume
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct HighestImbalanceHourResponse {
    /// The settlement date
    pub date: String,
    /// Hour of day, 0 to 23, of the period start times as published (UTC)
    pub highest_imbalance_hour: u8,
    /// Absolute imbalance volume in that hour (MWh), rounded to two decimal places
    pub highest_imbalance_volume: f64,
}

/// Creates a router with the metric endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route(
            "/daily_imbalance",
            get_with(daily_imbalance::<T>, |op| {
                op.tag("imbalance")
                    .summary("Total daily imbalance cost and unit rate")
            }),
        )
        .api_route(
            "/highest_imbalance_hour",
            get_with(highest_imbalance_hour::<T>, |op| {
                op.tag("imbalance")
                    .summary("Hour with the highest absolute imbalance volume")
            }),
        )
}

/// Report the total imbalance cost and unit rate of a settlement day.
///
/// # Returns
///
/// - `200 OK`: The day's imbalance cost and unit rate
/// - `400 Bad Request`: Invalid date, or the provider's data was malformed or incomplete
/// - `404 Not Found`: The provider has no data for the date
/// - `500 Internal Server Error`: The provider could not be reached
async fn daily_imbalance<T: ApiApplication>(
    State(app): State<T>,
    Query(query): Query<DateQuery>,
) -> Result<Json<DailyImbalanceResponse>, Failure> {
    let date = query.resolve(&app)?;
    let day = load_day(&app, date).await?;

    let imbalance = calculate_daily_imbalance(&day);
    let response = DailyImbalanceResponse {
        date: date.to_string(),
        total_daily_imbalance_cost: round2(imbalance.total_cost),
        daily_imbalance_unit_rate: round2(imbalance.unit_rate),
    };

    event!(
        Level::INFO,
        %date,
        total_cost = response.total_daily_imbalance_cost,
        unit_rate = response.daily_imbalance_unit_rate,
        "daily imbalance calculated"
    );
    Ok(Json(response))
}

/// Report which hour of a settlement day had the highest absolute imbalance volume.
///
/// # Returns
///
/// - `200 OK`: The peak hour and its volume
/// - `400 Bad Request`: Invalid date, or the provider's data was malformed or incomplete
/// - `404 Not Found`: The provider has no data for the date
/// - `500 Internal Server Error`: The provider could not be reached
async fn highest_imbalance_hour<T: ApiApplication>(
    State(app): State<T>,
    Query(query): Query<DateQuery>,
) -> Result<Json<HighestImbalanceHourResponse>, Failure> {
    let date = query.resolve(&app)?;
    let day = load_day(&app, date).await?;

    let peak = find_highest_imbalance_hour(&day);
    let response = HighestImbalanceHourResponse {
        date: date.to_string(),
        highest_imbalance_hour: peak.hour,
        highest_imbalance_volume: round2(peak.volume),
    };

    event!(
        Level::INFO,
        %date,
        hour = response.highest_imbalance_hour,
        volume = response.highest_imbalance_volume,
        "highest imbalance hour calculated"
    );
    Ok(Json(response))
}
