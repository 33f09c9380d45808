//! Shared plumbing for the data routes: choosing the settlement date, running
//! the fetcher, and mapping fetch outcomes to HTTP responses.

use crate::ApiApplication;
use axum::{Json, http::StatusCode};
use imb_core::{
    calendar,
    models::SettlementDay,
    ports::{Clock as _, SettlementFetcher as _},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::{Level, event};

/// Query parameters accepted by every data route.
#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct DateQuery {
    /// Settlement date as `YYYY-MM-DD`. Defaults to yesterday in UK local time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// The body of every failed request
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ErrorResponse {
    /// What went wrong
    pub error: String,
}

pub(crate) type Failure = (StatusCode, Json<ErrorResponse>);

pub(crate) fn failure(status: StatusCode, error: impl Into<String>) -> Failure {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

pub(crate) fn unexpected() -> Failure {
    failure(
        StatusCode::INTERNAL_SERVER_ERROR,
        "An unexpected error occurred",
    )
}

impl DateQuery {
    /// The requested date, or the previous UK business day if none was given.
    pub(crate) fn resolve<T: ApiApplication>(&self, app: &T) -> Result<Date, Failure> {
        match &self.date {
            None => Ok(app.clock().previous_business_date()),
            Some(value) => calendar::parse_date(value).map_err(|err| {
                event!(Level::ERROR, date = %value, err = err.to_string());
                failure(
                    StatusCode::BAD_REQUEST,
                    format!("invalid date {value:?}, expected YYYY-MM-DD"),
                )
            }),
        }
    }
}

/// Fetch the settlement day for `date`, translating every outcome other than
/// a validated day into the matching error response.
pub(crate) async fn load_day<T: ApiApplication>(
    app: &T,
    date: Date,
) -> Result<SettlementDay, Failure> {
    match app.fetcher().fetch(date).await {
        Ok(Some(day)) => Ok(day),
        Ok(None) => {
            event!(Level::WARN, %date, "no settlement data available");
            Err(failure(
                StatusCode::NOT_FOUND,
                format!("No data available for {date}"),
            ))
        }
        Err(err) if err.is_client_error() => {
            event!(Level::ERROR, %date, err = err.to_string());
            Err(failure(StatusCode::BAD_REQUEST, err.to_string()))
        }
        Err(err) => {
            event!(Level::ERROR, %date, err = err.to_string());
            Err(unexpected())
        }
    }
}

/// Round for presentation
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
