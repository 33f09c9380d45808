//! Wire types of the BMRS system prices endpoint.
//!
//! Every field is optional at this layer so that a missing field can be
//! reported by name instead of as a generic deserialization failure.

use imb_core::{models::SettlementPoint, ports::FetchError};
use serde::Deserialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// The response envelope
#[derive(Debug, Deserialize)]
pub(crate) struct SystemPrices {
    pub data: Option<Vec<SystemPriceRecord>>,
}

/// A single settlement period. BMRS sends more fields than these; the rest
/// are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SystemPriceRecord {
    pub settlement_period: Option<u32>,
    pub start_time: Option<String>,
    pub system_sell_price: Option<f64>,
    pub system_buy_price: Option<f64>,
    pub net_imbalance_volume: Option<f64>,
}

impl SystemPriceRecord {
    /// Convert the `index`-th record of a response into a settlement point.
    pub fn into_point(self, index: usize) -> Result<SettlementPoint, FetchError> {
        let period = self
            .settlement_period
            .ok_or_else(|| FetchError::missing_field("settlementPeriod", index))?;
        let start_time = self
            .start_time
            .ok_or_else(|| FetchError::missing_field("startTime", index))?;
        let start_time = OffsetDateTime::parse(&start_time, &Rfc3339).map_err(|err| {
            FetchError::MalformedData(format!(
                "record {index} has invalid `startTime` {start_time:?}: {err}"
            ))
        })?;
        let sell_price = self
            .system_sell_price
            .ok_or_else(|| FetchError::missing_field("systemSellPrice", index))?;
        let buy_price = self
            .system_buy_price
            .ok_or_else(|| FetchError::missing_field("systemBuyPrice", index))?;
        let net_imbalance_volume = self
            .net_imbalance_volume
            .ok_or_else(|| FetchError::missing_field("netImbalanceVolume", index))?;

        Ok(SettlementPoint {
            period,
            start_time,
            sell_price,
            buy_price,
            net_imbalance_volume,
        })
    }
}
