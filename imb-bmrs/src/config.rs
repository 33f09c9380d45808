//! Configuration types for the BMRS provider.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Elexon BMRS client.
///
/// # Examples
///
/// ```
/// use imb_bmrs::config::BmrsConfig;
/// use std::time::Duration;
///
/// // Use the public BMRS API
/// let config = BmrsConfig::default();
///
/// // Point at a mirror, with a tighter timeout and clock-change aware day lengths
/// let config = BmrsConfig {
///     base_url: "http://localhost:9000/bmrs/api/v1".to_string(),
///     timeout: Duration::from_secs(5),
///     clock_change_aware: true,
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BmrsConfig {
    /// Base URL of the BMRS API, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound on the whole upstream request, connection included
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// Expect 46 or 50 periods on clock-change days instead of always 48
    #[serde(default)]
    pub clock_change_aware: bool,
}

fn default_base_url() -> String {
    "https://data.elexon.co.uk/bmrs/api/v1".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Default for BmrsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            clock_change_aware: false,
        }
    }
}
