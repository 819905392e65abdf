//! Runtime configuration for one schedule query.

use std::time::Duration;

/// Public demo key published by BART for low-volume use.
pub const DEMO_API_KEY: &str = "MW9S-E7SL-26DU-VV8V";

/// Production ETD endpoint.
pub const DEFAULT_BASE_URL: &str = "http://api.bart.gov/api/etd.aspx";

/// Default origin station (Montgomery St.).
pub const DEFAULT_ORIGIN: &str = "MONT";

/// Default cap on departures kept from the feed.
pub const DEFAULT_TRAIN_COUNT: usize = 10;

/// Resolved settings for a single run, assembled in `main` from flags and
/// environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin station code, e.g. "MONT"
    pub origin: String,
    /// API key, appended to the request as the `key` query parameter
    pub api_key: String,
    /// Base URL of the ETD endpoint
    pub base_url: String,
    /// Maximum departures kept, counted in feed order
    pub max_trains: usize,
    /// Total HTTP timeout
    pub timeout: Duration,
}

impl Config {
    /// The request URL without the key parameter; `UrlParam` appends that.
    pub fn schedule_url(&self) -> String {
        format!("{}?cmd=etd&orig={}", self.base_url, self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_url_embeds_command_and_origin() {
        let config = Config {
            origin: "EMBR".into(),
            api_key: DEMO_API_KEY.into(),
            base_url: DEFAULT_BASE_URL.into(),
            max_trains: DEFAULT_TRAIN_COUNT,
            timeout: Duration::from_secs(30),
        };
        assert_eq!(
            config.schedule_url(),
            "http://api.bart.gov/api/etd.aspx?cmd=etd&orig=EMBR"
        );
    }
}
