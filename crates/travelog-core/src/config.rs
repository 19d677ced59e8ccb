// crates/travelog-core/src/config.rs
use crate::error::{Result, TravelogError};
use std::time::Duration;
use url::Url;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_BASE_URL: &str = "TRAVELOG_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "TRAVELOG_TIMEOUT_SECS";

/// Where the cities backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Build a config from an explicit base URL.
    ///
    /// The URL must parse as an absolute `http(s)` URL. Trailing slashes are
    /// dropped so endpoint paths can be appended verbatim.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url.trim())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TravelogError::Config(format!(
                "unsupported scheme '{}' in {base_url}",
                parsed.scheme()
            )));
        }
        Ok(Self {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
            timeout,
        })
    }

    /// Read `TRAVELOG_API_URL` and `TRAVELOG_TIMEOUT_SECS`, falling back to
    /// the defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let timeout = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| TravelogError::Config(format!("{ENV_TIMEOUT_SECS}={raw}: {e}")))?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        match lookup(ENV_BASE_URL) {
            Some(url) => Self::new(&url, timeout),
            None => Ok(Self {
                timeout,
                ..Self::default()
            }),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/cities`
    pub fn cities_url(&self) -> String {
        format!("{}/cities", self.base_url)
    }

    /// `{base}/cities/{id}`, with `id` percent-encoded as one path segment.
    ///
    /// Empty, `.` and `..` ids would address the collection instead of a
    /// city and are rejected.
    pub fn city_url(&self, id: &str) -> Result<String> {
        if matches!(id, "" | "." | "..") {
            return Err(TravelogError::Config(format!("invalid city id '{id}'")));
        }
        let mut url = Url::parse(&self.cities_url())?;
        url.path_segments_mut()
            .map_err(|()| TravelogError::Config(format!("{} cannot be a base", self.base_url)))?
            .push(id);
        Ok(url.into())
    }
}
