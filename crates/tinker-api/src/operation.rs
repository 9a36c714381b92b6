// Resource operations and the request templates they expand into.
//
// Building a request is string work: the base URL is a validated prefix
// and every operation appends its own path and query. Identifiers and dates
// are inserted verbatim, then the whole URL goes through the same WHATWG
// parse the transport applies, so what is reported is what is sent.

use std::fmt;

use serde::Serialize;
use url::Url;

use crate::Error;

/// Base URL of the telemetry backend on the space's local network.
pub const DEFAULT_BASE_URL: &str = "http://ess-master1.local:5000/api/v1";

/// Fixed time-of-day suffix appended to calendar dates in channel queries.
pub const MIDNIGHT_MST_SUFFIX: &str = "T00:00:00MST";

// ── ApiClientConfig ──────────────────────────────────────────────────

/// Where the API lives. Set once, read by every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    base_url: String,
}

impl ApiClientConfig {
    /// Validate `base_url` and normalise away any trailing slash.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let parsed = Url::parse(base_url)?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::UnsupportedBaseUrl {
                url: base_url.to_owned(),
                reason: format!("scheme must be http or https, got '{}'", parsed.scheme()),
            });
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(Error::UnsupportedBaseUrl {
                url: base_url.to_owned(),
                reason: "query strings and fragments are not allowed".into(),
            });
        }

        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

// ── ResourceOperation ────────────────────────────────────────────────

/// One logical backend query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceOperation {
    ListSensors,
    GetSensor {
        sensor_id: String,
    },
    ListSpaces,
    GetSpace {
        space_id: String,
    },
    /// Samples of one sensor channel between two calendar dates.
    QuerySensorChannel {
        sensor_id: String,
        channel_id: String,
        start_date: String,
        end_date: String,
    },
}

impl ResourceOperation {
    pub fn get_sensor(sensor_id: impl Into<String>) -> Self {
        Self::GetSensor {
            sensor_id: sensor_id.into(),
        }
    }

    pub fn get_space(space_id: impl Into<String>) -> Self {
        Self::GetSpace {
            space_id: space_id.into(),
        }
    }

    pub fn query_sensor_channel(
        sensor_id: impl Into<String>,
        channel_id: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self::QuerySensorChannel {
            sensor_id: sensor_id.into(),
            channel_id: channel_id.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListSensors => "list_sensors",
            Self::GetSensor { .. } => "get_sensor",
            Self::ListSpaces => "list_spaces",
            Self::GetSpace { .. } => "get_space",
            Self::QuerySensorChannel { .. } => "query_sensor_channel",
        }
    }

    /// Path relative to the base URL, always starting with `/`.
    pub fn path(&self) -> String {
        match self {
            Self::ListSensors => "/sensors".to_owned(),
            Self::GetSensor { sensor_id } => format!("/sensor/{sensor_id}"),
            Self::ListSpaces => "/spaces".to_owned(),
            Self::GetSpace { space_id } => format!("/space/{space_id}"),
            Self::QuerySensorChannel { sensor_id, .. } => format!("/query/sensor/{sensor_id}"),
        }
    }

    /// Query parameters in wire order. Values are not percent-encoded.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::QuerySensorChannel {
                channel_id,
                start_date,
                end_date,
                ..
            } => vec![
                ("channel", channel_id.clone()),
                ("startDateTime", format!("{start_date}{MIDNIGHT_MST_SUFFIX}")),
                ("endDateTime", format!("{end_date}{MIDNIGHT_MST_SUFFIX}")),
            ],
            Self::ListSensors
            | Self::GetSensor { .. }
            | Self::ListSpaces
            | Self::GetSpace { .. } => Vec::new(),
        }
    }
}

// ── HttpRequestSpec ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
        }
    }
}

/// A fully expanded outbound request.
///
/// `url` is already normalised: characters that cannot appear in a URL are
/// percent-encoded and `.`/`..` segments are collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpRequestSpec {
    pub method: Method,
    pub url: String,
}

impl HttpRequestSpec {
    /// Expand `op` against `config`: `{base_url}{path}[?query]`.
    pub fn build(config: &ApiClientConfig, op: &ResourceOperation) -> Result<Self, Error> {
        let mut url = format!("{}{}", config.base_url(), op.path());

        let query = op.query();
        if !query.is_empty() {
            let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }

        Ok(Self {
            method: Method::Get,
            url: Url::parse(&url)?.into(),
        })
    }

    /// Parsed form of [`url`](Self::url), ready for the transport.
    pub fn into_url(self) -> Result<Url, Error> {
        Ok(Url::parse(&self.url)?)
    }
}

impl fmt::Display for HttpRequestSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}
