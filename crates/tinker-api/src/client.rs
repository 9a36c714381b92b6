// Async HTTP client for the Tinker Space Command telemetry API.
//
// Every operation is a single GET against `{base_url}{path}[?query]`.
// Bodies are decoded as JSON and handed back untouched.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::operation::{ApiClientConfig, HttpRequestSpec, ResourceOperation};
use crate::transport::TransportConfig;
use crate::Error;

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the telemetry API.
///
/// Cheap to share: clone it, or hold it behind an `Arc`. Concurrent calls
/// are independent; the only shared state is the read-only config and the
/// connection pool inside `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiClientConfig,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client with its own `reqwest::Client`.
    pub fn new(config: ApiClientConfig, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, config })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(config: ApiClientConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// The request `op` expands into, without sending it.
    ///
    /// The URL is exactly the one [`execute`](Self::execute) sends.
    pub fn request_spec(&self, op: &ResourceOperation) -> Result<HttpRequestSpec, Error> {
        HttpRequestSpec::build(&self.config, op)
    }

    // ── Execution ────────────────────────────────────────────────────

    /// Issue the request for `op` and decode the body as `T`.
    pub async fn execute<T: DeserializeOwned>(&self, op: &ResourceOperation) -> Result<T, Error> {
        let url = self.request_spec(op)?.into_url()?;
        debug!(operation = op.name(), "GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        let url = resp.url().to_string();

        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            // The status is the error; a body we cannot read only loses detail.
            let body = match resp.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(status = status.as_u16(), %url, error = %e, "failed to read error body");
                    String::new()
                }
            };
            warn!(status = status.as_u16(), %url, "backend returned an error status");
            Err(Error::HttpStatus {
                status: status.as_u16(),
                url,
                body,
            })
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Sensors ──────────────────────────────────────────────────────

    pub async fn list_sensors(&self) -> Result<Value, Error> {
        self.execute(&ResourceOperation::ListSensors).await
    }

    pub async fn get_sensor(&self, sensor_id: &str) -> Result<Value, Error> {
        self.execute(&ResourceOperation::get_sensor(sensor_id)).await
    }

    /// Samples of `channel_id` on `sensor_id` from midnight of `start_date`
    /// to midnight of `end_date` (Mountain Time). Dates are sent verbatim.
    pub async fn query_sensor_channel(
        &self,
        sensor_id: &str,
        channel_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Value, Error> {
        self.execute(&ResourceOperation::query_sensor_channel(
            sensor_id, channel_id, start_date, end_date,
        ))
        .await
    }

    // ── Spaces ───────────────────────────────────────────────────────

    pub async fn list_spaces(&self) -> Result<Value, Error> {
        self.execute(&ResourceOperation::ListSpaces).await
    }

    pub async fn get_space(&self, space_id: &str) -> Result<Value, Error> {
        self.execute(&ResourceOperation::get_space(space_id)).await
    }
}
