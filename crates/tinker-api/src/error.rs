use thiserror::Error;

/// Top-level error type for the `tinker-api` crate.
///
/// Nothing here is retried or swallowed: every failure surfaces to the
/// caller that issued the request.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// Network-level failure (DNS, connection refused, configured timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Base URL or a built request URL does not parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Base URL parsed but is not usable as an API prefix.
    #[error("Unsupported base URL {url}: {reason}")]
    UnsupportedBaseUrl { url: String, reason: String },

    /// The underlying `reqwest::Client` could not be built.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    // ── Response ────────────────────────────────────────────────────
    /// The backend answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        status: u16,
        url: String,
        body: String,
    },

    /// A 2xx body that is not valid JSON for the requested type.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// HTTP status of a non-2xx response, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body carried by this error, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::HttpStatus { body, .. } | Self::Deserialization { body, .. } => {
                Some(body.as_str())
            }
            _ => None,
        }
    }

    /// Returns `true` if the backend reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the request never produced a response in time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Returns `true` if this is a transient error a caller may choose to retry.
    ///
    /// The client itself never retries.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::HttpStatus { status, .. } => matches!(status, 502..=504),
            _ => false,
        }
    }
}
