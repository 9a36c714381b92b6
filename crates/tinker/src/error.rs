//! CLI error types with miette diagnostics.
//!
//! Maps library errors into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use tinker_config::ConfigError;
use tinker_core::RouteError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const HTTP: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the telemetry API at {url}")]
    #[diagnostic(
        code(tinker::connection_failed),
        help(
            "Check that the server is running and reachable.\n\
             Override the address with --base-url or TINKER_API_BASE_URL."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: tinker_api::Error,
    },

    #[error("Request to {url} timed out")]
    #[diagnostic(
        code(tinker::timeout),
        help("Raise --timeout or api.timeout_secs, or omit it to wait indefinitely.")
    )]
    Timeout {
        url: String,
        #[source]
        source: tinker_api::Error,
    },

    // ── Responses ────────────────────────────────────────────────────

    #[error("Server answered HTTP {status} for {url}")]
    #[diagnostic(code(tinker::http_status))]
    HttpStatus {
        status: u16,
        url: String,
        #[help]
        body: Option<String>,
    },

    #[error("Unexpected response from the telemetry API")]
    #[diagnostic(code(tinker::bad_response))]
    BadResponse {
        #[source]
        source: tinker_api::Error,
    },

    // ── Navigation ───────────────────────────────────────────────────

    #[error("No view for path '{path}'")]
    #[diagnostic(
        code(tinker::route_not_found),
        help("Run `tinker routes` to list the known paths.")
    )]
    RouteNotFound { path: String },

    #[error(transparent)]
    #[diagnostic(code(tinker::route))]
    Route(RouteError),

    // ── Configuration ────────────────────────────────────────────────

    #[error("Invalid {field}: {reason}")]
    #[diagnostic(code(tinker::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(
        code(tinker::config),
        help("Fix the config file or environment, or run `tinker config init --force`.")
    )]
    Config(#[from] ConfigError),

    #[error("Config file already exists at {path}")]
    #[diagnostic(code(tinker::config_exists), help("Pass --force to overwrite it."))]
    ConfigExists { path: String },

    // ── Local ────────────────────────────────────────────────────────

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(tinker::output))]
    Output { message: String },

    #[error(transparent)]
    #[diagnostic(code(tinker::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to a process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::HttpStatus { status: 404, .. } | Self::RouteNotFound { .. } => {
                exit_code::NOT_FOUND
            }
            Self::HttpStatus { .. } => exit_code::HTTP,
            Self::Validation { .. }
            | Self::Config(_)
            | Self::ConfigExists { .. }
            | Self::Route(_) => exit_code::USAGE,
            Self::BadResponse { .. } | Self::Output { .. } | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── Conversion from library errors ───────────────────────────────────

impl From<tinker_api::Error> for CliError {
    fn from(err: tinker_api::Error) -> Self {
        if let tinker_api::Error::Transport(e) = &err {
            let url = e.url().map(ToString::to_string).unwrap_or_default();
            return if e.is_timeout() {
                CliError::Timeout { url, source: err }
            } else {
                CliError::ConnectionFailed { url, source: err }
            };
        }

        match err {
            tinker_api::Error::HttpStatus { status, url, body } => CliError::HttpStatus {
                status,
                url,
                body: (!body.is_empty()).then_some(body),
            },
            tinker_api::Error::InvalidUrl(_) | tinker_api::Error::UnsupportedBaseUrl { .. } => {
                CliError::Validation {
                    field: "base_url".into(),
                    reason: err.to_string(),
                }
            }
            tinker_api::Error::Transport(_)
            | tinker_api::Error::ClientBuild(_)
            | tinker_api::Error::Deserialization { .. } => CliError::BadResponse { source: err },
        }
    }
}

impl From<RouteError> for CliError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::NotFound { path } => CliError::RouteNotFound { path },
            other => CliError::Route(other),
        }
    }
}
