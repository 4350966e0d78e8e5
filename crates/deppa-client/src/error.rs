//! Error types for the evaluation client.
//!
//! Two families: [`RequestError`] is the per-call failure value returned by
//! every operation, [`ConfigError`] is only produced while building a client.

use serde_json::Value;

/// Diagnostic attached to [`RequestError::RequestFailed`].
pub const DIAG_REQUEST_FAILED: &str = "error making the request";

/// Diagnostic attached to [`RequestError::MalformedResponse`].
pub const DIAG_MALFORMED_RESPONSE: &str = "error converting response to structured data";

/// Diagnostic attached to [`RequestError::EmptyOrInvalidBody`].
pub const DIAG_EMPTY_BODY: &str = "response is not well-formed";

/// Diagnostic attached to [`RequestError::UnexpectedStatus`].
pub const DIAG_UNEXPECTED_STATUS: &str = "service answered with an error status";

/// Failure category of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Transport-level failure: connect, DNS, timeout, body read.
    RequestFailed,
    /// Body received but not JSON.
    MalformedResponse,
    /// Body empty, or JSON that decodes to an empty value.
    EmptyOrInvalidBody,
    /// Non-empty JSON body with a non-2xx status.
    UnexpectedStatus,
}

impl ErrorKind {
    /// Stable numeric code, as documented for the service integration.
    pub fn code(&self) -> u16 {
        match self {
            Self::RequestFailed => 1001,
            Self::MalformedResponse => 1002,
            Self::EmptyOrInvalidBody => 1003,
            Self::UnexpectedStatus => 1004,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::RequestFailed => "request_failed",
            Self::MalformedResponse => "malformed_response",
            Self::EmptyOrInvalidBody => "empty_or_invalid_body",
            Self::UnexpectedStatus => "unexpected_status",
        };
        f.write_str(name)
    }
}

/// Per-call failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestError {
    /// The HTTP exchange itself failed.
    #[error("error making the request: {message}")]
    RequestFailed { message: String, timed_out: bool },

    /// The body could not be parsed as JSON.
    #[error("error converting response to structured data (HTTP {status}): {message}")]
    MalformedResponse {
        status: u16,
        message: String,
        raw_body: String,
    },

    /// The body was empty or decoded to an empty value.
    #[error("response is not well-formed (HTTP {status})")]
    EmptyOrInvalidBody { status: u16, raw_body: String },

    /// The service returned JSON together with a non-success status.
    #[error("service answered with HTTP {status}")]
    UnexpectedStatus {
        status: u16,
        data: Value,
        raw_body: String,
    },
}

impl RequestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RequestFailed { .. } => ErrorKind::RequestFailed,
            Self::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            Self::EmptyOrInvalidBody { .. } => ErrorKind::EmptyOrInvalidBody,
            Self::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
        }
    }

    /// Short human-readable description of the failure category.
    pub fn diagnostic(&self) -> &'static str {
        match self {
            Self::RequestFailed { .. } => DIAG_REQUEST_FAILED,
            Self::MalformedResponse { .. } => DIAG_MALFORMED_RESPONSE,
            Self::EmptyOrInvalidBody { .. } => DIAG_EMPTY_BODY,
            Self::UnexpectedStatus { .. } => DIAG_UNEXPECTED_STATUS,
        }
    }

    /// HTTP status, when a response was received.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { .. } => None,
            Self::MalformedResponse { status, .. }
            | Self::EmptyOrInvalidBody { status, .. }
            | Self::UnexpectedStatus { status, .. } => Some(*status),
        }
    }

    /// Raw response body, when a response was received.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::RequestFailed { .. } => None,
            Self::MalformedResponse { raw_body, .. }
            | Self::EmptyOrInvalidBody { raw_body, .. }
            | Self::UnexpectedStatus { raw_body, .. } => Some(raw_body),
        }
    }

    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::RequestFailed => 5,
            ErrorKind::MalformedResponse => 6,
            ErrorKind::EmptyOrInvalidBody => 6,
            ErrorKind::UnexpectedStatus => 7,
        }
    }

    /// Whether the failure happened because the configured timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::RequestFailed { timed_out: true, .. })
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed {
            timed_out: err.is_timeout(),
            message: err.to_string(),
        }
    }
}

/// Errors raised while loading configuration or building a client.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required setting is absent.
    #[error("missing configuration value: {name}")]
    Missing { name: &'static str },

    /// A setting is present but unusable.
    #[error("invalid configuration value for {name}: {message}")]
    Invalid { name: &'static str, message: String },

    /// Config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for the expected shape.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to create HTTP client: {message}")]
    HttpClient { message: String },
}

/// Result of a single service call.
pub type RequestResult<T> = Result<T, RequestError>;

/// Result type for configuration and construction.
pub type ConfigResult<T> = Result<T, ConfigError>;
