use serde::Deserialize;
use std::{borrow::Cow, error::Error, fmt};

/// Errors returned by the IGDB client.
///
/// Pre-flight failures (`InvalidArgument`, `OutOfRange`) are produced before
/// any request is sent. Everything else describes the outcome of a request.
#[derive(Debug)]
pub enum Status {
    InvalidArgument(String),
    OutOfRange(String),

    /// Network level failure reported by the transport, kept as is.
    Transport(Box<dyn Error + Send + Sync>),

    /// Non-success HTTP status classified by `ServerError::from_response`.
    Server(ServerError),

    /// Valid request that matched no entities.
    NoResults(String),

    /// Successful response with an empty or whitespace-only body.
    InvalidJson(String),

    Decode {
        context: String,
        source: serde_json::Error,
    },
}

impl Status {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Status::InvalidArgument(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Status::OutOfRange(msg.into())
    }

    pub fn no_results(context: impl Into<String>) -> Self {
        Status::NoResults(context.into())
    }

    pub fn invalid_json(context: impl Into<String>) -> Self {
        Status::InvalidJson(context.into())
    }

    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Status::Decode {
            context: context.into(),
            source,
        }
    }

    /// Returns true if the failure is worth retrying later: rate limiting, or
    /// a service-declared error carrying `temporary: true`. The client itself
    /// never retries.
    pub fn is_temporary(&self) -> bool {
        match self {
            Status::Server(err) => err.temporary,
            _ => false,
        }
    }

    /// Short label used for counters.
    pub fn kind(&self) -> &'static str {
        match self {
            Status::InvalidArgument(_) => "invalid_argument",
            Status::OutOfRange(_) => "out_of_range",
            Status::Transport(_) => "transport",
            Status::Server(_) => "server",
            Status::NoResults(_) => "no_results",
            Status::InvalidJson(_) => "invalid_json",
            Status::Decode { .. } => "decode",
        }
    }
}

impl From<reqwest::Error> for Status {
    fn from(err: reqwest::Error) -> Self {
        Status::Transport(Box::new(err))
    }
}

impl Error for Status {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Status::Transport(err) => Some(err.as_ref()),
            Status::Server(err) => Some(err),
            Status::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::InvalidArgument(msg) => write!(f, "Invalid argument error: {msg}"),
            Status::OutOfRange(msg) => write!(f, "Out of range error: {msg}"),
            Status::Transport(err) => write!(f, "Transport error: {err}"),
            Status::Server(err) => write!(f, "Server error: {err}"),
            Status::NoResults(context) => write!(f, "No results: {context}"),
            Status::InvalidJson(context) => {
                write!(f, "Invalid JSON: empty response body ({context})")
            }
            Status::Decode { context, source } => {
                write!(f, "Decode error: {source} ({context})")
            }
        }
    }
}

/// Error reported by the IGDB service itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    pub status: u16,
    pub message: Cow<'static, str>,
    pub temporary: bool,
}

pub const ERR_BAD_REQUEST: ServerError = ServerError {
    status: 400,
    message: Cow::Borrowed("bad request: check query parameters"),
    temporary: false,
};

pub const ERR_UNAUTHORIZED: ServerError = ServerError {
    status: 401,
    message: Cow::Borrowed("authentication failed: check for valid API key in user-key header"),
    temporary: false,
};

pub const ERR_FORBIDDEN: ServerError = ServerError {
    status: 403,
    message: Cow::Borrowed("authentication failed: API key lacks access to this resource"),
    temporary: false,
};

pub const ERR_TOO_MANY_REQUESTS: ServerError = ServerError {
    status: 429,
    message: Cow::Borrowed("too many requests: rate limit exceeded"),
    temporary: true,
};

pub const ERR_INTERNAL: ServerError = ServerError {
    status: 500,
    message: Cow::Borrowed("internal server error"),
    temporary: false,
};

impl ServerError {
    /// Classifies a non-success response. Well-known status codes map to the
    /// fixed constants above. Anything else is decoded from the service's own
    /// `{status, message, temporary}` payload when present.
    pub fn from_response(status: u16, body: &[u8]) -> ServerError {
        match status {
            400 => ERR_BAD_REQUEST,
            401 => ERR_UNAUTHORIZED,
            403 => ERR_FORBIDDEN,
            429 => ERR_TOO_MANY_REQUESTS,
            500 => ERR_INTERNAL,
            _ => match serde_json::from_slice::<ServerErrorBody>(body) {
                Ok(err) => ServerError {
                    status: err.status.unwrap_or(status),
                    message: Cow::Owned(err.message),
                    temporary: err.temporary,
                },
                Err(_) => ServerError {
                    status,
                    message: Cow::Owned(format!("unexpected status code {status}")),
                    temporary: false,
                },
            },
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

impl Error for ServerError {}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status {}: {}", self.status, self.message)
    }
}

#[derive(Deserialize)]
struct ServerErrorBody {
    #[serde(default)]
    status: Option<u16>,
    message: String,
    #[serde(default)]
    temporary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_statuses() {
        assert_eq!(ServerError::from_response(400, b""), ERR_BAD_REQUEST);
        assert_eq!(ServerError::from_response(401, b""), ERR_UNAUTHORIZED);
        assert_eq!(ServerError::from_response(403, b""), ERR_FORBIDDEN);
        assert_eq!(ServerError::from_response(429, b""), ERR_TOO_MANY_REQUESTS);
        assert_eq!(ServerError::from_response(500, b""), ERR_INTERNAL);
    }

    #[test]
    fn auth_failures() {
        assert!(ERR_UNAUTHORIZED.is_auth_failure());
        assert!(ERR_FORBIDDEN.is_auth_failure());
        assert!(!ERR_BAD_REQUEST.is_auth_failure());
    }

    #[test]
    fn fixed_errors_temporary_flag() {
        assert!(Status::Server(ERR_TOO_MANY_REQUESTS).is_temporary());
        assert!(!Status::Server(ERR_INTERNAL).is_temporary());
        assert!(!Status::invalid_argument("id").is_temporary());
    }

    #[test]
    fn service_declared_temporary_error() {
        let err = ServerError::from_response(
            503,
            br#"{"status":503,"message":"maintenance","temporary":true}"#,
        );
        assert!(Status::Server(err).is_temporary());
    }

    #[test]
    fn other_status_decoded_from_body() {
        let err = ServerError::from_response(
            503,
            br#"{"status":503,"message":"service unavailable","temporary":true}"#,
        );
        assert_eq!(err.status, 503);
        assert_eq!(err.message, "service unavailable");
        assert!(err.temporary);
    }

    #[test]
    fn other_status_without_body() {
        let err = ServerError::from_response(502, b"<html>Bad Gateway</html>");
        assert_eq!(err.status, 502);
        assert_eq!(err.message, "unexpected status code 502");
        assert!(!err.temporary);
    }

    #[test]
    fn decode_error_keeps_source() {
        let source = serde_json::from_str::<u64>("nope").unwrap_err();
        let status = Status::decode("games/1", source);
        assert!(status.source().is_some());
        assert!(status.to_string().contains("games/1"));
    }
}
