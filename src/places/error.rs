//! Errors from places provider calls

use thiserror::Error;

/// A single upstream call failed
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, DNS, TLS or timeout failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered outside 200-299
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },

    /// The body did not match the expected shape
    #[error("failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl UpstreamError {
    /// HTTP status, when the provider answered with one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Decode { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_preserved() {
        let err = UpstreamError::Status {
            endpoint: "text search",
            status: 503,
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "text search returned HTTP 503");
    }

    #[test]
    fn test_decode_message() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = UpstreamError::Decode {
            context: "photo media".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("failed to decode photo media"));
        assert_eq!(err.status(), None);
    }
}
