use thiserror::Error;

#[derive(Debug, Error)]
pub enum WigleError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("WiGLE rejected the supplied credentials (status {status})")]
    CredentialsRejected { status: u16 },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("WiGLE refused the query: {0}")]
    Api(String),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Returns `true` for errors worth retrying at the same page offset.
///
/// **Retriable:** network-level failures (timeout, connection reset) and
/// server-side statuses (5xx, 429).
///
/// **Not retriable:** rejected credentials, an API-level refusal, a client
/// error status, or a body that does not parse — repeating the request
/// would return the same answer.
pub(crate) fn is_transient(err: &WigleError) -> bool {
    match err {
        WigleError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        WigleError::UnexpectedStatus { status, .. } => *status >= 500 || *status == 429,
        WigleError::CredentialsRejected { .. }
        | WigleError::Api(_)
        | WigleError::Deserialize { .. } => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_transient() {
        assert!(is_transient(&WigleError::UnexpectedStatus {
            status: 503,
            url: "http://example.test".to_owned(),
        }));
    }

    #[test]
    fn rate_limiting_is_transient() {
        assert!(is_transient(&WigleError::UnexpectedStatus {
            status: 429,
            url: "http://example.test".to_owned(),
        }));
    }

    #[test]
    fn credential_rejection_is_not_transient() {
        assert!(!is_transient(&WigleError::CredentialsRejected {
            status: 401
        }));
    }

    #[test]
    fn api_refusal_is_not_transient() {
        assert!(!is_transient(&WigleError::Api("too many queries today".to_owned())));
    }

    #[test]
    fn parse_failure_is_not_transient() {
        let source = serde_json::from_str::<()>("nope").unwrap_err();
        assert!(!is_transient(&WigleError::Deserialize {
            context: "test".to_owned(),
            source,
        }));
    }
}
