use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapboxError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Mapbox API error: {0}")]
    Api(String),

    #[error("no drivable route for this waypoint span: {code}")]
    NoRoute { code: String },

    #[error("no location found for \"{query}\"")]
    AddressNotFound { query: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Returns `true` for errors worth retrying before a chunk falls back to
/// its raw coordinates.
///
/// Network-level failures and server-side statuses (5xx, 429) are
/// transient. `NoRoute`, a rejected token, or a malformed body would fail
/// identically on a second attempt.
pub(crate) fn is_transient(err: &MapboxError) -> bool {
    match err {
        MapboxError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        MapboxError::UnexpectedStatus { status, .. } => *status >= 500 || *status == 429,
        MapboxError::Api(_)
        | MapboxError::NoRoute { .. }
        | MapboxError::AddressNotFound { .. }
        | MapboxError::Deserialize { .. } => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_transient() {
        assert!(is_transient(&MapboxError::UnexpectedStatus {
            status: 502,
            url: "http://example.test".to_owned(),
        }));
    }

    #[test]
    fn missing_route_is_not_transient() {
        assert!(!is_transient(&MapboxError::NoRoute {
            code: "NoSegment".to_owned(),
        }));
    }

    #[test]
    fn unresolved_address_is_not_transient() {
        assert!(!is_transient(&MapboxError::AddressNotFound {
            query: "nowhere".to_owned(),
        }));
    }
}
