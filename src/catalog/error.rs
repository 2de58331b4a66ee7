use std::time::Duration;

/// Failure of a single request against the catalog service.
///
/// Never leaves the catalog client: every variant is logged and turned into
/// an empty result by [`super::CatalogClient`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    /// Connection refused, DNS failure, broken body stream
    #[error("network error: {0}")]
    Network(String),

    /// The request did not finish within the configured timeout
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The service answered with a non-success status code
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not the expected JSON document
    #[error("malformed response: {0}")]
    Parse(String),
}

impl CatalogError {
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            CatalogError::Timeout(timeout)
        } else if err.is_decode() {
            CatalogError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            CatalogError::Status {
                status: status.as_u16(),
                body: String::new(),
            }
        } else {
            CatalogError::Network(err.to_string())
        }
    }
}
