/// Error types for the World API SDK.
///
/// Transport and queue failures surface raw; the paginated aggregator adds
/// offset context on top without swallowing the underlying cause.
use thiserror::Error;

/// The primary error type for the SDK.
#[derive(Error, Debug)]
pub enum WorldError {
    /// The exchange could not complete at the transport level (DNS,
    /// connection refused, aborted body read).
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The gateway answered with a non-success status code. Carries the
    /// error body when the gateway sent one that parsed as JSON.
    #[error("HTTP status {code}")]
    Status {
        code: u16,
        body: Option<serde_json::Value>,
    },

    /// A 2xx response arrived without a JSON body where one was required.
    #[error("response without parsed body")]
    MissingPayload,

    /// A paginated response lacked its items array.
    #[error("paginated response without data")]
    MissingData,

    /// A paginated response lacked its pagination metadata object.
    #[error("paginated response without metadata")]
    MissingMetadata,

    /// Pagination metadata lacked the declared total.
    #[error("paginated response without total")]
    MissingTotal,

    /// The aggregated item count disagrees with the server-declared total.
    #[error("aggregated {actual} items but server declared {expected}")]
    TotalMismatch { expected: u64, actual: u64 },

    /// A page beyond the first failed; partial results were discarded.
    #[error("aggregation aborted at offset {offset}: {source}")]
    AggregationAborted {
        offset: u64,
        #[source]
        source: Box<WorldError>,
    },

    /// A present response body did not decode into the expected model.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("url error: {0}")]
    Url(#[from] url::ParseError),

    /// The queue dropped a pending request without dispatching it. Only
    /// reachable when the queue's drain task is torn down mid-flight.
    #[error("request abandoned before dispatch")]
    ChannelClosed,
}

impl WorldError {
    /// Returns the HTTP status code if this is (or wraps) a status error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            WorldError::Status { code, .. } => Some(*code),
            WorldError::AggregationAborted { source, .. } => source.status_code(),
            _ => None,
        }
    }

    /// Returns the parsed error body if this is (or wraps) a status error
    /// that carried one.
    pub fn error_body(&self) -> Option<&serde_json::Value> {
        match self {
            WorldError::Status { body, .. } => body.as_ref(),
            WorldError::AggregationAborted { source, .. } => source.error_body(),
            _ => None,
        }
    }

    /// True when the response shape violated the pagination contract.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            WorldError::MissingPayload
                | WorldError::MissingData
                | WorldError::MissingMetadata
                | WorldError::MissingTotal
                | WorldError::TotalMismatch { .. }
        )
    }
}
