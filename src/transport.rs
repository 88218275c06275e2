/// Transport adapter: one HTTP exchange per call.
///
/// Normalizes every outcome into either a [`ParsedResponse`] or a typed
/// [`WorldError`]. No retries and no caching live at this layer.
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::errors::WorldError;
use crate::request::ApiRequest;

/// A completed exchange: status code plus the body, when one was present
/// and parsed as JSON.
#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub status: u16,
    pub body: Option<serde_json::Value>,
}

impl ParsedResponse {
    /// Decode the body into a typed model.
    ///
    /// Fails with [`WorldError::MissingPayload`] when the response carried
    /// no JSON body; callers that tolerate empty bodies check `body`
    /// directly instead.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, WorldError> {
        let body = self.body.as_ref().ok_or(WorldError::MissingPayload)?;
        Ok(serde_json::from_value(body.clone())?)
    }
}

/// Performs single HTTP exchanges against the gateway.
#[derive(Debug, Clone, Default)]
pub struct Transport {
    http: Client,
}

impl Transport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute exactly one exchange for `request`.
    ///
    /// A non-success status becomes [`WorldError::Status`] carrying any
    /// error body the gateway sent. A success response with an empty or
    /// non-JSON body is not an error; its `body` is `None`.
    pub async fn send(&self, request: &ApiRequest) -> Result<ParsedResponse, WorldError> {
        debug!(
            "transport.send method={} url={}",
            request.method, request.url
        );

        let mut builder = self
            .http
            .request(request.method.clone(), request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        // Best-effort parse; absence of a body is not an error.
        let body: Option<serde_json::Value> = serde_json::from_str(&text).ok();

        debug!(
            "transport.send status={} body_len={} parsed={}",
            status,
            text.len(),
            body.is_some()
        );

        if !status.is_success() {
            return Err(WorldError::Status {
                code: status.as_u16(),
                body,
            });
        }

        Ok(ParsedResponse {
            status: status.as_u16(),
            body,
        })
    }
}
