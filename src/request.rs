/// Request descriptors for the World API.
///
/// One concrete type carries everything the transport needs for a single
/// exchange. Cross-cutting concerns (bearer auth, response format, page
/// window) are plain setters on this type rather than wrapper layers.
use reqwest::Method;
use url::Url;

use crate::errors::WorldError;

/// Response encodings offered by detail endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    /// Portable attestation of the same payload, verifiable offline or via
    /// the gateway's verify endpoint.
    Pod,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Pod => "pod",
        }
    }
}

/// An immutable description of one HTTP exchange: method, absolute URL,
/// headers, optional JSON body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Build a request for `path` relative to `base`.
    pub fn new(method: Method, base: &str, path: &str) -> Result<Self, WorldError> {
        let url = Url::parse(&format!("{}/{}", base.trim_end_matches('/'), path))?;
        Ok(Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn get(base: &str, path: &str) -> Result<Self, WorldError> {
        Self::new(Method::GET, base, path)
    }

    pub fn post(base: &str, path: &str, body: serde_json::Value) -> Result<Self, WorldError> {
        let mut request = Self::new(Method::POST, base, path)?;
        request.body = Some(body);
        Ok(request)
    }

    /// Attach a bearer token for authenticated endpoints.
    pub fn bearer(mut self, token: &str) -> Self {
        self.headers
            .push(("Authorization".into(), format!("Bearer {token}")));
        self
    }

    /// Select the response encoding (`format=json|pod`).
    pub fn format(self, format: ResponseFormat) -> Self {
        self.query("format", format.as_str())
    }

    /// Set the page window (`limit`/`offset`), replacing any previous one.
    pub fn page(mut self, limit: u32, offset: u64) -> Self {
        set_query_param(&mut self.url, "limit", &limit.to_string());
        set_query_param(&mut self.url, "offset", &offset.to_string());
        self
    }

    /// Set an arbitrary query parameter, replacing any previous value.
    pub fn query(mut self, key: &str, value: &str) -> Self {
        set_query_param(&mut self.url, key, value);
        self
    }
}

fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    for (k, v) in &kept {
        pairs.append_pair(k, v);
    }
    pairs.append_pair(key, value);
}
