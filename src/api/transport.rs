use crate::config::Config;
use crate::error::{Result, WynnError};
use serde_json::Value;
use std::io::Read;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// One API call: method, path below the version prefix (query included) and
/// an optional JSON body. Built per call and dropped once the call returns.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        ApiRequest {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        ApiRequest {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }
}

/// Executes an [`ApiRequest`] and hands back the decoded body.
///
/// Implementations must not inspect the status code: whatever JSON the
/// server answered with is the result.
pub trait Transport {
    fn execute(&self, request: &ApiRequest) -> Result<Value>;
}

/// Blocking HTTPS transport. Every call builds its own agent with no idle
/// connections kept, so nothing is pooled between calls.
#[derive(Debug, Clone, Default)]
pub struct UreqTransport {
    config: Config,
}

impl UreqTransport {
    pub fn new(config: Config) -> Self {
        UreqTransport { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn url_for(&self, path: &str) -> Result<url::Url> {
        let raw = self.config.endpoint_url(path);
        url::Url::parse(&raw).map_err(|e| WynnError::HttpError(format!("invalid URL {}: {}", raw, e)))
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &ApiRequest) -> Result<Value> {
        let url = self.url_for(&request.path)?;

        let agent = ureq::AgentBuilder::new()
            .user_agent(&self.config.user_agent)
            .max_idle_connections(0)
            .build();

        debug!(method = request.method.as_str(), url = %url, "sending request");

        let pending = agent.request(request.method.as_str(), url.as_str());
        let result = match &request.body {
            Some(body) => {
                let payload = serde_json::to_string(body)
                    .map_err(|e| WynnError::JsonError(e.to_string()))?;
                pending
                    .set("Content-Type", "application/json")
                    .send_string(&payload)
            }
            None => pending.call(),
        };

        let response = match result {
            Ok(resp) => resp,
            // Error statuses still carry a body worth returning.
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(e) => {
                return Err(WynnError::HttpError(e.to_string()));
            }
        };

        let status = response.status();
        // into_string caps bodies at 10 MB; the full item database is larger.
        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| WynnError::HttpError(e.to_string()))?;

        debug!(status, bytes = body.len(), "response received");

        serde_json::from_slice(&body).map_err(|e| WynnError::JsonError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_constructors_set_method_and_body() {
        let get = ApiRequest::get("/classes");
        assert_eq!(get.method, Method::Get);
        assert!(get.body.is_none());

        let post = ApiRequest::post("/item/search", json!({"query": "Sword"}));
        assert_eq!(post.method, Method::Post);
        assert_eq!(post.body, Some(json!({"query": "Sword"})));
    }

    #[test]
    fn url_keeps_query_marker_and_encodes_spaces() {
        let transport = UreqTransport::new(Config::default());
        let url = transport.url_for("/guild/Some Guild?identifier=uuid").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.wynncraft.com/v3/guild/Some%20Guild?identifier=uuid"
        );

        let url = transport.url_for("/player/Salted?fullResult").unwrap();
        assert_eq!(url.query(), Some("fullResult"));
    }

    #[test]
    fn unparseable_base_url_is_a_transport_error() {
        let transport = UreqTransport::new(Config::with_base_url("not a url"));
        let err = transport.execute(&ApiRequest::get("/news")).unwrap_err();
        assert!(matches!(err, WynnError::HttpError(_)));
    }
}
