//! Signed HTTP service implementation

use crate::config::ServiceConfig;
use async_trait::async_trait;
use cask_common::{HttpMethod, HttpStatus, Service, TransportError};
use serde_json::Value;
use tracing::debug;

const API_KEY_HEADER: &str = "X-API-Key";

/// Reqwest-backed [`Service`] for one base collection.
///
/// Owns the connection pool, the API-key header and the request timeout.
/// It never interprets status codes and never retries; a failed request
/// surfaces immediately as a [`TransportError`].
#[derive(Debug, Clone)]
pub struct HttpService {
    client: reqwest::Client,
    root_url: String,
    project_key: String,
}

impl HttpService {
    /// Create a service from the given configuration.
    pub fn new(config: ServiceConfig) -> Result<Self, TransportError> {
        if config.name.is_empty() {
            return Err(TransportError::InvalidRequest(
                "parameter 'name' must be a non-empty string".to_string(),
            ));
        }
        if config.project_key.is_empty() || config.project_id.is_empty() {
            return Err(TransportError::InvalidRequest(
                "project key and project id must be non-empty strings".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            client,
            root_url: config.root_url(),
            project_key: config.project_key,
        })
    }

    /// Root URL of the collection this service talks to.
    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    fn classify(err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else if err.is_request() || err.is_builder() {
            TransportError::InvalidRequest(err.to_string())
        } else {
            TransportError::Connection(err.to_string())
        }
    }
}

#[async_trait]
impl Service for HttpService {
    async fn request(
        &self,
        path: &str,
        method: HttpMethod,
        body: Option<Value>,
    ) -> Result<(HttpStatus, Option<Value>), TransportError> {
        let url = format!("{}{}", self.root_url, path);
        debug!("{} {}", method, url);

        let mut builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };
        builder = builder.header(API_KEY_HEADER, &self.project_key);
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(Self::classify)?;
        let status = HttpStatus(response.status().as_u16());
        let bytes = response.bytes().await.map_err(Self::classify)?;

        let decoded = if bytes.is_empty() {
            None
        } else {
            Some(
                serde_json::from_slice(&bytes)
                    .map_err(|e| TransportError::Decode(e.to_string()))?,
            )
        };

        Ok((status, decoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service_for(server: &MockServer) -> HttpService {
        let config = ServiceConfig::new("books", "secret-key", "proj1").host(server.uri());
        HttpService::new(config).unwrap()
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = HttpService::new(ServiceConfig::new("", "secret", "proj1")).unwrap_err();
        assert!(matches!(err, TransportError::InvalidRequest(_)));
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let err = HttpService::new(ServiceConfig::new("books", "", "proj1")).unwrap_err();
        assert!(matches!(err, TransportError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_request_signed_and_routed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/proj1/books/items/k1"))
            .and(header(API_KEY_HEADER, "secret-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "k1"})))
            .expect(1)
            .mount(&server)
            .await;

        let service = service_for(&server);
        let (status, body) = service
            .request("/items/k1", HttpMethod::Get, None)
            .await
            .unwrap();

        assert_eq!(status, HttpStatus::OK);
        assert_eq!(body, Some(json!({"key": "k1"})));
    }

    #[tokio::test]
    async fn test_json_body_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/proj1/books/items"))
            .and(body_json(json!({"item": {"key": "k1", "title": "dune"}})))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"key": "k1", "title": "dune"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let service = service_for(&server);
        let (status, body) = service
            .request(
                "/items",
                HttpMethod::Post,
                Some(json!({"item": {"key": "k1", "title": "dune"}})),
            )
            .await
            .unwrap();

        assert_eq!(status, HttpStatus::CREATED);
        assert_eq!(body.unwrap()["title"], "dune");
    }

    #[tokio::test]
    async fn test_empty_body_decodes_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/proj1/books/items/k1"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let service = service_for(&server);
        let (status, body) = service
            .request("/items/k1", HttpMethod::Delete, None)
            .await
            .unwrap();

        assert_eq!(status, HttpStatus::OK);
        assert!(body.is_none());
    }

    #[tokio::test]
    async fn test_status_not_interpreted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/proj1/books/items/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": ["not found"]})))
            .mount(&server)
            .await;

        let service = service_for(&server);
        let (status, body) = service
            .request("/items/missing", HttpMethod::Get, None)
            .await
            .unwrap();

        // 404 is data for the caller, not a transport error
        assert_eq!(status, HttpStatus::NOT_FOUND);
        assert!(body.is_some());
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/proj1/books/items/k1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let service = service_for(&server);
        let err = service
            .request("/items/k1", HttpMethod::Get, None)
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }
}
