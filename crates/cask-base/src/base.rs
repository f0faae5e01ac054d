//! Base client operations

use crate::error::{BaseError, Result};
use crate::fetch::{FetchParams, FetchResponse};
use crate::ttl::{insert_ttl, Expires, TTL_ATTRIBUTE};
use crate::update::{UpdatePayload, Updates};
use cask_common::{HttpMethod, Service};
use cask_http::{HttpService, ServiceConfig};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Hard ceiling on one put_many batch, enforced before any request.
pub const MAX_BATCH_SIZE: usize = 25;

/// Client for one collection of a hosted key-value/document base.
///
/// Each operation validates its inputs, shapes one JSON payload, issues
/// exactly one signed request through the [`Service`] channel and maps
/// the status code back to a typed result. The client holds no mutable
/// state and is cheap to clone; concurrent callers only share the
/// transport's connection pool.
#[derive(Clone)]
pub struct Base {
    service: Arc<dyn Service>,
}

impl Base {
    /// Connect to a collection over the standard HTTPS transport.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let service = HttpService::new(config)?;
        Ok(Self::with_service(Arc::new(service)))
    }

    /// Build a client on top of a caller-provided transport.
    pub fn with_service(service: Arc<dyn Service>) -> Self {
        Self { service }
    }

    /// Get an item by key.
    pub async fn get(&self, key: &str) -> Result<Value> {
        require_key(key)?;
        let path = item_path(key);
        let (status, body) = self.service.request(&path, HttpMethod::Get, None).await?;
        match status.code() {
            200 => Ok(body.unwrap_or(Value::Null)),
            404 => Err(BaseError::NotFound {
                key: key.to_string(),
            }),
            code => Err(BaseError::RequestFailure { status: code, body }),
        }
    }

    /// Delete an item by key.
    pub async fn delete(&self, key: &str) -> Result<()> {
        require_key(key)?;
        let path = item_path(key);
        let (status, body) = self
            .service
            .request(&path, HttpMethod::Delete, None)
            .await?;
        if status.is_success() {
            Ok(())
        } else {
            Err(BaseError::RequestFailure {
                status: status.code(),
                body,
            })
        }
    }

    /// Insert a new item; fails with [`BaseError::AlreadyExists`] if the
    /// key is taken. Without a client-supplied key the server generates
    /// one; this client never invents keys itself.
    pub async fn insert(&self, data: Value, key: Option<&str>, expires: Expires) -> Result<Value> {
        let mut item = shape_item(data, key);
        let named_key = item
            .get("key")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        insert_ttl(&mut item, TTL_ATTRIBUTE, &expires);

        let (status, body) = self
            .service
            .request("/items", HttpMethod::Post, Some(json!({ "item": item })))
            .await?;
        match status.code() {
            201 => Ok(body.unwrap_or(Value::Null)),
            409 => Err(BaseError::AlreadyExists { key: named_key }),
            code => Err(BaseError::RequestFailure { status: code, body }),
        }
    }

    /// Store an item, overwriting it if the key already exists.
    ///
    /// Returns the processed item from the server's multi-status
    /// response, or `None` when the server reports that the item was
    /// skipped rather than stored.
    pub async fn put(
        &self,
        data: Value,
        key: Option<&str>,
        expires: Expires,
    ) -> Result<Option<Value>> {
        let mut item = shape_item(data, key);
        insert_ttl(&mut item, TTL_ATTRIBUTE, &expires);

        let (status, body) = self
            .service
            .request("/items", HttpMethod::Put, Some(json!({ "items": [item] })))
            .await?;
        if status.code() == 207 {
            Ok(body
                .as_ref()
                .and_then(|b| b.pointer("/processed/items/0"))
                .cloned())
        } else {
            debug!("put skipped with status {}", status);
            Ok(None)
        }
    }

    /// Store up to [`MAX_BATCH_SIZE`] items in one request.
    ///
    /// The server's structured per-item batch result is returned
    /// verbatim; partial failures are not reduced to a single status.
    pub async fn put_many(&self, items: Vec<Value>, expires: Expires) -> Result<Value> {
        if items.len() > MAX_BATCH_SIZE {
            return Err(BaseError::InvalidArgument(format!(
                "cannot put more than {} items at a time",
                MAX_BATCH_SIZE
            )));
        }

        let shaped: Vec<Value> = items
            .into_iter()
            .map(|data| {
                let mut item = shape_item(data, None);
                insert_ttl(&mut item, TTL_ATTRIBUTE, &expires);
                Value::Object(item)
            })
            .collect();
        debug!("put_many: {} items", shaped.len());

        let (status, body) = self
            .service
            .request("/items", HttpMethod::Put, Some(json!({ "items": shaped })))
            .await?;
        if status.is_success() {
            Ok(body.unwrap_or(Value::Null))
        } else {
            Err(BaseError::RequestFailure {
                status: status.code(),
                body,
            })
        }
    }

    /// Apply attribute mutations to an existing item.
    pub async fn update(&self, updates: Updates, key: &str, expires: Expires) -> Result<()> {
        require_key(key)?;
        let payload = UpdatePayload::encode(&updates, TTL_ATTRIBUTE, &expires);
        let path = item_path(key);

        let (status, body) = self
            .service
            .request(&path, HttpMethod::Patch, Some(Value::from(payload)))
            .await?;
        match status.code() {
            404 => Err(BaseError::NotFound {
                key: key.to_string(),
            }),
            code if (200..300).contains(&code) => Ok(()),
            code => Err(BaseError::RequestFailure { status: code, body }),
        }
    }

    /// Fetch one page of items matching `params`. The caller threads the
    /// returned cursor through repeated calls to paginate.
    pub async fn fetch(&self, params: FetchParams) -> Result<FetchResponse> {
        let payload = params.to_payload();
        let (status, body) = self
            .service
            .request("/query", HttpMethod::Post, Some(payload))
            .await?;
        if status.is_success() {
            Ok(FetchResponse::from_body(body.as_ref()))
        } else {
            Err(BaseError::RequestFailure {
                status: status.code(),
                body,
            })
        }
    }
}

fn item_path(key: &str) -> String {
    format!("/items/{}", urlencoding::encode(key))
}

fn require_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(BaseError::InvalidArgument(
            "parameter 'key' must be a non-empty string".to_string(),
        ));
    }
    Ok(())
}

/// Wrap non-object data as `{"value": data}`; a provided key overwrites
/// any `key` attribute already present.
fn shape_item(data: Value, key: Option<&str>) -> Map<String, Value> {
    let mut item = match data {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            map
        }
    };
    if let Some(key) = key {
        item.insert("key".to_string(), Value::from(key));
    }
    item
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_item_wraps_scalars() {
        let item = shape_item(json!(42), None);
        assert_eq!(Value::Object(item), json!({"value": 42}));

        let item = shape_item(json!(["a", "b"]), None);
        assert_eq!(Value::Object(item), json!({"value": ["a", "b"]}));
    }

    #[test]
    fn test_shape_item_keeps_objects() {
        let item = shape_item(json!({"title": "dune"}), None);
        assert_eq!(Value::Object(item), json!({"title": "dune"}));
    }

    #[test]
    fn test_shape_item_key_overwrites() {
        let item = shape_item(json!({"key": "old", "title": "dune"}), Some("new"));
        assert_eq!(item["key"], json!("new"));
    }

    #[test]
    fn test_item_path_url_encodes() {
        assert_eq!(item_path("a/b c"), "/items/a%2Fb%20c");
        assert_eq!(item_path("plain"), "/items/plain");
    }

    #[test]
    fn test_require_key_rejects_empty() {
        assert!(matches!(
            require_key(""),
            Err(BaseError::InvalidArgument(_))
        ));
        assert!(require_key("k").is_ok());
    }
}
