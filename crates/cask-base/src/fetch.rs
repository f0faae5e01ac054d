//! Query payloads and paged fetch responses
//!
//! One `fetch` call issues exactly one `POST /query`; pagination is the
//! caller's loop, feeding the returned cursor back in until it is absent.

use serde_json::{Map, Value};

/// Default page size for fetch calls.
pub const DEFAULT_FETCH_LIMIT: usize = 1000;

/// Parameters for one paged fetch call.
#[derive(Debug, Clone)]
pub struct FetchParams {
    /// Single filter object or array of filter objects (OR semantics
    /// between array entries, applied server-side)
    pub query: Option<Value>,
    /// Maximum number of items for this page
    pub limit: usize,
    /// Continuation cursor from the previous page
    pub last: Option<Value>,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            query: None,
            limit: DEFAULT_FETCH_LIMIT,
            last: None,
        }
    }
}

impl FetchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter.
    pub fn query(mut self, query: Value) -> Self {
        self.query = Some(query);
        self
    }

    /// Set the page size.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the continuation cursor.
    pub fn last(mut self, last: impl Into<Value>) -> Self {
        self.last = Some(last.into());
        self
    }

    /// Wire payload for `POST /query`. The `query` field is omitted when
    /// no filter was given.
    pub(crate) fn to_payload(&self) -> Value {
        // booleans are not valid cursors; treat them as absent
        let last = match &self.last {
            Some(Value::Bool(_)) | None => Value::Null,
            Some(cursor) => cursor.clone(),
        };

        let mut payload = Map::new();
        payload.insert("limit".to_string(), Value::from(self.limit as u64));
        payload.insert("last".to_string(), last);

        if let Some(query) = &self.query {
            if let Some(filters) = normalize_query(query) {
                payload.insert("query".to_string(), Value::Array(filters));
            }
        }
        Value::Object(payload)
    }
}

/// A bare filter object becomes a one-element list; empty filters are
/// dropped entirely.
fn normalize_query(query: &Value) -> Option<Vec<Value>> {
    match query {
        Value::Null => None,
        Value::Array(filters) => (!filters.is_empty()).then(|| filters.clone()),
        Value::Object(filter) => (!filter.is_empty()).then(|| vec![Value::Object(filter.clone())]),
        other => Some(vec![other.clone()]),
    }
}

/// One page of fetch results. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchResponse {
    /// Number of items on this page as reported by the server
    pub count: usize,
    /// Continuation cursor; absent on the final page
    pub last: Option<String>,
    /// The items themselves
    pub items: Vec<Value>,
}

impl FetchResponse {
    /// Decode `paging.size`, `paging.last` and `items` from a response
    /// body, defaulting each when absent.
    pub(crate) fn from_body(body: Option<&Value>) -> Self {
        let body = match body {
            Some(body) => body,
            None => return Self::default(),
        };
        let paging = &body["paging"];
        Self {
            count: paging["size"].as_u64().unwrap_or(0) as usize,
            last: paging["last"].as_str().map(str::to_string),
            items: body["items"].as_array().cloned().unwrap_or_default(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl IntoIterator for FetchResponse {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a FetchResponse {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
