//! Update operation encoding
//!
//! Each attribute mutation is classified into one of five wire-level
//! buckets: `set`, `increment`, `append`, `prepend` and `delete`.

use crate::ttl::{insert_ttl, Expires};
use serde_json::{Map, Number, Value};

/// One requested attribute mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOp {
    /// Replace the attribute with a value
    Set(Value),
    /// Delete the attribute
    Trim,
    /// Add a numeric delta to the attribute
    Increment(Number),
    /// Append values to an array attribute
    Append(Vec<Value>),
    /// Prepend values to an array attribute
    Prepend(Vec<Value>),
}

impl UpdateOp {
    /// Append `value`; a scalar is coerced to a one-element list.
    pub fn append(value: impl Into<Value>) -> Self {
        Self::Append(coerce_list(value.into()))
    }

    /// Prepend `value`; a scalar is coerced to a one-element list.
    pub fn prepend(value: impl Into<Value>) -> Self {
        Self::Prepend(coerce_list(value.into()))
    }
}

fn coerce_list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(values) => values,
        scalar => vec![scalar],
    }
}

/// Ordered set of attribute mutations for one update call.
///
/// Attributes are unique-keyed on the wire; pushing the same attribute
/// twice keeps the later entry in the encoded payload.
#[derive(Debug, Clone, Default)]
pub struct Updates {
    ops: Vec<(String, UpdateOp)>,
}

impl Updates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace `attr` with `value`.
    pub fn set(mut self, attr: impl Into<String>, value: impl Into<Value>) -> Self {
        self.ops.push((attr.into(), UpdateOp::Set(value.into())));
        self
    }

    /// Delete `attr` from the item.
    pub fn trim(mut self, attr: impl Into<String>) -> Self {
        self.ops.push((attr.into(), UpdateOp::Trim));
        self
    }

    /// Add `delta` to the numeric attribute `attr`.
    pub fn increment(mut self, attr: impl Into<String>, delta: impl Into<Number>) -> Self {
        self.ops
            .push((attr.into(), UpdateOp::Increment(delta.into())));
        self
    }

    /// Append `value` to the array attribute `attr`.
    pub fn append(mut self, attr: impl Into<String>, value: impl Into<Value>) -> Self {
        self.ops.push((attr.into(), UpdateOp::append(value)));
        self
    }

    /// Prepend `value` to the array attribute `attr`.
    pub fn prepend(mut self, attr: impl Into<String>, value: impl Into<Value>) -> Self {
        self.ops.push((attr.into(), UpdateOp::prepend(value)));
        self
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Wire payload for `PATCH /items/{key}`: the five operation buckets.
///
/// An empty update still encodes to all-empty buckets and is sent as-is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdatePayload {
    pub set: Map<String, Value>,
    pub increment: Map<String, Value>,
    pub append: Map<String, Value>,
    pub prepend: Map<String, Value>,
    pub delete: Vec<String>,
}

impl UpdatePayload {
    /// Classify every mutation into its bucket, then merge the expiry
    /// attribute into `set`.
    pub fn encode(updates: &Updates, ttl_attribute: &str, expires: &Expires) -> Self {
        let mut payload = Self::default();
        for (attr, op) in &updates.ops {
            match op {
                UpdateOp::Set(value) => {
                    payload.set.insert(attr.clone(), value.clone());
                }
                UpdateOp::Trim => payload.delete.push(attr.clone()),
                UpdateOp::Increment(delta) => {
                    payload
                        .increment
                        .insert(attr.clone(), Value::Number(delta.clone()));
                }
                UpdateOp::Append(values) => {
                    payload
                        .append
                        .insert(attr.clone(), Value::Array(values.clone()));
                }
                UpdateOp::Prepend(values) => {
                    payload
                        .prepend
                        .insert(attr.clone(), Value::Array(values.clone()));
                }
            }
        }
        insert_ttl(&mut payload.set, ttl_attribute, expires);
        payload
    }
}

impl From<UpdatePayload> for Value {
    fn from(payload: UpdatePayload) -> Self {
        let mut body = Map::new();
        body.insert("set".to_string(), Value::Object(payload.set));
        body.insert("increment".to_string(), Value::Object(payload.increment));
        body.insert("append".to_string(), Value::Object(payload.append));
        body.insert("prepend".to_string(), Value::Object(payload.prepend));
        body.insert(
            "delete".to_string(),
            Value::Array(payload.delete.into_iter().map(Value::String).collect()),
        );
        Value::Object(body)
    }
}
