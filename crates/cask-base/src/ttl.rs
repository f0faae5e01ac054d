//! TTL normalization
//!
//! Expirations arrive either relative (`expire_in`, seconds from now) or
//! absolute (`expire_at`, epoch seconds or a wall-clock time) and are
//! normalized into a single integer epoch-seconds attribute on the item.

use crate::error::{BaseError, Result};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Reserved attribute holding the expiry timestamp in epoch seconds.
pub const TTL_ATTRIBUTE: &str = "__expires";

/// Absolute expiry input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExpireAt {
    /// Epoch seconds; any fractional part is truncated toward zero
    Epoch(f64),
    /// Wall-clock time; sub-second precision is discarded before the
    /// conversion to epoch seconds, so the result never rounds up
    DateTime(DateTime<Utc>),
}

/// Requested item expiration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Expires {
    /// No expiration
    #[default]
    Never,
    /// Seconds from now
    In(u64),
    /// Absolute point in time
    At(ExpireAt),
}

impl Expires {
    /// Build from the optional `expire_in` / `expire_at` pair of the wire
    /// API. The two are mutually exclusive; supplying both fails before
    /// any request is issued. A zero `expire_in` counts as absent.
    pub fn from_parts(expire_in: Option<u64>, expire_at: Option<ExpireAt>) -> Result<Self> {
        match (expire_in.filter(|secs| *secs > 0), expire_at) {
            (Some(_), Some(_)) => Err(BaseError::InvalidArgument(
                "'expire_in' and 'expire_at' are mutually exclusive parameters".to_string(),
            )),
            (Some(secs), None) => Ok(Self::In(secs)),
            (None, Some(at)) => Ok(Self::At(at)),
            (None, None) => Ok(Self::Never),
        }
    }

    /// Canonical epoch-seconds value, or `None` when no expiration was
    /// requested.
    fn epoch_seconds(&self) -> Option<i64> {
        match self {
            Self::Never => None,
            // timestamp() already drops the sub-second part of "now"
            Self::In(secs) => Some(Utc::now().timestamp() + *secs as i64),
            Self::At(ExpireAt::Epoch(ts)) => Some(ts.trunc() as i64),
            Self::At(ExpireAt::DateTime(dt)) => Some(dt.timestamp()),
        }
    }
}

/// Write the canonical expiry attribute into `target`, overwriting any
/// existing value there. No-op when no expiration was requested.
pub fn insert_ttl(target: &mut Map<String, Value>, ttl_attribute: &str, expires: &Expires) {
    if let Some(seconds) = expires.epoch_seconds() {
        target.insert(ttl_attribute.to_string(), Value::from(seconds));
    }
}
