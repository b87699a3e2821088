//! Shareable comparison links
//!
//! A share (or "magic") link stores a submitted document pair under a short
//! key so a later request, possibly from another person holding the link,
//! can re-run the comparison. Entries live in the TTL-bounded in-memory
//! store; resolving a link does not consume the entry.

pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::format::Mode;

pub use store::{ShareStore, TtlShareStore};

/// Number of identifier characters used as the cache key.
const SHORT_ID_LEN: usize = 8;

/// Payload stored behind a share link.
///
/// Wire names `a`/`b`/`f` keep the serialized blob compact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharePayload {
    /// Full 32-hex-char identifier.
    pub id: String,
    /// First 8 characters of `id`; the cache key handed out in links.
    pub short_id: String,
    #[serde(rename = "a")]
    pub original: String,
    #[serde(rename = "b")]
    pub revised: String,
    #[serde(rename = "f")]
    pub format: Mode,
    pub created_at: DateTime<Utc>,
}

impl SharePayload {
    /// Create a payload with a fresh random identifier.
    pub fn new(original: String, revised: String, format: Mode) -> Self {
        let id = Uuid::new_v4().simple().to_string();
        let short_id = id[..SHORT_ID_LEN].to_string();
        Self {
            id,
            short_id,
            original,
            revised,
            format,
            created_at: Utc::now(),
        }
    }

    /// Key under which the serialized payload is cached.
    pub fn cache_key(&self) -> &str {
        &self.short_id
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
