//! # Core Traits (Ports)
//!
//! Any storage adapter must implement these traits to be used by the
//! services layer.

use crate::error::Result;
use crate::models::{Admin, AdminRole, Community, PlatformBlock, Playlist, Report, Video};
use serde_json::Value;

/// Durable key-value persistence contract. Values are JSON documents; the
/// adapter owns serialization and hides the underlying medium.
///
/// `get` treats corrupt stored text as absent rather than failing: a local
/// cache with no upstream is better reset than wedged.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&self, key: &str, value: &Value) -> Result<()>;
    /// Removing a missing key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Identity and invariant hooks for records stored in array collections.
pub trait Record {
    fn id(&self) -> &str;

    /// A uniqueness-enforced field distinct from the generated id
    /// (community name, admin email), as `(field, value)`.
    fn natural_key(&self) -> Option<(&'static str, &str)> {
        None
    }

    /// Protected records cannot be removed, and an upsert may not replace
    /// a protected record with an unprotected one.
    fn is_protected(&self) -> bool {
        false
    }
}

impl Record for Video {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Playlist {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Community {
    fn id(&self) -> &str {
        &self.id
    }

    fn natural_key(&self) -> Option<(&'static str, &str)> {
        Some(("name", &self.name))
    }
}

impl Record for Report {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Admin {
    fn id(&self) -> &str {
        &self.id
    }

    fn natural_key(&self) -> Option<(&'static str, &str)> {
        Some(("email", &self.email))
    }

    fn is_protected(&self) -> bool {
        self.role == AdminRole::LeadAdmin
    }
}

impl Record for PlatformBlock {
    // Blocks carry no generated id; the email is both identity and
    // natural key.
    fn id(&self) -> &str {
        &self.email
    }

    fn natural_key(&self) -> Option<(&'static str, &str)> {
        Some(("email", &self.email))
    }
}
