//! # CollectionStore
//!
//! The single sanctioned writer over the key-value port. Every collection
//! is read and written as one whole JSON value, so readers never observe a
//! partially written collection; every successful write is followed by a
//! change event on the owning collection.
//!
//! Invariants enforced here, in one place:
//! - natural-key uniqueness (community name, admin email) on upsert
//! - protected records (the lead admin) cannot be removed or demoted
//! - removing a video cascades through every collection embedding a copy

use std::collections::BTreeMap;
use std::sync::Arc;

use domains::{
    Collection, KeyValueStore, Playlist, ProfileDetails, Record, Report, ReportStatus, Result,
    StoreError, Video,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::notifier::{ChangeNotifier, Subscription};

#[derive(Clone)]
pub struct CollectionStore {
    kv: Arc<dyn KeyValueStore>,
    notifier: ChangeNotifier,
}

impl CollectionStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            notifier: ChangeNotifier::new(),
        }
    }

    /// The shared notifier, for components that want to publish or listen
    /// outside the repository's own write path.
    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    /// Registers a change handler for `collection`.
    pub fn subscribe<F>(&self, collection: Collection, handler: F) -> Subscription
    where
        F: Fn(Collection) + Send + Sync + 'static,
    {
        self.notifier.subscribe(collection, handler)
    }

    /// Loads a collection. A key that was never written reads as `[]`, and
    /// so does a corrupt or mistyped payload: a local store with no
    /// upstream is better reset than wedged.
    pub fn list<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        let Some(value) = self.kv.get(collection.key())? else {
            return Ok(Vec::new());
        };
        match serde_json::from_value(value) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!(collection = %collection, error = %e,
                    "stored payload did not parse, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Replaces the element with a matching id, or appends if none
    /// matches, then writes the whole collection back and publishes.
    ///
    /// Rejects with `DuplicateKey` when a different id already holds the
    /// record's natural key, and with `Validation` when the upsert would
    /// replace a protected record with an unprotected one.
    pub fn upsert<T>(&self, collection: Collection, item: T) -> Result<()>
    where
        T: Record + Serialize + DeserializeOwned,
    {
        let mut items: Vec<T> = self.list(collection)?;

        if let Some((field, value)) = item.natural_key() {
            let taken = items.iter().any(|existing| {
                existing.id() != item.id()
                    && existing
                        .natural_key()
                        .is_some_and(|(_, existing_value)| existing_value == value)
            });
            if taken {
                return Err(StoreError::DuplicateKey {
                    field,
                    value: value.to_string(),
                });
            }
        }

        match items.iter().position(|existing| existing.id() == item.id()) {
            Some(index) => {
                if items[index].is_protected() && !item.is_protected() {
                    return Err(StoreError::Validation(format!(
                        "record {} is protected and cannot be demoted",
                        item.id()
                    )));
                }
                items[index] = item;
            }
            None => items.push(item),
        }

        self.write(collection, &items)
    }

    /// Removes the element with the given id. A missing id is a no-op (no
    /// write, no event). Removing a protected record is rejected.
    pub fn remove<T>(&self, collection: Collection, id: &str) -> Result<()>
    where
        T: Record + Serialize + DeserializeOwned,
    {
        let mut items: Vec<T> = self.list(collection)?;
        let Some(index) = items.iter().position(|existing| existing.id() == id) else {
            return Ok(());
        };
        if items[index].is_protected() {
            return Err(StoreError::Validation(format!(
                "record {id} is protected and cannot be removed"
            )));
        }
        items.remove(index);
        self.write(collection, &items)
    }

    /// Removes a video and every embedded copy of it: the four flat video
    /// lists, each playlist's embedded list, and any report embedding the
    /// video is transitioned to `Action Taken` (reports are never deleted).
    ///
    /// Best-effort, not transactional: if a later step fails, the earlier
    /// removals still stand.
    pub fn purge_video(&self, video_id: &str) -> Result<()> {
        tracing::debug!(video_id, "cascading video removal");

        for collection in Collection::VIDEO_LISTS {
            self.remove::<Video>(collection, video_id)?;
        }

        let mut playlists: Vec<Playlist> = self.list(Collection::Playlists)?;
        let mut touched = false;
        for playlist in &mut playlists {
            let before = playlist.videos.len();
            playlist.videos.retain(|video| video.id != video_id);
            touched |= playlist.videos.len() != before;
        }
        if touched {
            self.write(Collection::Playlists, &playlists)?;
        }

        let mut reports: Vec<Report> = self.list(Collection::Reports)?;
        let mut touched = false;
        for report in &mut reports {
            if report.video.id == video_id && report.status != ReportStatus::ActionTaken {
                report.status = ReportStatus::ActionTaken;
                touched = true;
            }
        }
        if touched {
            self.write(Collection::Reports, &reports)?;
        }

        Ok(())
    }

    /// Loads a plain value collection (subscriptions, blocked channels).
    pub fn values(&self, collection: Collection) -> Result<Vec<String>> {
        self.list(collection)
    }

    /// Adds a value with set semantics: a value already present is a
    /// no-op (no write, no event).
    pub fn add_value(&self, collection: Collection, value: &str) -> Result<()> {
        let mut values = self.values(collection)?;
        if values.iter().any(|existing| existing == value) {
            return Ok(());
        }
        values.push(value.to_string());
        self.write(collection, &values)
    }

    /// Removes a value; absent values are a no-op.
    pub fn remove_value(&self, collection: Collection, value: &str) -> Result<()> {
        let values = self.values(collection)?;
        let remaining: Vec<String> = values
            .iter()
            .filter(|existing| existing.as_str() != value)
            .cloned()
            .collect();
        if remaining.len() == values.len() {
            return Ok(());
        }
        self.write(collection, &remaining)
    }

    /// Looks up the profile details stored for `email`.
    pub fn profile(&self, email: &str) -> Result<Option<ProfileDetails>> {
        Ok(self.profile_map()?.remove(email))
    }

    /// Upserts the profile details for `email` (one record per email, no
    /// history) and publishes on the profile collection.
    pub fn put_profile(&self, email: &str, details: ProfileDetails) -> Result<()> {
        let mut profiles = self.profile_map()?;
        profiles.insert(email.to_string(), details);
        let value = serde_json::to_value(&profiles)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.kv.set(Collection::ProfileDetails.key(), &value)?;
        self.notifier.publish(Collection::ProfileDetails);
        Ok(())
    }

    fn profile_map(&self) -> Result<BTreeMap<String, ProfileDetails>> {
        let Some(value) = self.kv.get(Collection::ProfileDetails.key())? else {
            return Ok(BTreeMap::new());
        };
        match serde_json::from_value(value) {
            Ok(map) => Ok(map),
            Err(e) => {
                tracing::warn!(collection = %Collection::ProfileDetails, error = %e,
                    "stored payload did not parse, treating as empty");
                Ok(BTreeMap::new())
            }
        }
    }

    /// Serializes, writes the whole collection under its key, then
    /// publishes. Write-before-publish is what guarantees a handler that
    /// re-reads always observes the post-write state.
    fn write<T: Serialize>(&self, collection: Collection, items: &[T]) -> Result<()> {
        let value =
            serde_json::to_value(items).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.kv.set(collection.key(), &value)?;
        self.notifier.publish(collection);
        Ok(())
    }
}
