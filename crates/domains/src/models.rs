//! # Domain Models
//!
//! These structs represent the core entities of Clipshelf. They serialize
//! with camelCase field names because the stored JSON doubles as the schema
//! and must stay readable by the demo UI.
//!
//! Playlists and reports embed full `Video` copies rather than references;
//! cascade removal walks those embedded copies by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single uploaded video. The same value may appear in several
/// collections (uploaded, history, liked, watch-later) and inside
/// playlists and reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub uploader_name: String,
    /// Name of the community the video was published under.
    pub community_name: String,
    pub is_short: bool,
    pub views: u64,
    pub upload_date: DateTime<Utc>,
}

impl Video {
    pub fn new(title: &str, uploader_name: &str, community_name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            thumbnail_url: String::new(),
            uploader_name: uploader_name.to_string(),
            community_name: community_name.to_string(),
            is_short: false,
            views: 0,
            upload_date: Utc::now(),
        }
    }
}

/// An ordered, named sequence of embedded video copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub videos: Vec<Video>,
}

impl Playlist {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            videos: Vec::new(),
        }
    }
}

/// A creator community. The name is the natural key: it doubles as the
/// subscription key and feeds the generated avatar URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: String,
    pub name: String,
    pub owner_email: String,
    pub member_count: u64,
    pub country: Option<String>,
    pub state: Option<String>,
    pub avatar_url: String,
}

impl Community {
    pub fn new(name: &str, owner_email: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            owner_email: owner_email.to_string(),
            member_count: 0,
            country: None,
            state: None,
            avatar_url: format!(
                "https://ui-avatars.com/api/?name={}",
                urlencoding::encode(name)
            ),
        }
    }
}

/// Moderation status of a report. Wire values match the strings the UI
/// renders verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    #[serde(rename = "In Review")]
    InReview,
    #[serde(rename = "Action Taken")]
    ActionTaken,
    #[serde(rename = "Dismissed")]
    Dismissed,
}

/// A user-filed report against a video. Embeds a copy of the video as it
/// looked when the report was filed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub video: Video,
    pub reporter_email: String,
    pub reason: String,
    pub report_date: DateTime<Utc>,
    pub status: ReportStatus,
}

impl Report {
    pub fn new(video: Video, reporter_email: &str, reason: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            video,
            reporter_email: reporter_email.to_string(),
            reason: reason.to_string(),
            report_date: Utc::now(),
            status: ReportStatus::InReview,
        }
    }
}

/// Platform staff roles. The lead admin is a protected singleton: it can
/// neither be removed nor demoted through the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminRole {
    #[serde(rename = "Lead Admin")]
    LeadAdmin,
    #[serde(rename = "Moderator")]
    Moderator,
    #[serde(rename = "Support")]
    Support,
}

/// A platform administrator. Email is the natural key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: AdminRole,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
}

impl Admin {
    pub fn new(name: &str, email: &str, role: AdminRole) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            country: None,
            state: None,
            city: None,
        }
    }
}

/// Per-user profile details, stored as a map keyed by email with plain
/// upsert semantics (one record per email, no history).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetails {
    pub mobile_number: Option<String>,
    pub mobile_verified: bool,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub native_languages: Vec<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockType {
    #[serde(rename = "temporary")]
    Temporary,
    #[serde(rename = "permanent")]
    Permanent,
}

/// An admin-issued platform-wide block. `expires_at` is advisory data: the
/// repository never auto-unblocks, the expiry check is a derived view the
/// page layer invokes explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformBlock {
    pub email: String,
    pub block_type: BlockType,
    pub expires_at: Option<DateTime<Utc>>,
}
