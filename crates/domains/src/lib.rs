//! clipshelf/crates/domains/src/lib.rs
//!
//! The central domain models and interface definitions for Clipshelf.

pub mod collections;
pub mod error;
pub mod models;
pub mod ports;

// Re-exporting for easier access in other crates
pub use collections::*;
pub use error::*;
pub use models::*;
pub use ports::*;

#[cfg(test)]
mod tests {
    use super::models::*;

    #[test]
    fn test_video_creation() {
        let video = Video::new("Rust in 100 Seconds", "fireship", "Code Den");
        assert!(!video.id.is_empty());
        assert_eq!(video.views, 0);
        assert!(!video.is_short);
    }

    #[test]
    fn test_report_status_wire_values() {
        let json = serde_json::to_string(&ReportStatus::InReview).unwrap();
        assert_eq!(json, "\"In Review\"");
        let json = serde_json::to_string(&ReportStatus::ActionTaken).unwrap();
        assert_eq!(json, "\"Action Taken\"");
    }

    #[test]
    fn test_community_avatar_derived_from_name() {
        let community = Community::new("Gaming Den", "owner@clipshelf.dev");
        assert!(community.avatar_url.contains("Gaming%20Den"));
    }

    #[test]
    fn test_avatar_name_is_percent_encoded() {
        // Names are arbitrary user input; everything outside the URL-safe
        // set must be escaped in the generated avatar URL.
        let community = Community::new("Café & Friends!", "owner@clipshelf.dev");
        assert!(community
            .avatar_url
            .ends_with("name=Caf%C3%A9%20%26%20Friends%21"));

        let community = Community::new("日本語", "owner@clipshelf.dev");
        assert!(community.avatar_url.ends_with("name=%E6%97%A5%E6%9C%AC%E8%AA%9E"));
    }
}
