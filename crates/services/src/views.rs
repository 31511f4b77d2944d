//! # Derived Views
//!
//! Pure, stateless projections over `list()` results. These functions
//! never write through the repository; they keep the single-writer
//! invariant intact by construction.

use chrono::{DateTime, Utc};
use domains::{BlockType, Community, PlatformBlock, Report};
use serde::Serialize;

/// Communities the current user is subscribed to, sorted by name
/// ascending. A dangling subscription (the community was deleted but the
/// name is still in the subscription list) silently drops out of the join.
pub fn subscribed_communities(
    communities: &[Community],
    subscription_names: &[String],
) -> Vec<Community> {
    let mut subscribed: Vec<Community> = communities
        .iter()
        .filter(|community| subscription_names.iter().any(|name| *name == community.name))
        .cloned()
        .collect();
    subscribed.sort_by(|a, b| a.name.cmp(&b.name));
    subscribed
}

/// Reports filed against videos published under the given community.
pub fn reports_for_community(reports: &[Report], community_name: &str) -> Vec<Report> {
    reports
        .iter()
        .filter(|report| report.video.community_name == community_name)
        .cloned()
        .collect()
}

/// Channel statistics the monetization page feeds into the progress bars.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelStats {
    pub subscribers: u64,
    pub watch_hours: u64,
    pub uploads: u64,
}

/// Per-metric targets a channel must reach to monetize.
#[derive(Debug, Clone, Copy)]
pub struct MonetizationThresholds {
    pub subscribers: u64,
    pub watch_hours: u64,
    pub uploads: u64,
}

impl Default for MonetizationThresholds {
    fn default() -> Self {
        Self {
            subscribers: 500,
            watch_hours: 3000,
            uploads: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricProgress {
    pub metric: &'static str,
    pub value: u64,
    pub target: u64,
    pub met: bool,
    /// Progress toward the target, capped at 100.
    pub percent: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonetizationReport {
    pub eligible: bool,
    pub metrics: Vec<MetricProgress>,
}

/// Pure arithmetic behind the monetization progress bars. A metric counts
/// as met when `value >= target` (inclusive); the channel is eligible when
/// every metric is met.
pub fn monetization_progress(
    stats: &ChannelStats,
    thresholds: &MonetizationThresholds,
) -> MonetizationReport {
    let metrics = vec![
        metric("subscribers", stats.subscribers, thresholds.subscribers),
        metric("watchHours", stats.watch_hours, thresholds.watch_hours),
        metric("uploads", stats.uploads, thresholds.uploads),
    ];
    MonetizationReport {
        eligible: metrics.iter().all(|m| m.met),
        metrics,
    }
}

fn metric(name: &'static str, value: u64, target: u64) -> MetricProgress {
    let percent = if target == 0 {
        100
    } else {
        ((value.saturating_mul(100)) / target).min(100) as u8
    };
    MetricProgress {
        metric: name,
        value,
        target,
        met: value >= target,
        percent,
    }
}

/// Whether a platform block is in force at `now`. Permanent blocks always
/// are; a temporary block without an expiry counts as active because the
/// stored expiry is advisory data the admin may never have set.
pub fn block_active(block: &PlatformBlock, now: DateTime<Utc>) -> bool {
    match block.block_type {
        BlockType::Permanent => true,
        BlockType::Temporary => block.expires_at.map_or(true, |expires| expires > now),
    }
}

/// The explicit expiry-check pass: platform blocks still in force at
/// `now`. The repository never auto-unblocks; pages opt into this view.
pub fn active_platform_blocks(blocks: &[PlatformBlock], now: DateTime<Utc>) -> Vec<PlatformBlock> {
    blocks
        .iter()
        .filter(|block| block_active(block, now))
        .cloned()
        .collect()
}
