//! # Collection Catalog
//!
//! Every persisted collection is a whole-value JSON document under one
//! stable storage key. The keys double as the on-disk schema and must not
//! change within a release.

use std::fmt;

/// The closed set of persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    UploadedVideos,
    History,
    Liked,
    WatchLater,
    Playlists,
    Communities,
    Subscriptions,
    Reports,
    Admins,
    ProfileDetails,
    BlockedChannels,
    PlatformBlocks,
}

impl Collection {
    /// Every collection, in storage-key order. Handy for exhaustive tests
    /// and store inspection tooling.
    pub const ALL: [Collection; 12] = [
        Collection::UploadedVideos,
        Collection::History,
        Collection::Liked,
        Collection::WatchLater,
        Collection::Playlists,
        Collection::Communities,
        Collection::Subscriptions,
        Collection::Reports,
        Collection::Admins,
        Collection::ProfileDetails,
        Collection::BlockedChannels,
        Collection::PlatformBlocks,
    ];

    /// The stable storage key this collection is persisted under.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::UploadedVideos => "clipshelf.uploaded-videos",
            Collection::History => "clipshelf.history",
            Collection::Liked => "clipshelf.liked",
            Collection::WatchLater => "clipshelf.watch-later",
            Collection::Playlists => "clipshelf.playlists",
            Collection::Communities => "clipshelf.communities",
            Collection::Subscriptions => "clipshelf.subscriptions",
            Collection::Reports => "clipshelf.reports",
            Collection::Admins => "clipshelf.admins",
            Collection::ProfileDetails => "clipshelf.profile-details",
            Collection::BlockedChannels => "clipshelf.blocked-channels",
            Collection::PlatformBlocks => "clipshelf.platform-blocks",
        }
    }

    /// The four flat video lists the cascade walks (playlists and reports
    /// are handled separately because they embed copies).
    pub const VIDEO_LISTS: [Collection; 4] = [
        Collection::UploadedVideos,
        Collection::History,
        Collection::Liked,
        Collection::WatchLater,
    ];
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
