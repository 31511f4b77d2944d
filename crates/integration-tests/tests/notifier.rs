//! Change-event behavior against a live repository: fan-out counts,
//! write-before-publish ordering, and unsubscribe semantics.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use domains::{Collection, Video};
use services::CollectionStore;
use storage_adapters::MemoryStore;

fn fresh_store() -> CollectionStore {
    CollectionStore::new(Arc::new(MemoryStore::new()))
}

#[test]
fn single_upsert_reaches_each_subscriber_exactly_once() {
    let store = fresh_store();
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let _a = {
        let hits = Arc::clone(&first);
        store.subscribe(Collection::Liked, move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };
    let _b = {
        let hits = Arc::clone(&second);
        store.subscribe(Collection::Liked, move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };

    store
        .upsert(Collection::Liked, Video::new("One write", "lena", "Gaming Den"))
        .unwrap();

    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn handler_observes_the_post_write_state() {
    let store = fresh_store();
    let video = Video::new("Visible to handlers", "lena", "Gaming Den");
    let expected_id = video.id.clone();

    let seen = Arc::new(AtomicUsize::new(0));
    let _sub = {
        let reader = store.clone();
        let seen = Arc::clone(&seen);
        let expected_id = expected_id.clone();
        store.subscribe(Collection::WatchLater, move |collection| {
            // Re-read inside the handler: the write must already be
            // visible because upsert writes before it publishes.
            let videos: Vec<Video> = reader.list(collection).unwrap();
            if videos.iter().any(|v| v.id == expected_id) {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        })
    };

    store.upsert(Collection::WatchLater, video).unwrap();
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[test]
fn two_writes_in_a_row_fan_out_twice() {
    let store = fresh_store();
    let hits = Arc::new(AtomicUsize::new(0));
    let _sub = {
        let hits = Arc::clone(&hits);
        store.subscribe(Collection::History, move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };

    store
        .upsert(Collection::History, Video::new("First", "lena", "Gaming Den"))
        .unwrap();
    store
        .upsert(Collection::History, Video::new("Second", "lena", "Gaming Den"))
        .unwrap();

    // No coalescing: every write is its own event.
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn unsubscribed_handler_is_never_invoked_again() {
    let store = fresh_store();
    let hits = Arc::new(AtomicUsize::new(0));
    let sub = {
        let hits = Arc::clone(&hits);
        store.subscribe(Collection::Playlists, move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };

    store
        .upsert(Collection::Playlists, domains::Playlist::new("Before"))
        .unwrap();
    sub.unsubscribe();
    sub.unsubscribe(); // idempotent
    store
        .upsert(Collection::Playlists, domains::Playlist::new("After"))
        .unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn events_are_scoped_to_the_written_collection() {
    let store = fresh_store();
    let hits = Arc::new(AtomicUsize::new(0));
    let _sub = {
        let hits = Arc::clone(&hits);
        store.subscribe(Collection::Reports, move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };

    store
        .upsert(Collection::Liked, Video::new("Elsewhere", "lena", "Gaming Den"))
        .unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
