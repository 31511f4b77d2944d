//! # storage-adapters
//!
//! `KeyValueStore` implementations for Clipshelf: an in-memory store for
//! tests and demos, and a single-file JSON store that plays the role of
//! per-origin browser storage.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
