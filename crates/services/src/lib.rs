//! # services
//!
//! The application core of Clipshelf: the `CollectionStore` repository
//! (the single sanctioned writer over the key-value port), the
//! `ChangeNotifier` pub/sub bus, and the pure derived views that join
//! collections without mutating them.

pub mod notifier;
pub mod repository;
pub mod views;

pub use notifier::{ChangeNotifier, Subscription};
pub use repository::CollectionStore;
