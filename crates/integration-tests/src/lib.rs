//! Integration test crate for Clipshelf. All content lives under
//! `tests/`; this library target is intentionally empty.
