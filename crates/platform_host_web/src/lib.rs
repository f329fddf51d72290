//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Off `wasm32` every adapter degrades to an empty, always-successful store so the runtime can be
//! exercised by native tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod storage;

pub use adapters::prefs_store;
pub use storage::local_prefs::WebPrefsStore;
