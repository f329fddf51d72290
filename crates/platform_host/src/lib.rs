//! Host-neutral service contracts shared by the desktop runtime and its browser adapters.
//!
//! The runtime only talks to durable storage through the traits in this crate. Concrete
//! browser-backed implementations live in `platform_host_web`; in-memory implementations here
//! back native unit tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;

pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore,
    PrefsStoreFuture,
};
