//! Typed host-domain contracts shared by the studio runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services the studio depends on. Concrete
//! browser adapters live in `platform_host_web`; the runtime only ever sees the traits exported
//! here, which keeps persistence testable without a DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;

pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore,
};
