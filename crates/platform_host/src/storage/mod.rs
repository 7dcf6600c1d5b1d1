//! Storage contracts for lightweight client-side persistence.

pub mod prefs;
