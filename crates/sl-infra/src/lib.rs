//! Adapters for the library styles plugin's host ports: client storage,
//! per-file metadata, a snapshot style catalog, selection, UI sinks and time.

pub mod catalog;
pub mod metadata;
pub mod selection;
pub mod storage;
pub mod time;
pub mod ui;
