//! Snapshot storage adapters.
//!
//! The in-memory adapter lives next to the port in `stockroom-inventory`.

pub mod file;

pub use file::FileSnapshotStore;
