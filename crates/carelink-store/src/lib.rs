//! File-backed collection store.
//!
//! This crate provides:
//! - CRUD over a durable JSON array of records, one file per collection
//! - A per-store write lock serializing read-modify-write cycles
//! - Atomic whole-file persistence (temp file + rename)

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::JsonStore;
