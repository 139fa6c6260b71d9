//! Shared data models for the CareLink backend.
//!
//! This crate provides Serde-serializable types for:
//! - Records (uniquely-identified, freeform field maps)
//! - The three managed collections and their file names

pub mod collection;
pub mod record;

pub use collection::Collection;
pub use record::Record;
