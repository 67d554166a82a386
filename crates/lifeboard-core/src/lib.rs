//! # lifeboard-core
//!
//! Core types, traits, and abstractions for the lifeboard dashboard data layer.
//!
//! This crate provides the record models, the record-kind descriptor, the
//! tagged fetch outcome, and the store trait that `lifeboard-store` implements.

pub mod error;
pub mod kind;
pub mod models;
pub mod outcome;
pub mod stats;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use kind::RecordKind;
pub use models::*;
pub use outcome::{DataSource, FetchOutcome};
pub use stats::{AccountTotals, BookCounts, CourseCounts, ProjectStats};
pub use traits::RecordStore;
