//! Tagged fetch outcome.
//!
//! The original dashboard silently substituted sample rows on a failed or
//! empty fetch, leaving callers unable to tell live data from canned data.
//! The gateway keeps the substitution (the page must always have something to
//! render) but tags every result with where the rows came from.

use serde::{Deserialize, Serialize};

/// Where a set of rows came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Rows as returned by the hosted store.
    Live,
    /// Literal sample rows substituted after a failed or empty fetch.
    Fallback,
}

/// Result of a gateway accessor: rows plus their provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchOutcome<T> {
    pub source: DataSource,
    pub rows: Vec<T>,
}

impl<T> FetchOutcome<T> {
    /// Wrap rows returned by the store.
    pub fn live(rows: Vec<T>) -> Self {
        Self {
            source: DataSource::Live,
            rows,
        }
    }

    /// Wrap substituted sample rows.
    pub fn fallback(rows: Vec<T>) -> Self {
        Self {
            source: DataSource::Fallback,
            rows,
        }
    }

    pub fn is_live(&self) -> bool {
        self.source == DataSource::Live
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
