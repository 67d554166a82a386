//! Core traits for lifeboard abstractions.
//!
//! The store trait is the seam between the gateway and the hosted store,
//! enabling a mock implementation in tests. Fallback substitution happens
//! above this trait — implementations propagate errors, the gateway eats them.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Book, Course, FinancialAccount, Project};

/// Read-only access to the hosted record store.
///
/// Every method issues one read-all query for its kind, sorted descending on
/// the kind's sort column. No filtering, pagination, or parameters — the
/// callers take everything and render it.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch all financial accounts, newest `last_updated` first.
    async fn fetch_financial_accounts(&self) -> Result<Vec<FinancialAccount>>;

    /// Fetch all books, newest `date_added` first.
    async fn fetch_books(&self) -> Result<Vec<Book>>;

    /// Fetch all courses, newest `start_date` first.
    async fn fetch_courses(&self) -> Result<Vec<Course>>;

    /// Fetch all projects, newest `start_date` first.
    async fn fetch_projects(&self) -> Result<Vec<Project>>;

    /// Probe the store with a minimal read. Ok means reachable and authorized.
    async fn health_check(&self) -> Result<()>;
}
