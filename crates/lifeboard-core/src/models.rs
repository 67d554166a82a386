//! Core data models for lifeboard.
//!
//! One flat record type per record kind, mirroring the hosted store's row
//! shapes. Records carry no cross-references; identity is an opaque string
//! whose uniqueness the store is trusted to maintain. This codebase only
//! reads — nothing here is ever written back.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// FINANCIAL ACCOUNTS
// =============================================================================

/// Category of a financial account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Checking,
    Savings,
    Investment,
    Crypto,
}

/// A tracked financial account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialAccount {
    pub id: String,
    pub name: String,
    /// Wire name is `type` (reserved word in Rust).
    #[serde(rename = "type")]
    pub kind: AccountKind,
    /// May be zero or negative. No currency field exists in the store.
    pub balance: f64,
    pub last_updated: DateTime<Utc>,
}

// =============================================================================
// BOOKS
// =============================================================================

/// Reading status of a book. No transition order is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookStatus {
    Reading,
    Completed,
    WantToRead,
}

/// A book on the shelf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
    pub date_added: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_completed: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub takeaways: Option<String>,
}

// =============================================================================
// COURSES
// =============================================================================

/// Enrollment status of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseStatus {
    InProgress,
    Completed,
    Planned,
}

/// A course, past or planned. No date ordering is enforced between
/// `start_date` and `end_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub institution: String,
    pub status: CourseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =============================================================================
// PROJECTS
// =============================================================================

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    NotStarted,
    InProgress,
    Completed,
    OnHold,
}

/// A checklist item inside a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTask {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// A tracked project with an embedded task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ProjectStatus,
    /// 0–100. Independent of the task-completion ratio; no invariant ties
    /// them together.
    pub progress: u8,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub tasks: Vec<ProjectTask>,
}
