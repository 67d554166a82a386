//! Aggregations the dashboard pages compute over fetched rows.
//!
//! Pure functions over slices; no fetch logic here. The pages render these
//! directly (net worth header, reading stats grid, project summary cards).

use crate::models::{
    AccountKind, Book, BookStatus, Course, CourseStatus, FinancialAccount, Project, ProjectStatus,
};

/// Balance totals by account category.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccountTotals {
    pub checking: f64,
    pub savings: f64,
    pub investment: f64,
    pub crypto: f64,
    pub total: f64,
}

impl AccountTotals {
    pub fn tally(accounts: &[FinancialAccount]) -> Self {
        let mut totals = Self::default();
        for account in accounts {
            match account.kind {
                AccountKind::Checking => totals.checking += account.balance,
                AccountKind::Savings => totals.savings += account.balance,
                AccountKind::Investment => totals.investment += account.balance,
                AccountKind::Crypto => totals.crypto += account.balance,
            }
            totals.total += account.balance;
        }
        totals
    }

    /// Cash on hand (checking + savings).
    pub fn cash(&self) -> f64 {
        self.checking + self.savings
    }
}

/// Book counts by reading status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookCounts {
    pub reading: usize,
    pub completed: usize,
    pub want_to_read: usize,
    pub total: usize,
}

impl BookCounts {
    pub fn tally(books: &[Book]) -> Self {
        let mut counts = Self::default();
        for book in books {
            match book.status {
                BookStatus::Reading => counts.reading += 1,
                BookStatus::Completed => counts.completed += 1,
                BookStatus::WantToRead => counts.want_to_read += 1,
            }
        }
        counts.total = books.len();
        counts
    }
}

/// Course counts by status, plus credits currently being taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CourseCounts {
    pub in_progress: usize,
    pub completed: usize,
    pub planned: usize,
    pub total: usize,
    pub current_credits: i32,
}

impl CourseCounts {
    pub fn tally(courses: &[Course]) -> Self {
        let mut counts = Self::default();
        for course in courses {
            match course.status {
                CourseStatus::InProgress => {
                    counts.in_progress += 1;
                    counts.current_credits += course.credits.unwrap_or(0);
                }
                CourseStatus::Completed => counts.completed += 1,
                CourseStatus::Planned => counts.planned += 1,
            }
        }
        counts.total = courses.len();
        counts
    }
}

/// Project counts by status, plus mean progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProjectStats {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub on_hold: usize,
    /// Mean of `progress` across all projects; 0 when there are none.
    pub average_progress: f64,
}

impl ProjectStats {
    pub fn tally(projects: &[Project]) -> Self {
        let mut stats = Self::default();
        let mut progress_sum: u32 = 0;
        for project in projects {
            match project.status {
                ProjectStatus::NotStarted => stats.not_started += 1,
                ProjectStatus::InProgress => stats.in_progress += 1,
                ProjectStatus::Completed => stats.completed += 1,
                ProjectStatus::OnHold => stats.on_hold += 1,
            }
            progress_sum += u32::from(project.progress);
        }
        stats.total = projects.len();
        if stats.total > 0 {
            stats.average_progress = f64::from(progress_sum) / stats.total as f64;
        }
        stats
    }
}
