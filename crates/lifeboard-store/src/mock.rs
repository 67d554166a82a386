//! Mock record store for deterministic testing.
//!
//! Serves configured rows or a configured failure, and counts calls so tests
//! can assert the gateway actually went through the store.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use lifeboard_core::{
    Book, Course, Error, FinancialAccount, Project, RecordStore, Result,
};

/// In-memory record store test double.
#[derive(Default)]
pub struct MockStore {
    accounts: Vec<FinancialAccount>,
    books: Vec<Book>,
    courses: Vec<Course>,
    projects: Vec<Project>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(mut self, accounts: Vec<FinancialAccount>) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = books;
        self
    }

    pub fn with_courses(mut self, courses: Vec<Course>) -> Self {
        self.courses = courses;
        self
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    /// Make every operation fail with a transport error.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Number of store operations issued so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn serve<T: Clone>(&self, rows: &[T]) -> Result<Vec<T>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(Error::Request("mock transport failure".to_string()))
        } else {
            Ok(rows.to_vec())
        }
    }
}

#[async_trait]
impl RecordStore for MockStore {
    async fn fetch_financial_accounts(&self) -> Result<Vec<FinancialAccount>> {
        self.serve(&self.accounts)
    }

    async fn fetch_books(&self) -> Result<Vec<Book>> {
        self.serve(&self.books)
    }

    async fn fetch_courses(&self) -> Result<Vec<Course>> {
        self.serve(&self.courses)
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        self.serve(&self.projects)
    }

    async fn health_check(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(Error::Store {
                status: 503,
                message: "mock store down".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
