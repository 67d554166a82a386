//! Record kind descriptor.
//!
//! The four record categories differ only by collection name and sort field;
//! this descriptor carries both so the store client can issue one
//! parameterized read-all query instead of four hand-duplicated ones.

use std::fmt;

/// One of the four record categories served by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    FinancialAccounts,
    Books,
    Courses,
    Projects,
}

impl RecordKind {
    /// All kinds, in dashboard page order.
    pub const ALL: [RecordKind; 4] = [
        RecordKind::FinancialAccounts,
        RecordKind::Books,
        RecordKind::Courses,
        RecordKind::Projects,
    ];

    /// Collection name in the hosted store.
    pub fn table(&self) -> &'static str {
        match self {
            RecordKind::FinancialAccounts => "financial_accounts",
            RecordKind::Books => "books",
            RecordKind::Courses => "courses",
            RecordKind::Projects => "projects",
        }
    }

    /// Column every read-all query sorts by, descending.
    pub fn sort_column(&self) -> &'static str {
        match self {
            RecordKind::FinancialAccounts => "last_updated",
            RecordKind::Books => "date_added",
            RecordKind::Courses => "start_date",
            RecordKind::Projects => "start_date",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names() {
        assert_eq!(RecordKind::FinancialAccounts.table(), "financial_accounts");
        assert_eq!(RecordKind::Books.table(), "books");
        assert_eq!(RecordKind::Courses.table(), "courses");
        assert_eq!(RecordKind::Projects.table(), "projects");
    }

    #[test]
    fn test_sort_columns() {
        assert_eq!(RecordKind::FinancialAccounts.sort_column(), "last_updated");
        assert_eq!(RecordKind::Books.sort_column(), "date_added");
        assert_eq!(RecordKind::Courses.sort_column(), "start_date");
        assert_eq!(RecordKind::Projects.sort_column(), "start_date");
    }

    #[test]
    fn test_all_covers_every_kind() {
        assert_eq!(RecordKind::ALL.len(), 4);
        let tables: Vec<_> = RecordKind::ALL.iter().map(|k| k.table()).collect();
        assert_eq!(
            tables,
            vec!["financial_accounts", "books", "courses", "projects"]
        );
    }

    #[test]
    fn test_display_matches_table() {
        assert_eq!(RecordKind::Books.to_string(), "books");
    }
}
