//! Literal fallback data sets, one per record kind.
//!
//! Substituted by the gateway when a read-all query fails or comes back
//! empty — a product decision (the page must always have something to
//! render), not error recovery. Contents are fixed so repeated calls are
//! structurally equal and tests can match them exactly.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use lifeboard_core::{
    AccountKind, Book, BookStatus, Course, CourseStatus, FinancialAccount, Project, ProjectStatus,
    ProjectTask,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid literal date")
}

fn timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid literal timestamp")
}

/// Sample financial accounts: 4 entries, ids "1".."4".
pub fn financial_accounts() -> Vec<FinancialAccount> {
    vec![
        FinancialAccount {
            id: "1".to_string(),
            name: "Everyday Checking".to_string(),
            kind: AccountKind::Checking,
            balance: 2500.0,
            last_updated: timestamp(2024, 3, 15),
        },
        FinancialAccount {
            id: "2".to_string(),
            name: "High-Yield Savings".to_string(),
            kind: AccountKind::Savings,
            balance: 10000.0,
            last_updated: timestamp(2024, 3, 15),
        },
        FinancialAccount {
            id: "3".to_string(),
            name: "Brokerage".to_string(),
            kind: AccountKind::Investment,
            balance: 75000.0,
            last_updated: timestamp(2024, 3, 15),
        },
        FinancialAccount {
            id: "4".to_string(),
            name: "Coinbase".to_string(),
            kind: AccountKind::Crypto,
            balance: 12000.0,
            last_updated: timestamp(2024, 3, 15),
        },
    ]
}

/// Sample bookshelf: 5 entries spanning all three statuses.
pub fn books() -> Vec<Book> {
    vec![
        Book {
            id: "1".to_string(),
            title: "Atomic Habits".to_string(),
            author: "James Clear".to_string(),
            status: BookStatus::Completed,
            date_added: date(2023, 9, 1),
            date_completed: Some(date(2023, 10, 15)),
            summary: Some("A guide about building good habits and breaking bad ones.".to_string()),
            takeaways: Some(
                "Small changes compound over time. Focus on systems rather than goals."
                    .to_string(),
            ),
        },
        Book {
            id: "2".to_string(),
            title: "Deep Work".to_string(),
            author: "Cal Newport".to_string(),
            status: BookStatus::Completed,
            date_added: date(2023, 11, 1),
            date_completed: Some(date(2023, 12, 10)),
            summary: Some("Rules for focused success in a distracted world.".to_string()),
            takeaways: Some(
                "Schedule deep work blocks. Embrace boredom. Quit social media.".to_string(),
            ),
        },
        Book {
            id: "3".to_string(),
            title: "The Psychology of Money".to_string(),
            author: "Morgan Housel".to_string(),
            status: BookStatus::Reading,
            date_added: date(2024, 1, 15),
            date_completed: None,
            summary: Some("Timeless lessons on wealth, greed, and happiness.".to_string()),
            takeaways: None,
        },
        Book {
            id: "4".to_string(),
            title: "Thinking, Fast and Slow".to_string(),
            author: "Daniel Kahneman".to_string(),
            status: BookStatus::WantToRead,
            date_added: date(2024, 2, 20),
            date_completed: None,
            summary: None,
            takeaways: None,
        },
        Book {
            id: "5".to_string(),
            title: "The Design of Everyday Things".to_string(),
            author: "Don Norman".to_string(),
            status: BookStatus::WantToRead,
            date_added: date(2024, 3, 10),
            date_completed: None,
            summary: None,
            takeaways: None,
        },
    ]
}

/// Sample course list: 5 entries at State University.
pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "1".to_string(),
            name: "CS 101: Introduction to Computer Science".to_string(),
            institution: "State University".to_string(),
            status: CourseStatus::Completed,
            start_date: Some(date(2023, 9, 1)),
            end_date: Some(date(2023, 12, 15)),
            credits: Some(4),
            notes: Some(
                "Great introduction to programming fundamentals. Final project was building a simple web app."
                    .to_string(),
            ),
        },
        Course {
            id: "2".to_string(),
            name: "MATH 203: Linear Algebra".to_string(),
            institution: "State University".to_string(),
            status: CourseStatus::Completed,
            start_date: Some(date(2023, 9, 1)),
            end_date: Some(date(2023, 12, 15)),
            credits: Some(3),
            notes: Some(
                "Challenging but fascinating. Applications in computer graphics and machine learning."
                    .to_string(),
            ),
        },
        Course {
            id: "3".to_string(),
            name: "CS 212: Data Structures".to_string(),
            institution: "State University".to_string(),
            status: CourseStatus::InProgress,
            start_date: Some(date(2024, 1, 10)),
            end_date: None,
            credits: Some(4),
            notes: None,
        },
        Course {
            id: "4".to_string(),
            name: "PHIL 105: Critical Thinking".to_string(),
            institution: "State University".to_string(),
            status: CourseStatus::InProgress,
            start_date: Some(date(2024, 1, 10)),
            end_date: None,
            credits: Some(3),
            notes: None,
        },
        Course {
            id: "5".to_string(),
            name: "CS 301: Algorithms".to_string(),
            institution: "State University".to_string(),
            status: CourseStatus::Planned,
            start_date: Some(date(2024, 9, 1)),
            end_date: None,
            credits: Some(4),
            notes: None,
        },
    ]
}

/// Sample projects: 3 entries, 4 tasks each.
pub fn projects() -> Vec<Project> {
    fn task(id: &str, title: &str, completed: bool) -> ProjectTask {
        ProjectTask {
            id: id.to_string(),
            title: title.to_string(),
            completed,
        }
    }

    vec![
        Project {
            id: "1".to_string(),
            name: "Personal Dashboard".to_string(),
            description: Some(
                "A comprehensive dashboard for tracking personal metrics and goals".to_string(),
            ),
            status: ProjectStatus::InProgress,
            progress: 75,
            start_date: date(2024, 1, 1),
            target_date: Some(date(2024, 4, 1)),
            tasks: vec![
                task("1", "Design UI components", true),
                task("2", "Implement data fetching", true),
                task("3", "Add authentication", false),
                task("4", "Deploy to production", false),
            ],
        },
        Project {
            id: "2".to_string(),
            name: "Fitness Tracker".to_string(),
            description: Some("Mobile app for tracking workouts and nutrition".to_string()),
            status: ProjectStatus::Completed,
            progress: 100,
            start_date: date(2023, 12, 1),
            target_date: Some(date(2024, 3, 15)),
            tasks: vec![
                task("1", "Design UI/UX", true),
                task("2", "Build core features", true),
                task("3", "Test and debug", true),
                task("4", "App store submission", true),
            ],
        },
        Project {
            id: "3".to_string(),
            name: "Portfolio Website".to_string(),
            description: Some("Personal portfolio website with project showcase".to_string()),
            status: ProjectStatus::OnHold,
            progress: 30,
            start_date: date(2024, 2, 1),
            target_date: Some(date(2024, 5, 1)),
            tasks: vec![
                task("1", "Design layout", true),
                task("2", "Create components", false),
                task("3", "Add content", false),
                task("4", "Optimize performance", false),
            ],
        },
    ]
}
