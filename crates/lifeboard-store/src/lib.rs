//! # lifeboard-store
//!
//! Record store gateway for the lifeboard dashboard.
//!
//! This crate provides:
//! - A REST client for the hosted tabular store (PostgREST-style read API)
//! - Environment-based configuration for the store endpoint and access key
//! - Literal fallback data sets, one per record kind
//! - The gateway: per-kind accessors that never fail, returning a tagged
//!   [`FetchOutcome`] of live or fallback rows
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | WARN  | Query failed, fallback substituted; health check failed |
//! | INFO  | Client initialization, completed fetches with row counts |
//! | DEBUG | Request construction (table, sort order, request id) |
//!
//! No subscriber is installed here; consumers bring their own.
//!
//! # Example
//!
//! ```rust,no_run
//! use lifeboard_store::Gateway;
//!
//! #[tokio::main]
//! async fn main() {
//!     let gateway = Gateway::from_env().expect("store configuration");
//!     let accounts = gateway.financial_accounts().await;
//!     println!("{} accounts ({:?})", accounts.len(), accounts.source);
//! }
//! ```

pub mod config;
pub mod fallback;
pub mod gateway;
pub mod rest;

// Mock record store for testing
#[cfg(test)]
pub mod mock;

// Re-export core types
pub use lifeboard_core::*;

pub use config::StoreConfig;
pub use gateway::Gateway;
pub use rest::RestStore;
