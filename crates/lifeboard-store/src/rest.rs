//! PostgREST-backed record store implementation.
//!
//! Every accessor is one fire-and-forget GET against
//! `{base}/rest/v1/{table}?select=*&order={column}.desc` with the access key
//! sent both as `apikey` and as a bearer token. No retries, no caching —
//! errors propagate and the gateway decides what to do with them.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use uuid::Uuid;

use lifeboard_core::{
    Book, Course, Error, FinancialAccount, Project, RecordKind, RecordStore, Result,
};

use crate::config::StoreConfig;

/// REST client for the hosted tabular store.
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    /// Create a client from the given configuration.
    pub fn new(config: StoreConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Request(e.to_string()))?;

        info!(
            subsystem = "store",
            component = "rest",
            op = "init",
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            "Initializing record store client"
        );

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(StoreConfig::from_env()?)
    }

    fn table_url(&self, kind: RecordKind) -> String {
        format!("{}/rest/v1/{}", self.base_url, kind.table())
    }

    /// One parameterized read-all query serving all four record kinds.
    async fn fetch_table<T: DeserializeOwned>(&self, kind: RecordKind) -> Result<Vec<T>> {
        let start = Instant::now();
        let request_id = Uuid::now_v7();
        let order = format!("{}.desc", kind.sort_column());

        debug!(
            subsystem = "store",
            component = "rest",
            op = "fetch_all",
            request_id = %request_id,
            db_table = kind.table(),
            order = %order,
            "Issuing read-all query"
        );

        let response = self
            .client
            .get(self.table_url(kind))
            .query(&[("select", "*"), ("order", order.as_str())])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(
                subsystem = "store",
                component = "rest",
                op = "fetch_all",
                request_id = %request_id,
                db_table = kind.table(),
                status = status.as_u16(),
                "Store rejected read-all query"
            );
            return Err(Error::Store {
                status: status.as_u16(),
                message,
            });
        }

        let rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        info!(
            subsystem = "store",
            component = "rest",
            op = "fetch_all",
            request_id = %request_id,
            db_table = kind.table(),
            result_count = rows.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Read-all query complete"
        );

        Ok(rows)
    }
}

#[async_trait]
impl RecordStore for RestStore {
    async fn fetch_financial_accounts(&self) -> Result<Vec<FinancialAccount>> {
        self.fetch_table(RecordKind::FinancialAccounts).await
    }

    async fn fetch_books(&self) -> Result<Vec<Book>> {
        self.fetch_table(RecordKind::Books).await
    }

    async fn fetch_courses(&self) -> Result<Vec<Course>> {
        self.fetch_table(RecordKind::Courses).await
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        self.fetch_table(RecordKind::Projects).await
    }

    async fn health_check(&self) -> Result<()> {
        let response = self
            .client
            .get(self.table_url(RecordKind::FinancialAccounts))
            .query(&[("select", "id"), ("limit", "1")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(
                subsystem = "store",
                component = "rest",
                op = "health_check",
                "Store reachable"
            );
            Ok(())
        } else {
            Err(Error::Store {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_table_url_construction() {
        let store = RestStore::new(StoreConfig::new("https://store.example", "k")).unwrap();
        assert_eq!(
            store.table_url(RecordKind::Books),
            "https://store.example/rest/v1/books"
        );
    }

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let store = RestStore::new(StoreConfig::new("https://store.example/", "k")).unwrap();
        assert_eq!(
            store.table_url(RecordKind::FinancialAccounts),
            "https://store.example/rest/v1/financial_accounts"
        );
    }

    #[test]
    fn test_new_honors_timeout() {
        let config =
            StoreConfig::new("https://store.example", "k").timeout(Duration::from_secs(2));
        assert!(RestStore::new(config).is_ok());
    }
}
