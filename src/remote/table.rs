//! Table-scoped operations.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::remote::client::RemoteClient;
use crate::remote::error::RemoteError;
use crate::remote::query::Query;

/// Select/insert/update/delete against one table.
#[derive(Clone)]
pub struct TableClient {
    client: RemoteClient,
    table: String,
}

impl TableClient {
    pub(crate) fn new(client: RemoteClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.table
    }

    /// Rows matching `query`, decoded as `T`.
    pub async fn select<T: DeserializeOwned>(&self, query: &Query) -> Result<Vec<T>, RemoteError> {
        tracing::debug!(table = %self.table, params = ?query.to_read_params(), "select");
        let builder = self
            .client
            .request(Method::GET, self.url()?)
            .query(&query.to_read_params());
        let body = self.client.execute(builder).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Insert one row. The backend is asked not to echo it back.
    pub async fn insert<T: Serialize>(&self, row: &T) -> Result<(), RemoteError> {
        tracing::debug!(table = %self.table, "insert");
        let builder = self
            .client
            .request(Method::POST, self.url()?)
            .header("Prefer", "return=minimal")
            .json(row);
        self.client.execute(builder).await?;
        Ok(())
    }

    /// Apply `patch` to every row matching `query`.
    pub async fn update<T: Serialize>(&self, patch: &T, query: &Query) -> Result<(), RemoteError> {
        self.ensure_filtered("update", query)?;
        tracing::debug!(table = %self.table, filters = ?query.filters(), "update");
        let builder = self
            .client
            .request(Method::PATCH, self.url()?)
            .query(&query.to_write_params())
            .header("Prefer", "return=minimal")
            .json(patch);
        self.client.execute(builder).await?;
        Ok(())
    }

    /// Delete every row matching `query`.
    pub async fn delete(&self, query: &Query) -> Result<(), RemoteError> {
        self.ensure_filtered("delete", query)?;
        tracing::debug!(table = %self.table, filters = ?query.filters(), "delete");
        let builder = self
            .client
            .request(Method::DELETE, self.url()?)
            .query(&query.to_write_params());
        self.client.execute(builder).await?;
        Ok(())
    }

    fn url(&self) -> Result<reqwest::Url, RemoteError> {
        self.client.endpoint(&format!("rest/v1/{}", self.table))
    }

    fn ensure_filtered(&self, operation: &'static str, query: &Query) -> Result<(), RemoteError> {
        if query.is_filtered() {
            Ok(())
        } else {
            Err(RemoteError::UnfilteredWrite {
                operation,
                table: self.table.clone(),
            })
        }
    }
}
