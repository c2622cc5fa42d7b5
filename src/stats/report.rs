//! Log statistics over the backing document store
//!
//! Issues a small fixed set of count queries against a collection of
//! nginx-style log documents and renders the results in a fixed template.
//! Documents are only counted, never read or mutated.

use crate::config::LogStatsConfig;
use crate::error::{CacheTraceError, Result};
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// HTTP methods counted by the report, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// All counted methods, in the order they appear in the report
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];

    /// The value stored in the log documents' `method` field
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client wrapper issuing the count queries
pub struct LogStats {
    collection: Collection<Document>,
    status_path: String,
}

impl LogStats {
    /// Connect to the document store using the given configuration
    pub async fn connect(config: &LogStatsConfig) -> Result<Self> {
        config.validate()?;

        info!(
            "Connecting to MongoDB at {} ({}.{})",
            config.mongo_uri, config.database, config.collection
        );

        let client = Client::with_uri_str(&config.mongo_uri)
            .await
            .map_err(|e| CacheTraceError::ConnectionError(e.to_string()))?;

        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);

        info!("Successfully connected to MongoDB");

        Ok(Self {
            collection,
            status_path: config.status_path.clone(),
        })
    }

    /// Unconditional count of all log documents
    pub async fn total(&self) -> Result<u64> {
        debug!("Counting all log documents");
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    /// Count of log documents with the given HTTP method
    pub async fn count_for_method(&self, method: HttpMethod) -> Result<u64> {
        debug!("Counting log documents with method {}", method);
        Ok(self
            .collection
            .count_documents(doc! { "method": method.as_str() })
            .await?)
    }

    /// Count of GET requests against the configured status path
    pub async fn status_checks(&self) -> Result<u64> {
        debug!("Counting status checks ({})", self.status_path);
        Ok(self
            .collection
            .count_documents(doc! { "method": "GET", "path": &self.status_path })
            .await?)
    }

    /// Run every count query once and collect the results
    pub async fn report(&self) -> Result<LogReport> {
        let total = self.total().await?;

        let mut per_method = Vec::with_capacity(HttpMethod::ALL.len());
        for method in HttpMethod::ALL {
            per_method.push((method, self.count_for_method(method).await?));
        }

        let status_checks = self.status_checks().await?;

        Ok(LogReport {
            total,
            per_method,
            status_checks,
        })
    }
}

/// One-shot report over the log collection, rendered via `Display`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogReport {
    /// Total number of log documents
    pub total: u64,
    /// Per-method counts, in report order
    pub per_method: Vec<(HttpMethod, u64)>,
    /// GET requests against the status path
    pub status_checks: u64,
}

impl fmt::Display for LogReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} logs", self.total)?;
        writeln!(f, "Methods:")?;
        for (method, count) in &self.per_method {
            writeln!(f, "\tmethod {}: {}", method, count)?;
        }
        writeln!(f, "{} status check", self.status_checks)
    }
}
