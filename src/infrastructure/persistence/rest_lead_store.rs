//! Hosted-database REST backend.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::domain::{Lead, LeadStore, StoreError};

/// Logical collection that receives lead records.
const COLLECTION: &str = "contacts";

/// Request timeout for store calls. A hung collaborator surfaces as the same
/// opaque failure as any other.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Lead store backed by a hosted database's REST interface.
///
/// Inserts go to `{base}/rest/v1/contacts` with the access key in both the
/// `apikey` and `Authorization` headers, the way the hosted service expects.
pub struct RestLeadStore {
    client: reqwest::Client,
    endpoint: Url,
    probe_endpoint: Url,
    api_key: String,
}

impl RestLeadStore {
    /// Creates a store for the given service base URL and access key.
    pub fn new(base: &Url, api_key: String) -> Result<Self> {
        let root = format!("{}/rest/v1/", base.as_str().trim_end_matches('/'));
        let probe_endpoint: Url = root
            .parse()
            .with_context(|| format!("invalid store base URL: {base}"))?;
        let endpoint = probe_endpoint
            .join(COLLECTION)
            .context("failed to build store endpoint")?;

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            probe_endpoint,
            api_key,
        })
    }

    /// Full URL insert requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Wire shape of one inserted record; the store assigns id and timestamps.
#[derive(Serialize)]
struct InsertRecord<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

#[async_trait]
impl LeadStore for RestLeadStore {
    async fn insert_lead(&self, lead: &Lead) -> Result<(), StoreError> {
        let record = InsertRecord {
            name: &lead.name,
            email: &lead.email,
            message: &lead.message,
        };

        self.client
            .post(self.endpoint.clone())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()
            .await
            .map_err(|e| StoreError::new(e.to_string()))?
            .error_for_status()
            .map_err(|e| StoreError::new(e.to_string()))?;

        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.client
            .get(self.probe_endpoint.clone())
            .header("apikey", &self.api_key)
            .send()
            .await
            .map(|response| response.status().is_success())
            .unwrap_or(false)
    }

    fn kind(&self) -> &'static str {
        "hosted-rest"
    }
}
