use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Executes one GraphQL document against a subgraph endpoint.
///
/// The strategy engine only depends on this trait, so tests can substitute a
/// canned client and count the requests that would have gone out.
#[async_trait]
pub trait SubgraphClient {
    /// Send `query` to `url` and return the response's `data` value.
    async fn query(&self, url: &str, query: &str) -> Result<Value>;
}

#[derive(Deserialize)]
struct GraphResponse {
    #[serde(default)]
    data: Value,
    #[serde(default)]
    errors: Vec<GraphError>,
}

#[derive(Deserialize)]
struct GraphError {
    message: String,
}

/// `SubgraphClient` backed by a shared `reqwest` connection pool.
#[derive(Clone, Default)]
pub struct HttpSubgraphClient {
    client: reqwest::Client,
}

impl HttpSubgraphClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubgraphClient for HttpSubgraphClient {
    async fn query(&self, url: &str, query: &str) -> Result<Value> {
        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({ "query": query }))
            .send()
            .await
            .with_context(|| format!("Failed to reach subgraph at {}", url))?
            .error_for_status()
            .with_context(|| format!("Subgraph at {} returned an error status", url))?;

        let body: GraphResponse = response
            .json()
            .await
            .context("Failed to parse subgraph response JSON")?;

        if let Some(error) = body.errors.first() {
            anyhow::bail!("Subgraph query failed: {}", error.message);
        }

        Ok(body.data)
    }
}
