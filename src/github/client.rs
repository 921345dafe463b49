//! GitHub GraphQL Client
//!
//! Thin transport wrapper around reqwest. One method: POST a GraphQL document
//! with the configured bearer token and deserialize the `data` it returns.

use super::types::{GraphQlRequest, GraphQlResponse};

use anyhow::Result;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Public GraphQL endpoint.
pub const GITHUB_GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

/// Per-request transport timeout. Remote lookups are expected to take seconds;
/// the engine isolates that latency from clients, so this only bounds how long
/// a background execution can hang on the wire.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the GitHub GraphQL API.
pub struct GithubClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl GithubClient {
    /// Creates a client against the public API endpoint.
    pub fn new(token: String) -> Self {
        Self::with_endpoint(GITHUB_GRAPHQL_ENDPOINT, token)
    }

    /// Points the client at a non-default endpoint (GitHub Enterprise, tests).
    pub fn with_endpoint(endpoint: &str, token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            token,
        }
    }

    /// Executes one GraphQL query and deserializes its `data` field.
    ///
    /// Transport failures, non-success HTTP statuses and GraphQL-reported
    /// errors all surface as `Err`; the executor registry converts them into
    /// an `Outcome::Error` for the client. There is no retry here: a failed
    /// lookup reverts its key to absent and the next identical query starts
    /// over.
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T> {
        let request = GraphQlRequest {
            query: query.to_string(),
            variables,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            // The API rejects requests without a User-Agent.
            .header(reqwest::header::USER_AGENT, "gh-lookupd")
            .json(&request)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "GitHub API request failed: {}",
                response.status()
            ));
        }

        let envelope: GraphQlResponse<T> = response.json().await?;

        if let Some(errors) = &envelope.errors
            && let Some(first) = errors.first()
        {
            return Err(anyhow::anyhow!("{}", first.message));
        }

        envelope
            .data
            .ok_or_else(|| anyhow::anyhow!("GraphQL response contained no data"))
    }
}
