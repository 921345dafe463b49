//! Lookup Queries
//!
//! The concrete query types the daemon answers: repository summaries and
//! issue/pull-request summaries. Each executor fetches through the GraphQL
//! client and shapes the typed response into the payload lines sent to the
//! client. Rendering is kept in pure functions so it can be tested without
//! network access.

use super::client::GithubClient;
use super::types::{IssueData, IssueOrPullRequest, Repository, RepositoryData};
use crate::engine::executors::QueryExecutors;

use anyhow::Result;
use regex::Regex;
use std::sync::Arc;

/// Parameter shape for `repo:` queries, matched in full before dispatch.
pub const REPO_PARAMS: &str = r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+$";
/// Parameter shape for `issue:` queries, matched in full before dispatch.
pub const ISSUE_PARAMS: &str = r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+#[0-9]+$";

const REPO_QUERY: &str = "\
query($owner: String!, $name: String!) {
  repository(owner: $owner, name: $name) {
    nameWithOwner
    description
    stargazerCount
    forkCount
    issues(states: OPEN) { totalCount }
  }
}";

const ISSUE_QUERY: &str = "\
query($owner: String!, $name: String!, $number: Int!) {
  repository(owner: $owner, name: $name) {
    issueOrPullRequest(number: $number) {
      ... on Issue { title state author { login } }
      ... on PullRequest { title state author { login } }
    }
  }
}";

/// Registers the GitHub query types on an executor registry.
pub fn register_executors(executors: &QueryExecutors, client: Arc<GithubClient>) {
    let repo_client = client.clone();
    executors.register(
        "repo",
        Regex::new(REPO_PARAMS).expect("repo parameter pattern"),
        "owner/name",
        move |params| {
            let client = repo_client.clone();
            async move { fetch_repository(&client, &params).await }
        },
    );

    let issue_client = client;
    executors.register(
        "issue",
        Regex::new(ISSUE_PARAMS).expect("issue parameter pattern"),
        "owner/name#number",
        move |params| {
            let client = issue_client.clone();
            async move { fetch_issue(&client, &params).await }
        },
    );
}

/// Fetches and renders a repository summary.
pub async fn fetch_repository(client: &GithubClient, params: &str) -> Result<String> {
    let (owner, name) = split_repo(params)?;

    let data: RepositoryData = client
        .query(
            REPO_QUERY,
            serde_json::json!({ "owner": owner, "name": name }),
        )
        .await?;

    let repository = data
        .repository
        .ok_or_else(|| anyhow::anyhow!("Repository not found: {}", params))?;

    Ok(render_repository(&repository))
}

/// Fetches and renders an issue or pull request summary.
pub async fn fetch_issue(client: &GithubClient, params: &str) -> Result<String> {
    let (repo, number) = params
        .split_once('#')
        .ok_or_else(|| anyhow::anyhow!("Invalid issue reference: {}", params))?;
    let (owner, name) = split_repo(repo)?;
    let number: u64 = number.parse()?;

    let data: IssueData = client
        .query(
            ISSUE_QUERY,
            serde_json::json!({ "owner": owner, "name": name, "number": number }),
        )
        .await?;

    let item = data
        .repository
        .and_then(|repository| repository.issue_or_pull_request)
        .ok_or_else(|| anyhow::anyhow!("Issue or PR not found"))?;

    Ok(render_issue(number, &item))
}

fn split_repo(params: &str) -> Result<(&str, &str)> {
    params
        .split_once('/')
        .ok_or_else(|| anyhow::anyhow!("Invalid repository reference: {}", params))
}

/// Shapes a repository into the payload lines sent to the client.
pub fn render_repository(repository: &Repository) -> String {
    let mut lines = vec![repository.name_with_owner.clone()];

    if let Some(description) = &repository.description
        && !description.is_empty()
    {
        lines.push(description.clone());
    }

    lines.push(format!(
        "stars {}  forks {}  open issues {}",
        repository.stargazer_count, repository.fork_count, repository.issues.total_count
    ));

    lines.join("\n")
}

/// Shapes an issue or pull request into the payload lines sent to the client.
pub fn render_issue(number: u64, item: &IssueOrPullRequest) -> String {
    let author = item
        .author
        .as_ref()
        .map(|author| author.login.as_str())
        .unwrap_or("ghost");

    format!("#{} {}\n{} by {}", number, item.title, item.state, author)
}
