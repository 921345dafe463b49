//! GitHub GraphQL Wire Types
//!
//! DTOs for the GraphQL request/response envelope and the slices of the GitHub
//! schema the lookup queries select. Field names follow the API's camelCase.

use serde::{Deserialize, Serialize};

/// Request envelope POSTed to the GraphQL endpoint.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest {
    /// The GraphQL document.
    pub query: String,
    /// Variable bindings referenced by the document.
    pub variables: serde_json::Value,
}

/// Response envelope returned by the GraphQL endpoint.
///
/// `data` and `errors` may both be present (partial results); any reported
/// error invalidates the lookup here.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

/// A single error reported by the API.
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `data` shape for the repository lookup.
#[derive(Debug, Deserialize)]
pub struct RepositoryData {
    /// `None` when the repository does not exist or is not visible.
    pub repository: Option<Repository>,
}

/// The repository fields selected by the lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub name_with_owner: String,
    pub description: Option<String>,
    pub stargazer_count: u64,
    pub fork_count: u64,
    pub issues: IssueCount,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCount {
    pub total_count: u64,
}

/// `data` shape for the issue-or-pull-request lookup.
#[derive(Debug, Deserialize)]
pub struct IssueData {
    pub repository: Option<IssueRepository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRepository {
    /// `None` when the number resolves to neither an issue nor a PR.
    pub issue_or_pull_request: Option<IssueOrPullRequest>,
}

/// Fields shared by the Issue and PullRequest inline fragments.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueOrPullRequest {
    pub title: String,
    pub state: String,
    /// `None` for content whose author account was deleted.
    pub author: Option<Author>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub login: String,
}
