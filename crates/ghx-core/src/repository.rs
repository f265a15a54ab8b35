//! Repository record as returned by `GET /repos/{owner}/{name}` and as stored
//! in the persisted list.

use serde::{Deserialize, Serialize};

/// Owner of a repository (user or organization).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
    pub avatar_url: String,
}

/// One looked-up repository. `full_name` ("owner/name") is the list key.
///
/// Only the fields the explorer renders are modeled; anything else in the API
/// response is ignored on decode. The detail counters are optional so lists
/// written without them still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner: Owner,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stargazers_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forks_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_issues_count: Option<u64>,
}

impl RepositoryRecord {
    /// Minimal record with just the listed fields; detail counters unset.
    pub fn new(
        full_name: impl Into<String>,
        description: Option<String>,
        owner: Owner,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            description,
            owner,
            html_url: None,
            stargazers_count: None,
            forks_count: None,
            open_issues_count: None,
        }
    }
}
