use super::{DateTime, NodeId, Oid, User};
use serde::Deserialize;

/// Name, email and date recorded by git for an author or committer
#[derive(Clone, Debug, Deserialize)]
pub struct Signature {
    pub name: String,
    pub email: String,
    pub date: Option<DateTime>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GitCommit {
    pub message: String,
    pub author: Option<Signature>,
    pub committer: Option<Signature>,
    pub url: String,
    #[serde(default)]
    pub comment_count: u64,
}

impl GitCommit {
    /// The subject line of the commit message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

/// A commit as returned by the repository commit endpoints.
///
/// `author` and `committer` are the Github accounts linked to the commit, if any. They are `None`
/// when the email recorded in git isn't associated with an account.
#[derive(Clone, Debug, Deserialize)]
pub struct RepoCommit {
    pub sha: Oid,
    pub node_id: NodeId,
    pub url: String,
    pub html_url: String,
    pub commit: GitCommit,
    pub author: Option<User>,
    pub committer: Option<User>,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonStatus {
    Diverged,
    Ahead,
    Behind,
    Identical,
}

/// The result of comparing two commits.
///
/// `commits` is ordered oldest first, starting just after the base commit and ending with the
/// head commit.
#[derive(Clone, Debug, Deserialize)]
pub struct Comparison {
    pub url: String,
    pub html_url: String,
    pub status: ComparisonStatus,
    pub ahead_by: u64,
    pub behind_by: u64,
    pub total_commits: u64,
    pub base_commit: RepoCommit,
    pub merge_base_commit: RepoCommit,
    pub commits: Vec<RepoCommit>,
}
