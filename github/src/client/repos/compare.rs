use super::RepositoryClient;
use crate::{
    client::{PaginationOptions, Response, Result},
    Comparison,
};

// Implementation for the compare endpoint
// https://developer.github.com/v3/repos/commits/#compare-two-commits
impl RepositoryClient<'_> {
    /// Compare two commits
    ///
    /// `base` and `head` may be shas or branch names. The commits in the returned comparison are
    /// the ones reachable from `head` but not from `base`, oldest first.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/commits/#compare-two-commits
    pub async fn compare_commits(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
        options: PaginationOptions,
    ) -> Result<Response<Comparison>> {
        let url = compare_url(owner, repo, base, head);
        let response = self.inner.get(&url).query(&options).send().await?;

        self.inner.json(response).await
    }
}

fn compare_url(owner: &str, repo: &str, base: &str, head: &str) -> String {
    format!("repos/{}/{}/compare/{}...{}", owner, repo, base, head)
}
