//! Works out whether the watched branch is green and, if it isn't, which commits may have broken
//! it.

use crate::{
    builds::{self, Build, ListBuildsOptions, StatusFilter},
    config::{BuildsConfig, GithubConfig},
    Error, Result,
};
use async_trait::async_trait;
use github::{client::PaginationOptions, RepoCommit};
use log::{debug, info};
use serde::{Serialize, Serializer};

/// Display projection of a commit in the suspect range
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    pub sha: String,
    pub url: String,
    /// First line of the commit message
    pub message: String,
    /// Github login, or the git author name when the commit isn't linked to an account
    pub author: String,
    pub author_url: Option<String>,
    pub avatar_url: Option<String>,
}

impl Commit {
    pub fn from_repo_commit(commit: &RepoCommit) -> Self {
        let (author, author_url, avatar_url) = match &commit.author {
            Some(user) => (
                user.login.clone(),
                Some(user.html_url.clone()),
                Some(user.avatar_url.clone()),
            ),
            None => (
                commit
                    .commit
                    .author
                    .as_ref()
                    .map(|signature| signature.name.clone())
                    .unwrap_or_default(),
                None,
                None,
            ),
        };

        Self {
            sha: commit.sha.to_string(),
            url: commit.html_url.clone(),
            message: commit.commit.summary().to_owned(),
            author,
            author_url,
            avatar_url,
        }
    }
}

/// Health of the most recent build
#[derive(Clone, Debug, PartialEq)]
pub enum Status {
    Green {
        url: String,
    },
    /// Broken, and none of the fetched builds succeeded so there is no range to inspect
    Broken {
        url: String,
    },
    /// Broken, along with the commits between the last success and the first failure
    BrokenSince {
        url: String,
        commits: Vec<Commit>,
    },
}

impl Status {
    pub fn is_green(&self) -> bool {
        matches!(self, Status::Green { .. })
    }

    /// Report page of the most recent build
    pub fn url(&self) -> &str {
        match self {
            Status::Green { url } | Status::Broken { url } | Status::BrokenSince { url, .. } => url,
        }
    }

    pub fn commits(&self) -> Option<&[Commit]> {
        match self {
            Status::BrokenSince { commits, .. } => Some(commits),
            _ => None,
        }
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct StatusJson<'a> {
            green: bool,
            url: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            commits: Option<&'a [Commit]>,
        }

        StatusJson {
            green: self.is_green(),
            url: self.url(),
            commits: self.commits(),
        }
        .serialize(serializer)
    }
}

/// Where the newest build sits relative to the last good one
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Breakage {
    Green,
    NoBaseline,
    /// Indices into the build list, which is ordered newest first
    Range {
        last_success: usize,
        first_fail: usize,
    },
}

impl Breakage {
    /// `builds` must be non-empty and ordered newest first.
    pub fn locate(builds: &[Build]) -> Self {
        if builds.first().map_or(false, Build::succeeded) {
            return Breakage::Green;
        }

        // The newest build failed, so the last success is at index 1 or later and always has a
        // newer failing build in front of it.
        match builds.iter().skip(1).position(Build::succeeded) {
            Some(offset) => Breakage::Range {
                last_success: offset + 1,
                first_fail: offset,
            },
            None => Breakage::NoBaseline,
        }
    }
}

#[async_trait]
pub trait BuildSource {
    /// Recent builds of the watched branch, newest first
    async fn recent_builds(&self) -> Result<Vec<Build>>;

    /// Human readable report page for a build
    fn report_url(&self, build: &Build) -> String;
}

#[async_trait]
pub trait CommitSource {
    /// Commits reachable from `head` but not from `base`, oldest first
    async fn compare(&self, base: &str, head: &str) -> Result<Vec<Commit>>;
}

pub async fn resolve<B, C>(builds: &B, commits: &C) -> Result<Status>
where
    B: BuildSource + ?Sized,
    C: CommitSource + ?Sized,
{
    let recent = builds.recent_builds().await?;
    let newest = recent.first().ok_or(Error::EmptyBuildList)?;
    let url = builds.report_url(newest);

    match Breakage::locate(&recent) {
        Breakage::Green => Ok(Status::Green { url }),
        Breakage::NoBaseline => Ok(Status::Broken { url }),
        Breakage::Range {
            last_success,
            first_fail,
        } => {
            let last_success = &recent[last_success];
            let first_fail = &recent[first_fail];

            info!("Last successful commit: {}", last_success.source_version);
            info!("First failed commit: {}", first_fail.source_version);

            let commits = commits
                .compare(&last_success.source_version, &first_fail.source_version)
                .await?;

            Ok(Status::BrokenSince { url, commits })
        }
    }
}

/// `BuildSource` backed by the build service
pub struct Builds {
    client: builds::Client,
    definition: u64,
    branch: String,
    top: usize,
}

impl Builds {
    pub fn new(config: &BuildsConfig) -> Result<Self> {
        Ok(Self {
            client: builds::Client::new(config.base_url.clone())?,
            definition: config.definition,
            branch: config.branch.clone(),
            top: config.top,
        })
    }
}

#[async_trait]
impl BuildSource for Builds {
    async fn recent_builds(&self) -> Result<Vec<Build>> {
        let options = ListBuildsOptions {
            definitions: self.definition,
            status_filter: StatusFilter::Completed,
            top: self.top,
            branch_name: &self.branch,
        };

        self.client.list(&options).await
    }

    fn report_url(&self, build: &Build) -> String {
        self.client.report_url(build.id)
    }
}

/// `CommitSource` backed by the Github compare API
pub struct Commits {
    client: github::Client,
    owner: String,
    repo: String,
}

impl Commits {
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let client = github::Client::builder()
            .base_url(config.base_url.clone())
            .build()?;

        Ok(Self {
            client,
            owner: config.owner.clone(),
            repo: config.repo.clone(),
        })
    }
}

#[async_trait]
impl CommitSource for Commits {
    async fn compare(&self, base: &str, head: &str) -> Result<Vec<Commit>> {
        let mut commits = Vec::new();
        let mut page = None;

        // Large ranges are split across pages, follow the `next` links until the last one
        loop {
            let options = PaginationOptions {
                page,
                per_page: None,
            };
            let (pagination, rate, comparison) = self
                .client
                .repos()
                .compare_commits(&self.owner, &self.repo, base, head, options)
                .await?
                .into_parts();

            debug!(
                "Compared {}...{}: {} of {} commits on this page, {} requests remaining",
                base,
                head,
                comparison.commits.len(),
                comparison.total_commits,
                rate.remaining
            );
            for commit in &comparison.commits {
                debug!("Suspect commit {} {}", commit.sha.short(), commit.commit.summary());
                commits.push(Commit::from_repo_commit(commit));
            }

            match pagination.next_page {
                Some(next) if page.map_or(true, |current| next > current) => page = Some(next),
                _ => break,
            }
        }

        Ok(commits)
    }
}
