//! Client for the build listing endpoint of Azure DevOps
//!
//! API docs: https://docs.microsoft.com/en-us/rest/api/azure/devops/build/builds/list

use crate::Result;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BuildResult {
    Succeeded,
    PartiallySucceeded,
    Failed,
    Canceled,
    None,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub id: u64,
    pub build_number: Option<String>,
    /// Only set once the build has completed
    pub result: Option<BuildResult>,
    /// The commit the build ran against
    pub source_version: String,
    pub source_branch: Option<String>,
}

impl Build {
    pub fn succeeded(&self) -> bool {
        self.result == Some(BuildResult::Succeeded)
    }
}

#[derive(Debug, Deserialize)]
pub struct BuildList {
    pub count: Option<usize>,
    pub value: Vec<Build>,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusFilter {
    InProgress,
    Completed,
    Cancelling,
    Postponed,
    NotStarted,
    All,
}

#[derive(Debug, Serialize)]
pub struct ListBuildsOptions<'a> {
    pub definitions: u64,
    #[serde(rename = "statusFilter")]
    pub status_filter: StatusFilter,
    #[serde(rename = "$top")]
    pub top: usize,
    #[serde(rename = "branchName")]
    pub branch_name: &'a str,
}

#[derive(Debug)]
pub struct Client {
    /// Project URL, e.g. `https://dev.azure.com/{organization}/{project}/`. Always terminated with
    /// a trailing slash.
    base_url: String,

    /// Client used to make http requests
    client: ReqwestClient,
}

impl Client {
    pub fn new<S: Into<String>>(base_url: S) -> Result<Self> {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let client = ReqwestClient::builder().user_agent(USER_AGENT).build()?;

        Ok(Self { base_url, client })
    }

    /// List builds, most recently finished first
    pub async fn list(&self, options: &ListBuildsOptions<'_>) -> Result<Vec<Build>> {
        let url = format!("{}_apis/build/Builds", self.base_url);
        let response = self.client.get(&url).query(options).send().await?;
        debug!("Builds Response: {:#?}", response);

        if !response.status().is_success() {
            let status = response.status();
            let payload = response.text().await?;
            return Err(format!("Request failed: {}: {}", status, payload).into());
        }

        let payload = response.text().await?;
        let list: BuildList = serde_json::from_str(&payload)?;

        Ok(list.value)
    }

    /// Human readable summary page of a build
    pub fn report_url(&self, build_id: u64) -> String {
        format!(
            "{}_build/index?buildId={}&_a=summary",
            self.base_url, build_id
        )
    }
}
