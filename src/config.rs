use crate::Result;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub builds: BuildsConfig,
    pub github: GithubConfig,
    pub page: PageConfig,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Where to find the CI builds to watch
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BuildsConfig {
    /// Project URL of the build service, terminated with a trailing slash
    pub base_url: String,

    /// Build definition (pipeline) id
    pub definition: u64,

    /// Fully qualified name of the branch whose builds are inspected
    pub branch: String,

    /// Number of recent builds to fetch
    pub top: usize,
}

impl Default for BuildsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://vscode.visualstudio.com/VSCode/".to_owned(),
            definition: 1,
            branch: "refs/heads/master".to_owned(),
            top: 25,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GithubConfig {
    pub base_url: String,
    pub owner: String,
    pub repo: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com/".to_owned(),
            owner: "Microsoft".to_owned(),
            repo: "vscode".to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PageConfig {
    pub title: String,

    /// Id of the element the status is rendered into
    pub mount_id: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Build status".to_owned(),
            mount_id: "main".to_owned(),
        }
    }
}
