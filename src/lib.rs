pub mod builds;
mod config;
pub mod dom;
mod error;
mod page;
mod render;
pub mod resolver;
mod service;
#[cfg(test)]
mod test_server;

pub use config::{BuildsConfig, Config, GithubConfig, PageConfig};
pub use error::{Error, Result};
pub use page::Page;
pub use render::render;
pub use resolver::{resolve, Status};
pub use service::{run_serve, ServeOptions, Service};
