//! Types for the subset of Github's v3 API used to inspect commit ranges
//! https://developer.github.com/v3/

pub mod client;
mod commit;
mod common;
mod user;

pub use client::Client;
pub use commit::*;
pub use common::*;
pub use user::*;
