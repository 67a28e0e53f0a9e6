//! Git repository discovery and access.

mod locate;
mod repository;

pub use locate::{find_dot_git, DOT_GIT};
pub use repository::{open_repository, GitRepo};
