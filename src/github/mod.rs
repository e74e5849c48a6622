mod client;
mod github_error;
mod models;
mod panel;
mod stats;

pub use client::{GithubClient, GithubSource};
pub use github_error::GithubError;
pub use models::{Profile, Repo};
pub use panel::{load_panel, load_summary, PanelData};
pub use stats::RepoStats;
