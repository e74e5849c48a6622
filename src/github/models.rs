use chrono::{DateTime, Utc};
use serde::Deserialize;

// Only the fields the panel renders are projected; everything else in the
// API response is ignored.

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
}

impl Profile {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.login)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    pub name: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub watchers_count: u32,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub fork: bool,
    pub updated_at: DateTime<Utc>,
}

impl Repo {
    /// The project's deployed site, if it has one. GitHub sends `""` as often as `null`.
    pub fn live_demo_url(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|h| !h.trim().is_empty())
    }

    pub fn updated_label(&self) -> String {
        self.updated_at.format("%b %-d, %Y").to_string()
    }
}
