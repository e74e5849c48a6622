use crate::config::Config;
use crate::content::Content;
use crate::github::{GithubClient, GithubSource};
use anyhow::Context;

/// Shared, read-only state handed to every request.
pub struct App {
    pub config: Config,
    pub content: Content,
    pub github: Box<dyn GithubSource>,
}

impl App {
    pub fn new(config: Config, content: Content, github: Box<dyn GithubSource>) -> Self {
        Self {
            config,
            content,
            github,
        }
    }

    /// Build the production app: content from disk or the embedded file, and
    /// a live GitHub client.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let content = match &config.content_path {
            Some(path) => Content::from_path(path)
                .with_context(|| format!("loading content from {}", path.display()))?,
            None => Content::embedded().context("loading embedded content")?,
        };

        let github = GithubClient::new(config.github_api_base.clone(), config.github_timeout)
            .context("building GitHub client")?;

        Ok(Self::new(config, content, Box::new(github)))
    }
}
