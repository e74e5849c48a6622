use crate::github::{GithubError, GithubSource, Profile, Repo, RepoStats};

/// Everything the external profile panel renders.
#[derive(Debug, Clone)]
pub struct PanelData {
    pub profile: Profile,
    pub repos: Vec<Repo>,
    pub stats: RepoStats,
}

/// Fetch the profile, then the recent repositories. The second call is only
/// made once the first succeeds. Aggregates cover every returned repo, forks
/// included.
pub fn load_panel(
    source: &dyn GithubSource,
    user: &str,
    limit: u32,
) -> Result<PanelData, GithubError> {
    let profile = source.fetch_profile(user)?;

    let repos = source.fetch_recent_repos(user, limit)?;
    let stats = RepoStats::from_repos(&repos);

    Ok(PanelData {
        profile,
        repos,
        stats,
    })
}

/// Profile only, for the short summary in the about section.
pub fn load_summary(source: &dyn GithubSource, user: &str) -> Result<Profile, GithubError> {
    source.fetch_profile(user)
}
