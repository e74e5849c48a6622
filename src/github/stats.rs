use crate::github::Repo;
use std::collections::HashMap;

/// Languages listed in the panel; the rest still count toward percentages.
pub const TOP_LANGUAGE_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageShare {
    pub language: String,
    pub count: usize,
}

/// Aggregates shown above the repository list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoStats {
    pub repo_count: usize,
    pub total_stars: u64,
    pub total_forks: u64,
    pub total_watchers: u64,
    /// Most used first; ties broken alphabetically. Repos without a language are skipped.
    pub languages: Vec<LanguageShare>,
}

impl RepoStats {
    pub fn from_repos(repos: &[Repo]) -> Self {
        let total_stars = repos.iter().map(|r| u64::from(r.stargazers_count)).sum();
        let total_forks = repos.iter().map(|r| u64::from(r.forks_count)).sum();
        let total_watchers = repos.iter().map(|r| u64::from(r.watchers_count)).sum();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for language in repos.iter().filter_map(|r| r.language.as_deref()) {
            *counts.entry(language).or_default() += 1;
        }

        let mut languages: Vec<LanguageShare> = counts
            .into_iter()
            .map(|(language, count)| LanguageShare {
                language: language.to_string(),
                count,
            })
            .collect();
        languages.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.language.cmp(&b.language)));

        Self {
            repo_count: repos.len(),
            total_stars,
            total_forks,
            total_watchers,
            languages,
        }
    }

    pub fn top_languages(&self) -> &[LanguageShare] {
        &self.languages[..self.languages.len().min(TOP_LANGUAGE_LIMIT)]
    }

    /// `share` as a whole percentage of all language-tagged repos.
    pub fn percent(&self, share: &LanguageShare) -> usize {
        let tagged: usize = self.languages.iter().map(|l| l.count).sum();
        if tagged == 0 {
            return 0;
        }
        share.count * 100 / tagged
    }
}
