use crate::github::{PanelData, Repo};
use crate::templates::components::{button_link, external_link, section};
use maud::{html, Markup};

pub const GITHUB_ERROR_MESSAGE: &str = "Unable to load GitHub data right now.";

/// Placeholder that loads the panel once it scrolls into view.
pub fn github_section() -> Markup {
    section(
        "github",
        "Open source",
        html! {
            div
                id="github-panel"
                class="github-panel loading"
                hx-get="/github"
                hx-trigger="revealed"
                hx-swap="outerHTML"
            {
                p class="muted" { "Loading GitHub activity…" }
            }
        },
    )
}

pub fn github_panel(data: &PanelData) -> Markup {
    let profile = &data.profile;
    let stats = &data.stats;

    html! {
        div id="github-panel" class="github-panel" {
            div class="github-profile" {
                img class="avatar-md" src=(profile.avatar_url) alt=(format!("{} on GitHub", profile.login));
                div {
                    h3 { (profile.display_name()) }
                    p class="muted" { "@" (profile.login) }
                    @if let Some(bio) = profile.bio.as_deref().filter(|b| !b.trim().is_empty()) {
                        p { (bio) }
                    }
                    @if let Some(location) = profile.location.as_deref().filter(|l| !l.trim().is_empty()) {
                        p class="muted" { (location) }
                    }
                }
            }

            dl class="github-stats" {
                div { dt { "Public repos" } dd { (profile.public_repos) } }
                div { dt { "Followers" } dd { (profile.followers) } }
                div { dt { "Total stars" } dd data-stat="stars" { (stats.total_stars) } }
                div { dt { "Total forks" } dd data-stat="forks" { (stats.total_forks) } }
                div { dt { "Watchers" } dd data-stat="watchers" { (stats.total_watchers) } }
            }

            @if !stats.languages.is_empty() {
                div class="github-languages" {
                    h4 { "Top languages" }
                    ul {
                        @for share in stats.top_languages() {
                            li data-language=(share.language) {
                                span { (share.language) }
                                span class="muted" { (share.count) " · " (stats.percent(share)) "%" }
                            }
                        }
                    }
                }
            }

            @if data.repos.is_empty() {
                p class="empty-state" { "No public repositories yet." }
            } @else {
                div class="repo-grid" {
                    @for repo in &data.repos {
                        (repo_card(repo))
                    }
                }
            }

            div class="center" {
                (button_link("View full profile", &profile.html_url, false))
            }
        }
    }
}

fn repo_card(repo: &Repo) -> Markup {
    html! {
        article class="repo-card" {
            h4 {
                (external_link(&repo.name, &repo.html_url))
                @if repo.fork {
                    " " span class="tag" { "fork" }
                }
            }
            @if let Some(description) = &repo.description {
                p { (description) }
            }
            ul class="repo-meta muted" {
                @if let Some(language) = &repo.language {
                    li { (language) }
                }
                li title="Stars" { "★ " (repo.stargazers_count) }
                li title="Forks" { "⑂ " (repo.forks_count) }
                li title="Watchers" { "◉ " (repo.watchers_count) }
                li { "Updated " (repo.updated_label()) }
            }
            @if let Some(url) = repo.live_demo_url() {
                p class="repo-demo" { (external_link("Live demo", url)) }
            }
        }
    }
}

pub fn github_fallback(profile_url: &str) -> Markup {
    html! {
        div id="github-panel" class="github-panel error" {
            p class="error-message" { (GITHUB_ERROR_MESSAGE) }
            (button_link("Visit my GitHub profile", profile_url, true))
        }
    }
}
