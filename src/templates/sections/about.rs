use crate::content::About;
use crate::github::Profile;
use crate::templates::components::{external_link, section};
use maud::{html, Markup};

pub fn about_section(about: &About) -> Markup {
    section(
        "about",
        "About me",
        html! {
            div class="about-grid" {
                div class="about-text" {
                    @if !about.headline.is_empty() {
                        h3 { (about.headline) }
                    }
                    @for paragraph in &about.paragraphs {
                        p { (paragraph) }
                    }

                    // Filled in once the section scrolls into view.
                    div
                        id="github-summary"
                        class="github-summary muted"
                        hx-get="/github/summary"
                        hx-trigger="revealed"
                        hx-swap="outerHTML"
                    {
                        "Loading open-source activity…"
                    }
                }

                @if !about.highlights.is_empty() {
                    dl class="highlights" {
                        @for h in &about.highlights {
                            div class="highlight" {
                                dt { (h.value) }
                                dd { (h.label) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn github_summary(profile: &Profile) -> Markup {
    html! {
        p id="github-summary" class="github-summary" {
            "On GitHub: "
            strong { (profile.public_repos) } " public repos · "
            strong { (profile.followers) } " followers · "
            strong { (profile.following) } " following"
        }
    }
}

pub fn github_summary_fallback(profile_url: &str) -> Markup {
    html! {
        p id="github-summary" class="github-summary muted" {
            "Find my open-source work on "
            (external_link("GitHub", profile_url))
            "."
        }
    }
}
