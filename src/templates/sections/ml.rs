use crate::content::MlProject;
use crate::domain::{split_featured, truncate_tags, COMPACT_TAG_LIMIT};
use crate::templates::components::{external_link, section, tag_list};
use maud::{html, Markup};

/// Featured models as full cards, the rest as a compact grid.
pub fn ml_section(projects: &[MlProject]) -> Markup {
    let (featured, others) = split_featured(projects);

    section(
        "ml",
        "Machine learning",
        html! {
            @if projects.is_empty() {
                p class="empty-state" { "Machine learning work coming soon." }
            }

            @if !featured.is_empty() {
                div class="ml-featured" {
                    @for project in &featured {
                        (featured_card(project))
                    }
                }
            }

            @if !others.is_empty() {
                div class="ml-others" {
                    h3 { "Other machine learning projects" }
                    div class="ml-grid" {
                        @for project in &others {
                            (compact_card(project))
                        }
                    }
                }
            }
        },
    )
}

fn featured_card(project: &MlProject) -> Markup {
    html! {
        article class="ml-card" {
            figure {
                img src=(project.image_url) alt=(project.title) loading="lazy";
                @if !project.accuracy.is_empty() {
                    span class="accuracy" { (project.accuracy) }
                }
            }
            h3 { (project.title) }
            p { (project.description) }
            @if !project.technologies.is_empty() {
                h4 class="muted" { "Technologies used" }
                (tag_list(&project.technologies))
            }
            @if let Some(url) = &project.demo_url {
                a class="btn btn-outline" href=(url) target="_blank" rel="noopener noreferrer" {
                    "View demo"
                }
            }
        }
    }
}

fn compact_card(project: &MlProject) -> Markup {
    let (shown, hidden) = truncate_tags(&project.technologies, COMPACT_TAG_LIMIT);

    html! {
        article class="ml-item" {
            h4 { (project.title) }
            @if !project.accuracy.is_empty() {
                span class="accuracy" { (project.accuracy) " accuracy" }
            }
            p class="muted" { (project.description) }
            @if !shown.is_empty() {
                ul class="tags" {
                    @for tag in shown {
                        li class="tag" { (tag) }
                    }
                    @if hidden > 0 {
                        li class="tag more" { "+" (hidden) " more" }
                    }
                }
            }
            @if let Some(url) = &project.demo_url {
                (external_link("View project", url))
            }
        }
    }
}
