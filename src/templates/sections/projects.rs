use crate::content::{Content, Project};
use crate::domain::{filter_projects, has_more_projects, ProjectFilter, ProjectView};
use crate::templates::components::{external_link, section, tag_list};
use maud::{html, Markup};

pub fn projects_section(content: &Content, view: &ProjectView) -> Markup {
    section("projects", "Projects", projects_body(content, view))
}

/// Filter bar, grid and show-more toggle. Returned on its own for `/projects` swaps.
pub fn projects_body(content: &Content, view: &ProjectView) -> Markup {
    let projects = filter_projects(&content.projects, view);
    let filters = content.project_filters();

    html! {
        div id="projects-body" {
            nav class="filters" aria-label="Filter projects by technology" {
                (filter_button("All", &ProjectFilter::All, view.filter == ProjectFilter::All))
                @for tech in &filters {
                    (filter_button(
                        tech,
                        &ProjectFilter::Technology(tech.clone()),
                        view.filter.is_active(tech),
                    ))
                }
            }

            @if projects.is_empty() {
                p class="empty-state" { "No projects use this technology yet." }
            } @else {
                div class="project-grid" {
                    @for project in projects {
                        (project_card(project))
                    }
                }
            }

            @if has_more_projects(&content.projects, view) {
                (show_more_button(view.expanded))
            }
        }
    }
}

fn filter_button(label: &str, target: &ProjectFilter, active: bool) -> Markup {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("tech", target.as_query())
        .finish();
    let class = if active { "filter active" } else { "filter" };

    html! {
        a
            class=(class)
            href=(format!("/?{query}#projects"))
            hx-get=(format!("/projects?{query}"))
            hx-target="#projects-body"
            hx-swap="outerHTML"
            aria-pressed=(if active { "true" } else { "false" })
        {
            (label)
        }
    }
}

fn show_more_button(expanded: bool) -> Markup {
    let (label, fallback, next) = if expanded {
        ("Show less", "featured", "false")
    } else {
        ("Show more", "all", "true")
    };

    html! {
        div class="center" {
            a
                class="btn btn-outline show-more"
                href=(format!("/?projects={fallback}#projects"))
                hx-get=(format!("/projects?expanded={next}"))
                hx-target="#projects-body"
                hx-swap="outerHTML"
                aria-expanded=(if expanded { "true" } else { "false" })
            {
                (label)
            }
        }
    }
}

fn project_card(project: &Project) -> Markup {
    let class = if project.featured {
        "project-card featured"
    } else {
        "project-card"
    };

    html! {
        article class=(class) {
            img src=(project.image_url) alt=(project.title) loading="lazy";
            div class="project-body" {
                h3 { (project.title) }
                p { (project.description) }
                (tag_list(&project.technologies))
                div class="project-links" {
                    @if let Some(url) = &project.source_url {
                        (external_link("Code", url))
                    }
                    @if let Some(url) = &project.live_url {
                        (external_link("Live demo", url))
                    }
                }
            }
        }
    }
}
