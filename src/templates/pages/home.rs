// templates/pages/home.rs

use crate::content::Content;
use crate::domain::{Carousel, ProjectView};
use crate::templates::{desktop_layout, sections};
use maud::{html, Markup};

/// Per-request view state for the single page.
pub struct HomeVm {
    pub projects: ProjectView,
    pub designs_expanded: bool,
    pub carousel: Carousel,
    pub contact: sections::ContactView,
}

impl HomeVm {
    pub fn new(content: &Content) -> Self {
        Self {
            projects: ProjectView::default(),
            designs_expanded: false,
            carousel: Carousel::new(content.testimonials.len(), 0),
            contact: sections::ContactView::Blank,
        }
    }
}

pub fn home_page(content: &Content, vm: &HomeVm) -> Markup {
    let title = if content.site.role.is_empty() {
        content.site.name.clone()
    } else {
        format!("{} · {}", content.site.name, content.site.role)
    };

    desktop_layout(
        &title,
        &content.site,
        html! {
            (sections::hero_section(&content.site))
            (sections::about_section(&content.about))
            (sections::skills_section(&content.skills))
            (sections::projects_section(content, &vm.projects))
            (sections::designs_section(&content.designs, vm.designs_expanded))
            (sections::github_section())
            (sections::ml_section(&content.ml_projects))
            (sections::resume_section(&content.experience, &content.education))
            (sections::testimonials_section(&content.testimonials, vm.carousel))
            (sections::contact_section(&content.site, &vm.contact))
        },
    )
}
