// src/domain/projects.rs

use crate::content::Project;

/// Which technology the grid is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Technology(String),
}

impl ProjectFilter {
    /// `None`, blank and `all` (any case) mean no filtering.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => ProjectFilter::All,
            Some(v) if v.eq_ignore_ascii_case("all") => ProjectFilter::All,
            Some(v) => ProjectFilter::Technology(v.to_string()),
        }
    }

    pub fn as_query(&self) -> &str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Technology(t) => t,
        }
    }

    pub fn is_active(&self, tech: &str) -> bool {
        match self {
            ProjectFilter::All => false,
            ProjectFilter::Technology(t) => t.eq_ignore_ascii_case(tech),
        }
    }

    fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Technology(t) => {
                project.technologies.iter().any(|x| x.eq_ignore_ascii_case(t))
            }
        }
    }
}

/// Filter plus the "show more" toggle. The toggle only widens `All`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectView {
    pub filter: ProjectFilter,
    pub expanded: bool,
}

impl ProjectView {
    pub fn new(filter: ProjectFilter, expanded: bool) -> Self {
        Self { filter, expanded }
    }
}

/// Projects the grid shows, in content order.
///
/// `All` starts with the featured projects only; a content file that marks
/// nothing as featured shows everything.
pub fn filter_projects<'a>(projects: &'a [Project], view: &ProjectView) -> Vec<&'a Project> {
    match view.filter {
        ProjectFilter::All if !view.expanded && projects.iter().any(|p| p.featured) => {
            projects.iter().filter(|p| p.featured).collect()
        }
        ref filter => projects.iter().filter(|p| filter.matches(p)).collect(),
    }
}

/// Whether the "show more" toggle has anything to reveal.
pub fn has_more_projects(projects: &[Project], view: &ProjectView) -> bool {
    view.filter == ProjectFilter::All
        && projects.iter().any(|p| p.featured)
        && projects.iter().any(|p| !p.featured)
}
