use crate::content::ContentError;
use serde::{Deserialize, Deserializer};
use std::path::Path;

// content
//  ├── project_filters[] (technology filter labels, optional)
//  ├── site          (hero, contact details, socials)
//  ├── about
//  ├── skills[]      (grouped by category)
//  ├── projects[]    (featured ones shown first)
//  ├── designs[]
//  ├── ml_projects[]
//  ├── experience[]  ┐
//  ├── education[]   ┘ resume
//  └── testimonials[]

const EMBEDDED: &str = include_str!("../../content/portfolio.toml");

pub const PLACEHOLDER_TITLE: &str = "Untitled";
pub const PLACEHOLDER_TEXT: &str = "No description provided.";
pub const PLACEHOLDER_IMAGE: &str = "/static/img/placeholder.svg";

fn untitled() -> String {
    PLACEHOLDER_TITLE.to_string()
}

fn no_description() -> String {
    PLACEHOLDER_TEXT.to_string()
}

fn placeholder_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

fn uncategorised() -> String {
    "Other".to_string()
}

/// Any integer is accepted and clamped into 0..=100.
fn percent<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(0, 100) as u8)
}

fn default_resume_url() -> String {
    "/static/resume.pdf".to_string()
}

fn hash_link() -> String {
    "#".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Content {
    pub project_filters: Vec<String>,
    pub site: Site,
    pub about: About,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub designs: Vec<Design>,
    pub ml_projects: Vec<MlProject>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    #[serde(default = "untitled")]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default = "placeholder_image")]
    pub avatar_url: String,
    #[serde(default = "default_resume_url")]
    pub resume_url: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            name: untitled(),
            role: String::new(),
            tagline: String::new(),
            avatar_url: placeholder_image(),
            resume_url: default_resume_url(),
            email: String::new(),
            location: String::new(),
            socials: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    #[serde(default = "untitled")]
    pub label: String,
    #[serde(default = "hash_link")]
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct About {
    pub headline: String,
    pub paragraphs: Vec<String>,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Highlight {
    #[serde(default = "untitled")]
    pub label: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    #[serde(default = "uncategorised")]
    pub category: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    #[serde(default = "untitled")]
    pub name: String,
    /// Proficiency in percent, clamped to 0..=100 on load.
    #[serde(default, deserialize_with = "percent")]
    pub level: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    #[serde(default = "untitled")]
    pub title: String,
    #[serde(default = "no_description")]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default = "placeholder_image")]
    pub image_url: String,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MlProject {
    #[serde(default = "untitled")]
    pub title: String,
    #[serde(default = "no_description")]
    pub description: String,
    /// Free-form headline metric, e.g. "94.2%".
    #[serde(default)]
    pub accuracy: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default = "placeholder_image")]
    pub image_url: String,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Design {
    #[serde(default = "untitled")]
    pub title: String,
    #[serde(default = "no_description")]
    pub description: String,
    #[serde(default)]
    pub tool: String,
    #[serde(default = "placeholder_image")]
    pub image_url: String,
    #[serde(default = "hash_link")]
    pub link_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    #[serde(default = "untitled")]
    pub role: String,
    #[serde(default)]
    pub organisation: String,
    #[serde(default)]
    pub period: String,
    #[serde(default = "no_description")]
    pub summary: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    #[serde(default = "untitled")]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub period: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub quote: String,
    #[serde(default = "untitled")]
    pub author: String,
    #[serde(default)]
    pub role: String,
    #[serde(default = "placeholder_image")]
    pub avatar_url: String,
}

impl Content {
    /// The content file compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml_str(EMBEDDED)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ContentError> {
        let mut content: Content = toml::from_str(text)?;
        content.normalise();
        Ok(content)
    }

    fn normalise(&mut self) {
        for project in &mut self.projects {
            if project.title.trim().is_empty() {
                project.title = untitled();
            }
            if project.description.trim().is_empty() {
                project.description = no_description();
            }
            project.live_url = project.live_url.take().filter(|u| !u.trim().is_empty());
            project.source_url = project.source_url.take().filter(|u| !u.trim().is_empty());
        }

        for project in &mut self.ml_projects {
            if project.title.trim().is_empty() {
                project.title = untitled();
            }
            if project.description.trim().is_empty() {
                project.description = no_description();
            }
            project.demo_url = project.demo_url.take().filter(|u| !u.trim().is_empty());
        }

        self.project_filters.retain(|f| !f.trim().is_empty());
    }

    /// Labels for the technology filter bar: `project_filters` when given,
    /// otherwise every technology used by a project, in first-seen order.
    pub fn project_filters(&self) -> Vec<String> {
        if !self.project_filters.is_empty() {
            return self.project_filters.clone();
        }

        let mut seen: Vec<String> = Vec::new();
        for tech in self.projects.iter().flat_map(|p| &p.technologies) {
            if !seen.iter().any(|t| t.eq_ignore_ascii_case(tech)) {
                seen.push(tech.clone());
            }
        }
        seen
    }
}
