pub mod about;
pub mod contact;
pub mod designs;
pub mod github;
pub mod hero;
pub mod ml;
pub mod projects;
pub mod resume;
pub mod skills;
pub mod testimonials;

pub use about::{about_section, github_summary, github_summary_fallback};
pub use contact::{contact_form, contact_section, ContactView};
pub use designs::{designs_body, designs_section};
pub use github::{github_fallback, github_panel, github_section};
pub use hero::hero_section;
pub use ml::ml_section;
pub use projects::{projects_body, projects_section};
pub use resume::resume_section;
pub use skills::skills_section;
pub use testimonials::{testimonial_carousel, testimonials_section};
