mod content_error;
mod models;

pub use content_error::ContentError;
pub use models::{
    About, Content, Design, Education, Experience, MlProject, Project, Site, SkillGroup,
    SocialLink, Testimonial,
};
