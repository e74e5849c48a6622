pub mod carousel;
pub mod contact;
pub mod designs;
pub mod ml;
pub mod projects;

pub use carousel::{Carousel, CAROUSEL_INTERVAL_SECS};
pub use contact::{ContactForm, FieldError};
pub use designs::{has_hidden_designs, visible_designs};
pub use ml::{split_featured, truncate_tags, COMPACT_TAG_LIMIT};
pub use projects::{filter_projects, has_more_projects, ProjectFilter, ProjectView};
