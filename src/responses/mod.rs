pub mod errors;
pub mod html;
pub mod static_files;

pub use crate::errors::ResultResp;
pub use errors::error_to_response;
pub use html::{html_response, redirect_response, text_response};
pub use static_files::static_file_response;
