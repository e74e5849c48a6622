// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors raised while routing or building a response.
///
/// Upstream failures (GitHub) never reach this type; the panel turns them
/// into fallback markup instead.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::MethodNotAllowed => 405,
            ServerError::BadRequest(_) => 400,
            ServerError::Internal(_) => 500,
        }
    }

    /// Message shown to the visitor. Internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::NotFound => "The page you were looking for does not exist.".into(),
            ServerError::MethodNotAllowed => "That method is not allowed here.".into(),
            ServerError::BadRequest(msg) => msg.clone(),
            ServerError::Internal(_) => "Something went wrong on our side.".into(),
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
