pub mod errors;
pub mod html;
pub mod json;

pub use crate::errors::ResultResp;
pub use errors::error_response;

// Normal HTML response
pub use html::{fragment_response, html_response, text_response};
pub use json::json_response;
