//! HTTP protocol layer module
//!
//! Request-line model and response framing, decoupled from file lookup.

pub mod mime;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use request::{strip_leading_separator, FileRequest, TargetError};
pub use response::{
    build_400_response, build_404_response, build_500_response, build_file_response,
    FileResponse, NOT_FOUND_BODY,
};
