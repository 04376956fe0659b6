//! Request handler module
//!
//! Serves exactly one request per connection from the static file root.

pub mod request;
pub mod static_files;

// Re-export main entry point
pub use request::handle_request;
