//! Request model
//!
//! Only the request line matters for serving: method, target and version.
//! Headers are parsed by hyper and otherwise ignored.

use hyper::{Method, Uri, Version};
use percent_encoding::percent_decode_str;
use thiserror::Error;

/// Problems with a request target that are the client's fault
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("request target '{0}' is not valid UTF-8 once decoded")]
    NotUtf8(String),
}

/// A parsed request line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRequest {
    pub method: Method,
    /// Percent-decoded path, query string excluded
    pub target: String,
    pub version: Version,
}

impl FileRequest {
    pub fn new(method: Method, uri: &Uri, version: Version) -> Result<Self, TargetError> {
        Ok(Self {
            method,
            target: decode_target(raw_target(uri))?,
            version,
        })
    }

    /// Path relative to the serving root
    pub fn file_id(&self) -> &str {
        strip_leading_separator(&self.target)
    }
}

/// Path part of the target as sent
///
/// A bare `index.html` target parses as authority-form; treat it as a path.
/// Bare targets that are not valid authorities (`a/b`) never get here: hyper
/// rejects them with 400.
fn raw_target(uri: &Uri) -> &str {
    match (uri.scheme(), uri.authority()) {
        (None, Some(authority)) if uri.path().is_empty() => authority.as_str(),
        _ => uri.path(),
    }
}

/// Remove exactly one leading `/`
///
/// `"/a/b"` and `"a/b"` both map to `"a/b"`.
pub fn strip_leading_separator(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

pub fn decode_target(raw: &str) -> Result<String, TargetError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| TargetError::NotUtf8(raw.to_string()))
}

/// Version number as it appears after `HTTP/` on the wire
pub fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
