//! Per-request entry point
//!
//! Turns one parsed request into one response: look the target up under the
//! serving root, answer with the file or a 404, and log what was sent.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderName, REFERER, USER_AGENT};
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppState;
use crate::handler::static_files::{self, Lookup};
use crate::http::{self, request::version_label, FileRequest, FileResponse};
use crate::logger::{self, AccessLogEntry};

/// Hyper service entry point
///
/// Never fails: every problem with the request maps to an HTTP status.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let server_name = state.config.http.server_name.as_str();

    let parsed = FileRequest::new(req.method().clone(), req.uri(), req.version());
    let (response, target) = match parsed {
        Ok(request) => {
            logger::log_request(&request);
            (serve(&request, &state).await, Some(request.target))
        }
        Err(e) => {
            logger::log_warning(&format!("Rejected request from {peer_addr}: {e}"));
            (http::build_400_response(), None)
        }
    };

    if state.config.logging.dump_responses {
        logger::log_response_dump(&response.to_wire_bytes(server_name));
    }

    if state.config.logging.access_log {
        let path = target.as_deref().unwrap_or_else(|| req.uri().path());
        let entry = access_entry(&req, path, peer_addr, &response, started);
        logger::log_access(&entry, state.config.logging.access_log_format);
    }

    Ok(response.into_hyper(server_name))
}

/// Build the response for an already parsed request
pub async fn serve(request: &FileRequest, state: &AppState) -> FileResponse {
    match static_files::lookup(&state.root, request.file_id()).await {
        Ok(Lookup::Found(content, content_type)) => {
            http::build_file_response(content, content_type)
        }
        Ok(Lookup::Missing) => http::build_404_response(),
        Err(e) => {
            logger::log_error(&format!("Failed to read '{}': {e}", request.file_id()));
            http::build_500_response()
        }
    }
}

/// `path` is the decoded target when the request parsed, the raw path otherwise
fn access_entry<B>(
    req: &Request<B>,
    path: &str,
    peer_addr: SocketAddr,
    response: &FileResponse,
    started: Instant,
) -> AccessLogEntry {
    let header = |name: HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        path.to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.status = response.status.as_u16();
    entry.body_bytes = response.body.len();
    entry.referer = header(REFERER);
    entry.user_agent = header(USER_AGENT);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}
