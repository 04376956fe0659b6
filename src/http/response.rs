//! HTTP response building module
//!
//! Every response carries its own framing (`Content-Length`) and closes the
//! connection; nothing is reused across requests.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::request::version_label;

/// Body sent for paths that do not name a regular file
pub const NOT_FOUND_BODY: &str = "<html><body>404 Not Found :(</body></html>";

const BAD_REQUEST_BODY: &str = "<html><body>400 Bad Request</body></html>";
const INTERNAL_ERROR_BODY: &str = "<html><body>500 Internal Server Error</body></html>";
const HTML: &str = "text/html; charset=utf-8";

/// One response, built fresh per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Bytes,
}

impl FileResponse {
    /// Header block shared by the wire form and the diagnostic dump
    fn headers(&self, server_name: &str) -> [(&'static str, String); 4] {
        [
            ("content-type", self.content_type.to_string()),
            ("content-length", self.body.len().to_string()),
            ("connection", "close".to_string()),
            ("server", server_name.to_string()),
        ]
    }

    /// `HTTP/1.1 200 OK` style status line, without the trailing CRLF
    pub fn status_line(&self) -> String {
        format!(
            "HTTP/{} {} {}",
            version_label(hyper::Version::HTTP_11),
            self.status.as_u16(),
            self.status.canonical_reason().unwrap_or("")
        )
    }

    /// Serialize status line, headers and body as they go out on the wire
    pub fn to_wire_bytes(&self, server_name: &str) -> Vec<u8> {
        let mut head = self.status_line();
        head.push_str("\r\n");
        for (name, value) in self.headers(server_name) {
            head.push_str(name);
            head.push_str(": ");
            head.push_str(&value);
            head.push_str("\r\n");
        }
        head.push_str("\r\n");

        let mut wire = head.into_bytes();
        wire.extend_from_slice(&self.body);
        wire
    }

    /// Convert into a hyper response for the connection
    pub fn into_hyper(self, server_name: &str) -> Response<Full<Bytes>> {
        let mut builder = Response::builder().status(self.status);
        for (name, value) in self.headers(server_name) {
            builder = builder.header(name, value);
        }

        builder.body(Full::new(self.body)).unwrap_or_else(|e| {
            log_build_error(self.status, &e);
            let mut fallback = Response::new(Full::new(Bytes::from_static(
                INTERNAL_ERROR_BODY.as_bytes(),
            )));
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
    }
}

/// Build 200 OK response carrying the whole file
pub fn build_file_response(content: Vec<u8>, content_type: &'static str) -> FileResponse {
    FileResponse {
        status: StatusCode::OK,
        content_type,
        body: Bytes::from(content),
    }
}

/// Build 404 Not Found response
pub fn build_404_response() -> FileResponse {
    fixed(StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

/// Build 400 Bad Request response
pub fn build_400_response() -> FileResponse {
    fixed(StatusCode::BAD_REQUEST, BAD_REQUEST_BODY)
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> FileResponse {
    fixed(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY)
}

fn fixed(status: StatusCode, body: &'static str) -> FileResponse {
    FileResponse {
        status,
        content_type: HTML,
        body: Bytes::from_static(body.as_bytes()),
    }
}

fn log_build_error(status: StatusCode, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::header::{CONNECTION, CONTENT_LENGTH, CONTENT_TYPE, SERVER};

    #[test]
    fn test_not_found_body() {
        let resp = build_404_response();
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert_eq!(&resp.body[..], NOT_FOUND_BODY.as_bytes());
        assert_eq!(resp.status_line(), "HTTP/1.1 404 Not Found");
    }

    #[test]
    fn test_wire_format() {
        let resp = build_file_response(b"hi".to_vec(), "text/plain; charset=utf-8");
        let wire = resp.to_wire_bytes("tinyserve");
        let text = String::from_utf8(wire).unwrap();
        assert_eq!(
            text,
            "HTTP/1.1 200 OK\r\n\
             content-type: text/plain; charset=utf-8\r\n\
             content-length: 2\r\n\
             connection: close\r\n\
             server: tinyserve\r\n\
             \r\n\
             hi"
        );
    }

    #[test]
    fn test_wire_keeps_binary_body() {
        let body = vec![0u8, 159, 146, 150, 255];
        let wire = build_file_response(body.clone(), "application/octet-stream")
            .to_wire_bytes("t");
        assert!(wire.ends_with(&body));
    }

    #[test]
    fn test_into_hyper() {
        let resp = build_file_response(b"abc".to_vec(), "text/css; charset=utf-8")
            .into_hyper("tinyserve");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_LENGTH], "3");
        assert_eq!(resp.headers()[CONNECTION], "close");
        assert_eq!(resp.headers()[SERVER], "tinyserve");
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/css; charset=utf-8");
    }

    #[test]
    fn test_error_responses() {
        assert_eq!(build_400_response().status, StatusCode::BAD_REQUEST);
        assert_eq!(
            build_500_response().status_line(),
            "HTTP/1.1 500 Internal Server Error"
        );
    }
}
