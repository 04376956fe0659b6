// The response dump, end to end through the request handler
//
// Kept in its own test binary: it installs the process-wide log writer.

use std::sync::Arc;

use hyper::{Request, StatusCode};
use tinyserve::config::{AppState, Config};
use tinyserve::handler::handle_request;
use tinyserve::http::NOT_FOUND_BODY;
use tinyserve::logger;

#[tokio::test]
async fn test_dump_carries_status_headers_and_body() {
    let dir = std::env::temp_dir().join(format!("tinyserve-dump-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let root = dir.join("root");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("index.html"), b"<p>dumped</p>").unwrap();
    let log_path = dir.join("info.log");

    let mut cfg = Config::defaults().unwrap();
    cfg.server.root = root.display().to_string();
    cfg.logging.access_log = false;
    cfg.logging.dump_responses = true;
    cfg.logging.access_log_file = Some(log_path.display().to_string());
    cfg.http.server_name = "dump-test".to_string();
    logger::init(&cfg).unwrap();
    let state = Arc::new(AppState::new(cfg).unwrap());
    let peer = "127.0.0.1:40000".parse().unwrap();

    let req = Request::get("/index.html").body(()).unwrap();
    let resp = handle_request(req, Arc::clone(&state), peer).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let req = Request::get("/missing.html").body(()).unwrap();
    let resp = handle_request(req, Arc::clone(&state), peer).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let log = std::fs::read_to_string(&log_path).unwrap();
    let found = "[Response]\nHTTP/1.1 200 OK\r\n\
                 content-type: text/html; charset=utf-8\r\n\
                 content-length: 13\r\n\
                 connection: close\r\n\
                 server: dump-test\r\n\
                 \r\n\
                 <p>dumped</p>";
    assert!(log.contains(found), "no dump of the 200 response in:\n{log}");

    let missing = format!(
        "[Response]\nHTTP/1.1 404 Not Found\r\n\
         content-type: text/html; charset=utf-8\r\n\
         content-length: {}\r\n\
         connection: close\r\n\
         server: dump-test\r\n\
         \r\n\
         {NOT_FOUND_BODY}",
        NOT_FOUND_BODY.len()
    );
    assert!(log.contains(&missing), "no dump of the 404 response in:\n{log}");

    let _ = std::fs::remove_dir_all(&dir);
}
