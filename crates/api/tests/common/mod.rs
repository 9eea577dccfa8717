#![allow(dead_code)]

use std::io::Write;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tower::ServiceExt;

use osint_api::config::ServerConfig;
use osint_api::router::build_app_router;
use osint_api::state::AppState;
use osint_core::process::ToolSpec;
use osint_core::lookup::WhoisConfig;

/// Build a test `ServerConfig` with safe defaults.
///
/// Both tools point at a program that does not exist and WHOIS points at a
/// closed local port, so a test only reaches the tool it configures.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        sherlock: missing_tool("sherlock"),
        sherlock_site_timeout_secs: 10,
        inspector: missing_tool("inspector"),
        whois: WhoisConfig {
            server: Some(format!("127.0.0.1:{}", closed_port())),
            timeout: Duration::from_secs(2),
            deadline: Duration::from_secs(5),
            ..WhoisConfig::default()
        },
    }
}

/// Build the full application router with all middleware layers.
pub fn build_test_app(config: ServerConfig) -> Router {
    let state = AppState::new(config.clone()).expect("build app state");
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fake tools
// ---------------------------------------------------------------------------

/// A tool whose program cannot be spawned.
pub fn missing_tool(name: &str) -> ToolSpec {
    ToolSpec {
        name: name.to_string(),
        program: "/nonexistent/osint-test-tool".to_string(),
        args_prefix: Vec::new(),
        working_dir: None,
        timeout: Duration::from_secs(5),
    }
}

/// A tool that runs `body` as a bash script.
///
/// The returned file must outlive the requests that use the tool. The
/// script receives the handler's arguments as `$1`, `$2`, ...
pub fn script_tool(name: &str, body: &str) -> (ToolSpec, tempfile::NamedTempFile) {
    let mut script = tempfile::Builder::new()
        .suffix(".sh")
        .tempfile()
        .expect("create temp script");
    writeln!(script, "#!/bin/bash").expect("write shebang");
    write!(script, "{body}").expect("write script body");

    let spec = ToolSpec {
        name: name.to_string(),
        program: "bash".to_string(),
        args_prefix: vec![script.path().to_str().expect("utf-8 path").to_string()],
        working_dir: None,
        timeout: Duration::from_secs(5),
    };
    (spec, script)
}

// ---------------------------------------------------------------------------
// Fake WHOIS server
// ---------------------------------------------------------------------------

/// Start a WHOIS server on an ephemeral port that answers every query with
/// `response`. Returns the port.
pub async fn fake_whois_server(response: &str) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let response = response.to_string();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let (read_half, mut write_half) = socket.split();
            let mut line = String::new();
            BufReader::new(read_half).read_line(&mut line).await.unwrap();
            write_half.write_all(response.as_bytes()).await.unwrap();
            write_half.shutdown().await.unwrap();
        }
    });

    port
}

/// A WHOIS server that accepts connections and never answers. Returns the port.
pub async fn silent_whois_server() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    port
}

/// A port nothing listens on.
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, &body.to_string()).await
}

/// POST `body` verbatim with a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
