//! Serving over a real socket.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use faultline_core::error::FaultlineError;
use faultline_server::app_state::AppState;
use faultline_server::config::ServiceConfig;
use faultline_server::server::{Server, ServerState};
use faultline_server::services;

async fn raw_get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let req = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(req.as_bytes()).await.unwrap();
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    String::from_utf8(buf).unwrap()
}

#[tokio::test]
async fn serves_http_over_tcp() {
    let cfg = ServiceConfig {
        fault_injection: false,
        ..ServiceConfig::default()
    };
    let state = AppState::new(cfg).unwrap();
    let server = Arc::new(Server::new(services::builtin_routes(&state).unwrap()));
    assert_eq!(server.state(), ServerState::Stopped);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let running = Arc::clone(&server);
    tokio::spawn(async move { running.serve_listener(listener).await });

    let resp = raw_get(addr, "/").await;
    assert!(resp.starts_with("HTTP/1.1 200 OK\r\n"), "resp: {resp}");
    assert!(resp.ends_with("Hello World"));
    assert_eq!(server.state(), ServerState::Running);

    let resp = raw_get(addr, "/missing").await;
    assert!(resp.starts_with("HTTP/1.1 404 Not Found\r\n"), "resp: {resp}");

    let resp = raw_get(addr, "/metrics").await;
    assert!(resp.contains("content-type: text/plain; version=0.0.4; charset=utf-8\r\n"), "resp: {resp}");
    assert!(resp.contains("\nweb_requests_total 1\n"), "resp: {resp}");
}

#[tokio::test]
async fn bind_failure_is_reported() {
    let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = taken.local_addr().unwrap();

    let state = AppState::new(ServiceConfig::default()).unwrap();
    let server = Server::new(services::builtin_routes(&state).unwrap());

    let err = server.serve(addr).await.expect_err("port is taken");
    assert!(matches!(err, FaultlineError::Bind(_)));
    assert_eq!(server.state(), ServerState::Stopped);
}
