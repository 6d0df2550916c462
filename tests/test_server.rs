//! End-to-end tests against a real listening socket.

mod common;

use std::net::SocketAddr;

use common::{RawResponse, config_for, site};
use fileserve::config::Config;
use fileserve::error::ServerError;
use fileserve::server::Listener;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn start(config: Config) -> SocketAddr {
    let socket = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let listener = Listener::from_tcp(socket, config);
    let addr = listener.local_addr().unwrap();
    tokio::spawn(listener.serve());
    addr
}

async fn get(addr: SocketAddr, request: &str) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    raw
}

#[tokio::test]
async fn test_scenario() {
    let dir = site();
    let addr = start(config_for(&dir)).await;

    let resp = RawResponse::parse(&get(addr, "GET /a.txt HTTP/1.1\r\n\r\n").await);
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.header("Content-Type"), Some("text/plain"));
    assert_eq!(resp.header("Content-Length"), Some("5"));
    assert_eq!(resp.body, b"hello");

    let resp = RawResponse::parse(&get(addr, "GET /missing.txt HTTP/1.1\r\n\r\n").await);
    assert_eq!(resp.status(), 404);

    let resp = RawResponse::parse(&get(addr, "GET /sub/ HTTP/1.1\r\n\r\n").await);
    assert_eq!(resp.status(), 200);
    assert!(resp.text().contains("href=\"../\""));
    assert_eq!(resp.text().matches("<tr>").count(), 2);

    let resp = RawResponse::parse(&get(addr, "POST /a.txt HTTP/1.1\r\n\r\n").await);
    assert_eq!(resp.status(), 501);

    let resp = RawResponse::parse(&get(addr, "GET /a.txt BOGUS\r\n\r\n").await);
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_repeated_get_is_identical() {
    let dir = site();
    let addr = start(config_for(&dir)).await;

    let first = get(addr, "GET /a.txt HTTP/1.1\r\n\r\n").await;
    let second = get(addr, "GET /a.txt HTTP/1.1\r\n\r\n").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_concurrent_downloads() {
    let dir = site();
    let data: Vec<u8> = (0..512 * 1024u32).map(|i| (i * 7 % 256) as u8).collect();
    std::fs::write(dir.path().join("large.zip"), &data).unwrap();
    let addr = start(config_for(&dir)).await;

    let clients: Vec<_> = (0..16)
        .map(|_| tokio::spawn(get(addr, "GET /large.zip HTTP/1.1\r\n\r\n")))
        .collect();

    for client in clients {
        let resp = RawResponse::parse(&client.await.unwrap());
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.header("Content-Type"), Some("application/zip"));
        assert_eq!(resp.header("Content-Length"), Some(data.len().to_string().as_str()));
        assert!(resp.body == data, "body differs from file contents");
    }
}

#[tokio::test]
async fn test_slow_client_does_not_block_others() {
    let dir = site();
    let addr = start(config_for(&dir)).await;

    // Sends half a request line and then stalls.
    let mut stalled = TcpStream::connect(addr).await.unwrap();
    stalled.write_all(b"GET /a.t").await.unwrap();

    let resp = RawResponse::parse(&get(addr, "GET /a.txt HTTP/1.1\r\n\r\n").await);
    assert_eq!(resp.body, b"hello");

    drop(stalled);
}

#[tokio::test]
async fn test_bind_failure_is_startup_error() {
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port();
    if port < 1025 {
        return;
    }

    let dir = site();
    let config = Config::new("127.0.0.1", port, dir.path()).unwrap();
    let err = Listener::bind(config).await.err().unwrap();
    assert!(matches!(err, ServerError::Bind { .. }));
}
