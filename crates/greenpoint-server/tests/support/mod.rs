#![allow(dead_code)]

use greenpoint_model::Project;
use greenpoint_server::{build_router, AppState};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub fn fixture_projects(n: i64) -> Vec<Project> {
    (1..=n)
        .map(|id| {
            let category = if id % 3 == 0 { "Public" } else { "Residential" };
            serde_json::from_value(json!({
                "id": id,
                "title": format!("Garden {id}"),
                "subtitle": format!("Subtitle {id}"),
                "slug": format!("garden-{id}"),
                "location": "Hangzhou",
                "year": 2010 + id,
                "category": category,
                "image": format!("/uploads/{id}.jpg"),
                "description": format!("Full description {id}"),
                "gallery": [format!("/uploads/{id}-a.jpg")]
            }))
            .expect("fixture project")
        })
        .collect()
}

pub async fn spawn_app(state: AppState) -> std::net::SocketAddr {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

pub struct RawResponse {
    pub status: u16,
    pub head: String,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn header(&self, name: &str) -> Option<String> {
        let wanted = name.to_ascii_lowercase();
        self.head.lines().skip(1).find_map(|line| {
            let (k, v) = line.split_once(':')?;
            (k.trim().to_ascii_lowercase() == wanted).then(|| v.trim().to_string())
        })
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("json body")
    }
}

pub async fn send_raw(
    addr: std::net::SocketAddr,
    method: &str,
    path: &str,
    headers: &[(&str, &str)],
    body: Option<&[u8]>,
) -> RawResponse {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    for (k, v) in headers {
        req.push_str(&format!("{k}: {v}\r\n"));
    }
    if let Some(body) = body {
        req.push_str(&format!("Content-Length: {}\r\n", body.len()));
    }
    req.push_str("\r\n");
    let mut bytes = req.into_bytes();
    if let Some(body) = body {
        bytes.extend_from_slice(body);
    }
    stream.write_all(&bytes).await.expect("write request");
    let mut response = Vec::new();
    stream
        .read_to_end(&mut response)
        .await
        .expect("read response");
    let split = response
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("http response must have separator");
    let head = String::from_utf8(response[..split].to_vec()).expect("utf8 head");
    let body = response[split + 4..].to_vec();
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    RawResponse { status, head, body }
}

pub async fn get(addr: std::net::SocketAddr, path: &str) -> RawResponse {
    send_raw(addr, "GET", path, &[], None).await
}
