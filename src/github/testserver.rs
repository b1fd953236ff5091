// src/github/testserver.rs
// =============================================================================
// A tiny HTTP responder for tests.
//
// Serves canned bodies by path (the query string is ignored when matching),
// answers 404 for anything else, and records every request target so tests
// can assert which URLs were tried and in what order.
// =============================================================================

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use url::Url;

use super::Scraper;
use crate::config::ScraperConfig;

type Routes = Arc<HashMap<String, (u16, String)>>;

pub struct TestServer {
    pub base: Url,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    /// Starts serving `(path, status, body)` routes on a random local port.
    pub async fn start(routes: Vec<(&str, u16, &str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let routes: Routes = Arc::new(
            routes
                .into_iter()
                .map(|(path, status, body)| (path.to_string(), (status, body.to_string())))
                .collect(),
        );
        let requests = Arc::new(Mutex::new(Vec::new()));

        let log = requests.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = routes.clone();
                let log = log.clone();
                tokio::spawn(async move {
                    let _ = respond(stream, routes, log).await;
                });
            }
        });

        TestServer {
            base: Url::parse(&format!("http://{}", addr)).unwrap(),
            requests,
        }
    }

    /// A Scraper pointed at this server for both pages and raw files.
    pub fn scraper(&self) -> Scraper {
        let config = ScraperConfig {
            github_url: self.base.clone(),
            raw_url: self.base.clone(),
            timeout: Duration::from_secs(5),
            ..ScraperConfig::default()
        };
        Scraper::new(config).unwrap()
    }

    /// Request targets (path and query) in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Request paths in arrival order, without query strings.
    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|target| target.split('?').next().unwrap_or_default().to_string())
            .collect()
    }
}

async fn respond(
    mut stream: TcpStream,
    routes: Routes,
    log: Arc<Mutex<Vec<String>>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&buf);
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    log.lock().unwrap().push(target.clone());

    let path = target.split('?').next().unwrap_or("/");
    let (status, body) = routes
        .get(path)
        .cloned()
        .unwrap_or((404, "Not Found".to_string()));

    let response = format!(
        "HTTP/1.1 {} X\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

/// A base URL nothing is listening on.
pub async fn unreachable_base() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}", addr)).unwrap()
}

/// A Scraper whose GitHub and raw hosts are both unreachable.
pub async fn unreachable_scraper() -> Scraper {
    let base = unreachable_base().await;
    let config = ScraperConfig {
        github_url: base.clone(),
        raw_url: base,
        timeout: Duration::from_secs(2),
        ..ScraperConfig::default()
    };
    Scraper::new(config).unwrap()
}
