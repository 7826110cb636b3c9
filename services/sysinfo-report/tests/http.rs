//! HTTP tests for the sysinfo server
//!
//! Each test binds the router to an ephemeral port on localhost, backed by a
//! stub provider, and talks to it over real HTTP.

use std::net::SocketAddr;

use async_trait::async_trait;
use reqwest::StatusCode;
use sysinfo_report::{
    server, Collector, CpuFacts, FactKind, FactsProvider, MemoryFacts, OsFacts, OsQueryError,
};
use tokio::net::TcpListener;

const GB: u64 = 1 << 30;

struct StubProvider {
    fail_os: bool,
}

#[async_trait]
impl FactsProvider for StubProvider {
    async fn query_cpu(&self) -> Result<CpuFacts, OsQueryError> {
        Ok(CpuFacts {
            manufacturer: "AMD".to_string(),
            brand: "Ryzen 5".to_string(),
            logical_cores: 6,
            physical_cores: 6,
        })
    }

    async fn query_memory(&self) -> Result<MemoryFacts, OsQueryError> {
        Ok(MemoryFacts {
            total_bytes: 16 * GB,
            used_bytes: 10 * GB,
            free_bytes: 6 * GB,
        })
    }

    async fn query_os(&self) -> Result<OsFacts, OsQueryError> {
        if self.fail_os {
            return Err(OsQueryError::unavailable(FactKind::Os, "secret detail"));
        }
        Ok(OsFacts {
            distribution_name: "Ubuntu".to_string(),
            release_version: "22.04".to_string(),
            platform_family: "linux".to_string(),
            architecture: "x64".to_string(),
        })
    }
}

/// Start a server on an ephemeral port and return its address
async fn spawn_server(fail_os: bool) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = server::router(Collector::new(StubProvider { fail_os }));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

async fn get(addr: SocketAddr, path: &str) -> (StatusCode, String, String) {
    let response = reqwest::get(format!("http://{}{}", addr, path))
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    (status, content_type, response.text().await.unwrap())
}

#[tokio::test]
async fn root_returns_greeting() {
    let addr = spawn_server(false).await;

    let (status, content_type, body) = get(addr, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/plain");
    assert_eq!(body, "Hello World!");
}

#[tokio::test]
async fn root_ignores_query_string() {
    let addr = spawn_server(false).await;

    let (status, _, body) = get(addr, "/?name=anyone").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello World!");
}

#[tokio::test]
async fn sysinfo_returns_report() {
    let addr = spawn_server(false).await;

    for path in ["/api/v1/sysinfo", "/api/v1/sysinfo/anything"] {
        let (status, content_type, body) = get(addr, path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(content_type, "text/plain");

        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(
            lines,
            vec![
                "=== System Information ===",
                "CPU: AMD Ryzen 5 (6 cores, 6 physical)",
                "Memory: 10.00GB used / 16.00GB total (6.00GB free)",
                "OS: Ubuntu 22.04 (linux - x64)",
                "=========================",
            ]
        );
    }
}

#[tokio::test]
async fn sysinfo_failure_hides_cause() {
    let addr = spawn_server(true).await;

    let (status, content_type, body) = get(addr, "/api/v1/sysinfo").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type, "text/plain");
    assert_eq!(body, "Error retrieving system information");
    assert!(!body.contains("secret detail"));
}

#[tokio::test]
async fn unknown_routes_return_not_found() {
    let addr = spawn_server(false).await;

    let (status, content_type, body) = get(addr, "/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content_type, "text/plain");
    assert_eq!(body, "404 - Not Found");

    let response = reqwest::Client::new()
        .post(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), "404 - Not Found");
}
