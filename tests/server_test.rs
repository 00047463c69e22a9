//! End-to-end tests over a real socket.
//!
//! Serves the router on an ephemeral localhost port and talks to it with
//! reqwest, the way an orchestrator probe or a deploy smoke test would.

use std::net::{SocketAddr, TcpListener as StdTcpListener};

use serde_json::{json, Value};
use simple_api::config::LISTEN_HOST;
use simple_api::environment::StaticEnv;
use simple_api::http::{start_server, ServerError};
use simple_api::{create_router, AppConfig, AppState};

/// Spawn the service in the background and return its address.
async fn spawn_app(env: StaticEnv) -> SocketAddr {
    let config = AppConfig::from_source(&env).unwrap();
    let state = AppState::new(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn test_smoke_all_routes() {
    let addr = spawn_app(StaticEnv::new([
        ("APP_VERSION", "2.3.4"),
        ("BUILD_ID", "abc123"),
        ("ENVIRONMENT", "staging"),
    ]))
    .await;
    let client = reqwest::Client::new();
    let base = format!("http://{addr}");

    for (path, status) in [("/health", "healthy"), ("/ready", "ready")] {
        let response = client.get(format!("{base}{path}")).send().await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["status"], status);
        assert_eq!(body["version"], "2.3.4");
    }

    let body: Value = client
        .get(format!("{base}/version"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["build_id"], "abc123");
    assert_eq!(body["environment"], "staging");

    let body: Value = client
        .post(format!("{base}/echo"))
        .json(&json!({"deploy": {"sha": "deadbeef", "replicas": 3}}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["echo"], json!({"deploy": {"sha": "deadbeef", "replicas": 3}}));
    assert!(body["received_at"].as_str().is_some_and(|t| t.ends_with('Z')));
}

#[tokio::test]
async fn test_concurrent_requests() {
    let addr = spawn_app(StaticEnv::default()).await;
    let client = reqwest::Client::new();

    let requests = (0..16).map(|i| {
        let client = client.clone();
        async move {
            client
                .post(format!("http://{addr}/echo"))
                .json(&json!({ "n": i }))
                .send()
                .await
                .unwrap()
                .json::<Value>()
                .await
                .unwrap()
        }
    });

    let handles: Vec<_> = requests.map(tokio::spawn).collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let body = handle.await.unwrap();
        assert_eq!(body["echo"], json!({ "n": i }));
    }
}

#[tokio::test]
async fn test_start_server_fails_when_port_taken() {
    let occupied = StdTcpListener::bind(SocketAddr::from((LISTEN_HOST, 0))).unwrap();
    let port = occupied.local_addr().unwrap().port();

    let config = AppConfig {
        port,
        ..AppConfig::default()
    };
    let app = create_router(AppState::new(config.clone()));

    let result = start_server(app, &config).await;

    assert!(matches!(result, Err(ServerError::Serve { addr, .. }) if addr.port() == port));
}
