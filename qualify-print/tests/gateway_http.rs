// qualify-print/tests/gateway_http.rs
// GatewayClient against a mock gateway HTTP server

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use qualify_print::{GatewayApi, GatewayClient, PrintError, PrintJob};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Default)]
struct GatewayState {
    printers: Vec<String>,
    default_name: Option<String>,
    reject_jobs: bool,
    jobs: Mutex<Vec<serde_json::Value>>,
}

async fn list_printers(State(state): State<Arc<GatewayState>>) -> Json<Vec<String>> {
    Json(state.printers.clone())
}

async fn default_printer(State(state): State<Arc<GatewayState>>) -> Json<Option<String>> {
    Json(state.default_name.clone())
}

async fn submit_job(
    State(state): State<Arc<GatewayState>>,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    if state.reject_jobs {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    state.jobs.lock().unwrap().push(body);
    StatusCode::OK
}

async fn spawn_gateway(state: Arc<GatewayState>) -> String {
    let app = Router::new()
        .route("/print/all", get(list_printers))
        .route("/print", get(default_printer).post(submit_job))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// An address nothing listens on
async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn list_destinations_returns_gateway_printers() {
    let state = Arc::new(GatewayState {
        printers: vec!["A".to_string(), "B".to_string()],
        ..GatewayState::default()
    });
    let url = spawn_gateway(state).await;

    let client = GatewayClient::new();
    let destinations = client.list_destinations(&url).await.unwrap();

    let names: Vec<&str> = destinations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
}

#[tokio::test]
async fn list_destinations_fails_when_gateway_is_down() {
    let url = dead_url().await;

    let client = GatewayClient::with_timeout(Duration::from_millis(500));
    let err = client.list_destinations(&url).await.unwrap_err();

    assert!(matches!(err, PrintError::GatewayUnreachable(_)));
}

#[tokio::test]
async fn dispatch_posts_the_wire_format() {
    let state = Arc::new(GatewayState::default());
    let url = spawn_gateway(state.clone()).await;

    let client = GatewayClient::new();
    let job = PrintJob::new("^XA^FDPKG-001^FS^XZ", "text/plain").with_destination("HP-Label-1");
    client.dispatch(&job, &url).await.unwrap();

    let jobs = state.jobs.lock().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["data"], "^XA^FDPKG-001^FS^XZ");
    assert_eq!(jobs[0]["mimeType"], "text/plain");
    assert_eq!(jobs[0]["settings"]["destination"], "HP-Label-1");
}

#[tokio::test]
async fn dispatch_rejection_is_a_dispatch_failure() {
    let state = Arc::new(GatewayState {
        reject_jobs: true,
        ..GatewayState::default()
    });
    let url = spawn_gateway(state.clone()).await;

    let client = GatewayClient::new();
    let job = PrintJob::new("X", "text/plain").with_destination("A");
    let err = client.dispatch(&job, &url).await.unwrap_err();

    assert!(matches!(err, PrintError::DispatchFailed(_)));
    assert!(state.jobs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn default_destination_is_best_effort() {
    let state = Arc::new(GatewayState {
        default_name: Some("HP-Label-1".to_string()),
        ..GatewayState::default()
    });
    let url = spawn_gateway(state).await;

    let client = GatewayClient::new();
    let found = client.default_destination(&url).await.unwrap();
    assert_eq!(found.map(|d| d.name), Some("HP-Label-1".to_string()));

    // A dead gateway reads as "no default", never an error.
    let missing = client
        .default_destination(&dead_url().await)
        .await
        .unwrap();
    assert!(missing.is_none());
}
