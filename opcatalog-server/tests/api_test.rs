// Copyright 2025 AgentReplay (https://github.com/agentreplay)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

// Integration tests for the catalog HTTP API

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use opcatalog_core::{Operation, OperationRegistry, Parameter, ServiceInfo};
use opcatalog_server::{api::AppState, build_app, config::ServerConfig};
use serde_json::Value;
use std::path::PathBuf;
use tower::ServiceExt;

fn builtin_state(index_file: PathBuf) -> AppState {
    AppState::new(
        OperationRegistry::builtin().unwrap(),
        ServiceInfo::builtin(),
        index_file,
    )
}

fn app_with(state: AppState, config: &ServerConfig) -> Router {
    build_app(state, config).unwrap()
}

fn app() -> Router {
    app_with(
        builtin_state(PathBuf::from("/nonexistent/index.html")),
        &ServerConfig::default(),
    )
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_list_operations_in_registry_order() {
    let (status, body) = get(app(), "/operations").await;
    assert_eq!(status, StatusCode::OK);

    let operations = body.as_array().unwrap();
    assert_eq!(operations.len(), 18);
    assert_eq!(operations[0]["id"], "authenticate_with_token");
    assert_eq!(operations[1]["id"], "create_client_session");
    assert_eq!(operations[17]["id"], "invoke_interaction");
    assert_eq!(operations[0]["parameters"][0]["type"], "string");
    assert_eq!(operations[1]["sources"][1], "README.rst L35-L38");
}

#[tokio::test]
async fn test_get_operation_found() {
    let (status, body) = get(app(), "/operations/send_message").await;
    assert_eq!(status, StatusCode::OK);

    let operation: Operation = serde_json::from_value(body).unwrap();
    assert_eq!(operation.id, "send_message");
    assert_eq!(operation.category, "messaging");
    assert_eq!(operation.parameters.len(), 3);
}

#[tokio::test]
async fn test_get_operation_not_found() {
    let (status, body) = get(app(), "/operations/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({ "detail": "Operation not found" }));
}

#[tokio::test]
async fn test_metadata() {
    let (status, body) = get(app(), "/metadata").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["name"], "discord.py-self Programmatic Interface");
    assert_eq!(
        body["description"],
        "HTTP surface that maps documented user-account operations to structured endpoints."
    );
    assert_eq!(body["operation_count"], 18);
    assert_eq!(body["categories"]["account"], 6);
    assert_eq!(body["categories"]["authentication"], 1);
    assert_eq!(body["documentation"]["technical"], "docs/technical_documentation.md");
    assert_eq!(
        body["documentation"]["source_docs"],
        serde_json::json!(["README.rst", "docs/quickstart.rst", "docs/authenticating.rst"])
    );

    let total: u64 = body["categories"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(total, 18);
}

#[tokio::test]
async fn test_categories_sorted() {
    let (status, body) = get(app(), "/categories").await;
    assert_eq!(status, StatusCode::OK);

    let categories = body.as_array().unwrap();
    let names: Vec<&str> = categories
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "account",
            "applications",
            "authentication",
            "commerce",
            "interactions",
            "messaging",
            "runtime"
        ]
    );

    let commerce = &categories[3];
    assert_eq!(commerce["operation_count"], 2);
    assert_eq!(
        commerce["operations"],
        serde_json::json!(["store_entitlements", "billing_and_boosts"])
    );
}

#[tokio::test]
async fn test_empty_registry() {
    let state = AppState::new(
        OperationRegistry::default(),
        ServiceInfo::builtin(),
        PathBuf::from("/nonexistent/index.html"),
    );
    let app = app_with(state, &ServerConfig::default());

    let (_, metadata) = get(app.clone(), "/metadata").await;
    assert_eq!(metadata["operation_count"], 0);
    assert_eq!(metadata["categories"], serde_json::json!({}));

    let (_, operations) = get(app.clone(), "/operations").await;
    assert_eq!(operations, serde_json::json!([]));

    let (_, categories) = get(app, "/categories").await;
    assert_eq!(categories, serde_json::json!([]));
}

#[tokio::test]
async fn test_custom_registry_served() {
    let registry = OperationRegistry::new(vec![Operation::new("ping", "Ping", "diagnostics")
        .with_summary("Check liveness.")
        .with_parameter(Parameter::optional("payload", "string", "Echoed back."))])
    .unwrap();
    let state = AppState::new(
        registry,
        ServiceInfo::builtin(),
        PathBuf::from("/nonexistent/index.html"),
    );

    let (status, body) = get(app_with(state, &ServerConfig::default()), "/operations/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["parameters"][0]["required"], false);
}

#[tokio::test]
async fn test_index_missing() {
    let (status, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({ "detail": "index.html not found" }));
}

#[tokio::test]
async fn test_index_served_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let index = dir.path().join("index.html");
    std::fs::write(&index, "<h1>catalog</h1>").unwrap();

    let response = app_with(builtin_state(index), &ServerConfig::default())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"<h1>catalog</h1>");
}

#[tokio::test]
async fn test_index_served_as_raw_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let index = dir.path().join("index.html");
    std::fs::write(&index, b"<p>caf\xe9</p>").unwrap();

    let response = app_with(builtin_state(index), &ServerConfig::default())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"<p>caf\xe9</p>");
}

#[tokio::test]
async fn test_wrong_method_returns_detail() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/operations")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({ "detail": "Method Not Allowed" }));
}

#[tokio::test]
async fn test_wrong_method_on_path_param_route() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/operations/send_message")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, body) = get(app(), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Not Found");
}

#[tokio::test]
async fn test_health_and_service_info() {
    let (status, health) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["operation_count"], 18);

    let (status, service) = get(app(), "/service").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(service["title"], "discord.py-self Programmatic Interface");
    assert_eq!(service["version"], "0.1.0");
}

#[tokio::test]
async fn test_cors_mirrors_origin_with_credentials() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/operations")
                .header(header::ORIGIN, "http://client.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://client.example"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn test_cors_wildcard_without_credentials() {
    let mut config = ServerConfig::default();
    config.server.allow_credentials = false;
    let app = app_with(builtin_state(PathBuf::from("/nonexistent")), &config);

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/categories")
                .header(header::ORIGIN, "http://client.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "*");
}

#[tokio::test]
async fn test_cors_preflight_mirrors_request_with_credentials() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/operations")
                .header(header::ORIGIN, "http://client.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://client.example"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "x-custom");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}
