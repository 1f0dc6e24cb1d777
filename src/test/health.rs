use serde_json::{json, Value};

use crate::test::setup_server;

#[tokio::test]
async fn health_ping_ok() {
    let server = setup_server();

    let response = server.get("/health/ping").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn unknown_route_answers_in_error_shape() {
    let server = setup_server();

    let response = server.get("/definitely/not/here").await;

    response.assert_status_not_found();
    assert_eq!(
        json!({"error": 404, "description": "The requested resource was not found"}),
        response.json::<Value>()
    );
}

#[tokio::test]
async fn docs_list_note_paths() {
    let server = setup_server();

    server.get("/docs").await.assert_status_ok();

    let response = server.get("/docs/api.json").await;

    response.assert_status_ok();

    let api = response.json::<Value>();
    let paths = api.get("paths").and_then(Value::as_object).unwrap();

    assert!(paths.contains_key("/notes"));
    assert!(paths.contains_key("/notes/{id}"));
    assert!(paths.contains_key("/health/ping"));
}
