mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

async fn create_todo(app: &TestApp, token: &str, body: serde_json::Value) -> i64 {
    let response = app
        .post_authenticated("/todos/", token)
        .json(&body)
        .send()
        .await
        .expect("Failed to create todo");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body["data"]["id"].as_i64().expect("Missing todo id")
}

#[tokio::test]
async fn test_create_todo_success() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "pw1").await;

    let response = app
        .post_authenticated("/todos/", &token)
        .json(&json!({
            "title": "buy milk",
            "description": "two liters",
            "priority": 3,
            "complete": false
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["title"], "buy milk");
    assert_eq!(body["data"]["priority"], 3);
    assert_eq!(body["data"]["complete"], false);
}

#[tokio::test]
async fn test_create_todo_requires_auth() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/todos/")
        .json(&json!({
            "title": "buy milk",
            "priority": 3,
            "complete": false
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_todo_priority_out_of_range() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "pw1").await;

    for priority in [0, 6] {
        let response = app
            .post_authenticated("/todos/", &token)
            .json(&json!({
                "title": "buy milk",
                "priority": priority,
                "complete": false
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn test_list_todos_is_public() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "pw1").await;

    create_todo(
        &app,
        &token,
        json!({ "title": "buy milk", "priority": 3, "complete": false }),
    )
    .await;

    // No token needed for the unfiltered listing
    let response = app
        .get("/todos/")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_todo_scoped_to_owner() {
    let app = TestApp::spawn().await;
    let alice_token = app.register_and_login("alice", "pw1").await;
    let bob_token = app.register_and_login("bob", "pw2").await;

    let todo_id = create_todo(
        &app,
        &alice_token,
        json!({ "title": "buy milk", "priority": 3, "complete": false }),
    )
    .await;

    // The owner can fetch it
    let response = app
        .get_authenticated(&format!("/todos/{todo_id}"), &alice_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    // Another identity sees not-found, not forbidden
    let response = app
        .get_authenticated(&format!("/todos/{todo_id}"), &bob_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains(&todo_id.to_string()));
}

#[tokio::test]
async fn test_partial_update_changes_only_given_fields() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "pw1").await;

    let todo_id = create_todo(
        &app,
        &token,
        json!({
            "title": "buy milk",
            "description": "two liters",
            "priority": 3,
            "complete": false
        }),
    )
    .await;

    let response = app
        .put_authenticated(&format!("/todos/{todo_id}"), &token)
        .json(&json!({ "title": "buy oat milk" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["title"], "buy oat milk");
    assert_eq!(body["data"]["description"], "two liters");
    assert_eq!(body["data"]["priority"], 3);
    assert_eq!(body["data"]["complete"], false);
}

#[tokio::test]
async fn test_update_applies_explicit_false() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "pw1").await;

    let todo_id = create_todo(
        &app,
        &token,
        json!({ "title": "buy milk", "priority": 3, "complete": true }),
    )
    .await;

    // complete=false is present, so it is applied rather than skipped
    let response = app
        .put_authenticated(&format!("/todos/{todo_id}"), &token)
        .json(&json!({ "complete": false }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["complete"], false);
}

#[tokio::test]
async fn test_update_missing_todo() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "pw1").await;

    let response = app
        .put_authenticated("/todos/999999", &token)
        .json(&json!({ "title": "anything" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_todo() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "pw1").await;

    let todo_id = create_todo(
        &app,
        &token,
        json!({ "title": "buy milk", "priority": 3, "complete": false }),
    )
    .await;

    let response = app
        .delete_authenticated(&format!("/todos/{todo_id}"), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    // A subsequent get yields not-found
    let response = app
        .get_authenticated(&format!("/todos/{todo_id}"), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_todo() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "pw1").await;

    let response = app
        .delete_authenticated("/todos/999999", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_address_links_user() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "pw1").await;

    let response = app
        .post_authenticated("/address/", &token)
        .json(&json!({
            "address1": "Main Street 1",
            "apt_num": "4B",
            "city": "Oslo",
            "state": "Oslo",
            "country": "Norway",
            "postalcode": "0150"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let address_id = body["data"]["id"].as_i64().expect("Missing address id");

    // The caller's identity now references the new address
    let response = app
        .get("/users/")
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"][0]["address_id"].as_i64(), Some(address_id));
}

#[tokio::test]
async fn test_create_address_requires_auth() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/address/")
        .json(&json!({
            "address1": "Main Street 1",
            "city": "Oslo",
            "state": "Oslo",
            "country": "Norway",
            "postalcode": "0150"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_login_create_complete_flow() {
    let app = TestApp::spawn().await;

    // register alice -> login
    let token = app.register_and_login("alice", "pw1").await;

    // create a todo
    let todo_id = create_todo(
        &app,
        &token,
        json!({ "title": "buy milk", "priority": 3, "complete": false }),
    )
    .await;

    // get-all-by-user returns exactly that todo
    let response = app
        .get_authenticated("/todos/user", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let todos = body["data"].as_array().expect("Expected todo array");
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["id"].as_i64(), Some(todo_id));
    assert_eq!(todos[0]["title"], "buy milk");

    // mark complete via update
    let response = app
        .put_authenticated(&format!("/todos/{todo_id}"), &token)
        .json(&json!({ "complete": true }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    // get-by-id shows complete:true
    let response = app
        .get_authenticated(&format!("/todos/{todo_id}"), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["complete"], true);
}
