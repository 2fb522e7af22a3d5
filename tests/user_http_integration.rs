//! Integration tests for user HTTP endpoints.
//!
//! These tests drive the full router against in-memory adapters:
//! 1. Registration enforces unique names and valid emails
//! 2. Rankings order finished players by win percentage
//! 3. Per-user game and score listings resolve names

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use tictactoe_backend::app::{Application, Infrastructure};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn router() -> Router {
    Application::new(Infrastructure::in_memory()).router()
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())).unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn register(router: &Router, name: &str) -> (StatusCode, Value) {
    send(
        router,
        Method::POST,
        "/api/users",
        Some(json!({ "user_name": name, "email": format!("{}@example.com", name) })),
    )
    .await
}

async fn new_game(router: &Router, player_x: &str, player_o: &str) -> String {
    let (_, body) = send(
        router,
        Method::POST,
        "/api/games",
        Some(json!({ "player_x": player_x, "player_o": player_o })),
    )
    .await;
    body["key"].as_str().unwrap().to_string()
}

/// Plays a game that `player_x` wins along the top row.
async fn play_x_win(router: &Router, player_x: &str, player_o: &str) {
    let key = new_game(router, player_x, player_o).await;
    let moves = [
        (player_x, 0),
        (player_o, 3),
        (player_x, 1),
        (player_o, 4),
        (player_x, 2),
    ];
    for (user, cell) in moves {
        let (status, _) = send(
            router,
            Method::PUT,
            &format!("/api/games/{}", key),
            Some(json!({ "user_name": user, "move": cell })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn register_user_returns_created() {
    let router = router();

    let (status, body) = register(&router, "alice").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully!");
}

#[tokio::test]
async fn duplicate_name_is_conflict() {
    let router = router();
    register(&router, "alice").await;

    let (status, body) = register(&router, "alice").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "NAME_TAKEN");
}

#[tokio::test]
async fn invalid_email_is_bad_request() {
    let router = router();

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/users",
        Some(json!({ "user_name": "alice", "email": "not-an-email" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

// =============================================================================
// Rankings
// =============================================================================

#[tokio::test]
async fn rankings_skip_users_without_matches() {
    let router = router();
    register(&router, "alice").await;

    let (status, body) = send(&router, Method::GET, "/api/users/ranking", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn rankings_order_by_win_percentage() {
    let router = router();
    for name in ["alice", "bob", "carol"] {
        register(&router, name).await;
    }
    play_x_win(&router, "alice", "bob").await;
    play_x_win(&router, "bob", "carol").await;

    let (status, body) = send(&router, Method::GET, "/api/users/ranking", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["alice", "bob", "carol"]);
    assert_eq!(body["items"][0]["win_percent"], 100.0);
    assert_eq!(body["items"][1]["wins"], 1);
    assert_eq!(body["items"][1]["total_matches"], 2);
    assert_eq!(body["items"][2]["win_percent"], 0.0);
}

// =============================================================================
// Per-user listings
// =============================================================================

#[tokio::test]
async fn user_games_lists_only_games_in_progress() {
    let router = router();
    for name in ["alice", "bob", "carol"] {
        register(&router, name).await;
    }
    let open = new_game(&router, "alice", "carol").await;
    play_x_win(&router, "alice", "bob").await;

    let (status, body) = send(&router, Method::GET, "/api/users/alice/games", None).await;

    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["key"], open);
    assert_eq!(items[0]["player_o"], "carol");
}

#[tokio::test]
async fn user_games_for_unknown_user_is_404() {
    let router = router();

    let (status, body) = send(&router, Method::GET, "/api/users/ghost/games", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn user_scores_include_both_sides_of_a_match() {
    let router = router();
    register(&router, "alice").await;
    register(&router, "bob").await;
    play_x_win(&router, "alice", "bob").await;

    for name in ["alice", "bob"] {
        let (status, body) =
            send(&router, Method::GET, &format!("/api/users/{}/scores", name), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"][0]["winner"], "alice");
        assert_eq!(body["items"][0]["loser"], "bob");
    }
}
