//! End-to-end tests of the HTTP routes, driven without a socket.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use cube_server::game::{MatchGate, Slot};
use cube_server::{StateResponse, router};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn play(app: &Router, player: i64, z: i64, y: i64, x: i64) -> (StatusCode, Value) {
    call(
        app,
        Method::POST,
        "/move",
        Some(json!({"player": player, "z": z, "y": y, "x": x})),
    )
    .await
}

fn empty_board() -> Value {
    serde_json::to_value([[[0; 4]; 4]; 4]).unwrap()
}

fn app() -> Router {
    router(MatchGate::new())
}

#[tokio::test]
async fn test_connect_hands_out_two_slots() {
    let app = app();
    assert_eq!(
        call(&app, Method::POST, "/connect", None).await,
        (StatusCode::OK, json!({"player_id": 0}))
    );
    assert_eq!(
        call(&app, Method::POST, "/connect", None).await,
        (StatusCode::OK, json!({"player_id": 1}))
    );
    assert_eq!(
        call(&app, Method::POST, "/connect", None).await,
        (StatusCode::BAD_REQUEST, json!({"error": "Server full"}))
    );

    let (status, body) = call(&app, Method::POST, "/disconnect", Some(json!({"player_id": 0}))).await;
    assert_eq!((status, body), (StatusCode::OK, json!({"ok": true})));
    assert_eq!(
        call(&app, Method::POST, "/connect", None).await,
        (StatusCode::OK, json!({"player_id": 0}))
    );
}

#[tokio::test]
async fn test_disconnect_always_acknowledges() {
    let app = app();
    for body in [None, Some(json!({})), Some(json!({"player_id": "zero"})), Some(json!({"player_id": 9}))] {
        assert_eq!(
            call(&app, Method::POST, "/disconnect", body).await,
            (StatusCode::OK, json!({"ok": true}))
        );
    }
}

#[tokio::test]
async fn test_initial_state_payload() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/state", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "state");
    assert_eq!(body["current_player"], 0);
    assert!(body["winner"].is_null());
    assert!(body["last_move"].is_null());
    assert_eq!(body["board"], empty_board());
}

#[tokio::test]
async fn test_row_win_over_http() {
    let app = app();
    for x in 0..3 {
        assert_eq!(play(&app, 0, 0, 0, x).await.0, StatusCode::OK);
        assert_eq!(play(&app, 1, 1, 1, x).await.0, StatusCode::OK);
    }
    let (status, body) = play(&app, 0, 0, 0, 3).await;
    assert_eq!(status, StatusCode::OK);

    let response: StateResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.kind, "state");
    assert_eq!(response.snapshot.winner, Some(Slot::First));
    assert_eq!(response.snapshot.board.occupied(), 7);

    for player in [0, 1] {
        assert_eq!(
            play(&app, player, 3, 3, 3).await,
            (StatusCode::BAD_REQUEST, json!({"error": "Game already finished"}))
        );
    }
}

#[tokio::test]
async fn test_move_rejections() {
    let app = app();
    assert_eq!(
        play(&app, 1, 0, 0, 0).await,
        (StatusCode::BAD_REQUEST, json!({"error": "Not your turn"}))
    );
    assert_eq!(
        play(&app, 0, 0, 4, 0).await,
        (StatusCode::BAD_REQUEST, json!({"error": "Out of bounds"}))
    );
    assert_eq!(play(&app, 0, 2, 2, 2).await.0, StatusCode::OK);
    assert_eq!(
        play(&app, 1, 2, 2, 2).await,
        (StatusCode::BAD_REQUEST, json!({"error": "Cell occupied"}))
    );

    let (_, state) = call(&app, Method::GET, "/state", None).await;
    assert_eq!(state["current_player"], 1);
    assert_eq!(state["board"][2][2][2], -1);
    assert_eq!(state["last_move"], json!({"player": 0, "z": 2, "y": 2, "x": 2}));
}

#[tokio::test]
async fn test_malformed_moves() {
    let app = app();
    assert_eq!(
        call(&app, Method::POST, "/move", None).await,
        (StatusCode::BAD_REQUEST, json!({"error": "Missing JSON"}))
    );
    assert_eq!(
        call(&app, Method::POST, "/move", Some(json!({"player": 0, "z": 0}))).await,
        (StatusCode::BAD_REQUEST, json!({"error": "Invalid fields"}))
    );
    assert_eq!(
        call(&app, Method::POST, "/move", Some(json!({"player": 0, "z": 0, "y": 0, "x": "one"}))).await,
        (StatusCode::BAD_REQUEST, json!({"error": "Invalid fields"}))
    );

    let (_, state) = call(&app, Method::GET, "/state", None).await;
    assert!(state["last_move"].is_null());
}

#[tokio::test]
async fn test_oversized_numbers_fail_bounds_and_turn_checks() {
    let app = app();
    for z in [json!(1e20), json!(u64::MAX), json!("99999999999999999999"), json!(-1e20)] {
        assert_eq!(
            call(&app, Method::POST, "/move", Some(json!({"player": 0, "z": z, "y": 0, "x": 0}))).await,
            (StatusCode::BAD_REQUEST, json!({"error": "Out of bounds"}))
        );
    }
    assert_eq!(
        call(
            &app,
            Method::POST,
            "/move",
            Some(json!({"player": "99999999999999999999", "z": 0, "y": 0, "x": 0}))
        )
        .await,
        (StatusCode::BAD_REQUEST, json!({"error": "Not your turn"}))
    );

    let (_, state) = call(&app, Method::GET, "/state", None).await;
    assert!(state["last_move"].is_null());
}

#[tokio::test]
async fn test_underscore_separated_digits_are_coerced() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/move",
        Some(json!({"player": "0", "z": "0_3", "y": 0, "x": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["board"][3][0][0], -1);
}

#[tokio::test]
async fn test_string_coordinates_are_coerced() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/move",
        Some(json!({"player": "0", "z": "3", "y": 1.0, "x": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["board"][3][1][1], -1);
}

#[tokio::test]
async fn test_reset_keeps_connections() {
    let app = app();
    call(&app, Method::POST, "/connect", None).await;
    call(&app, Method::POST, "/connect", None).await;
    play(&app, 0, 1, 1, 1).await;

    assert_eq!(
        call(&app, Method::POST, "/reset", None).await,
        (StatusCode::OK, json!({"ok": true}))
    );
    let (_, state) = call(&app, Method::GET, "/state", None).await;
    assert_eq!(state["board"], empty_board());
    assert_eq!(state["current_player"], 0);
    assert!(state["winner"].is_null());
    assert!(state["last_move"].is_null());

    assert_eq!(
        call(&app, Method::POST, "/connect", None).await,
        (StatusCode::BAD_REQUEST, json!({"error": "Server full"}))
    );
}

#[tokio::test]
async fn test_routers_share_one_gate() {
    let gate = MatchGate::new();
    let first = router(gate.clone());
    let second = router(gate.clone());

    play(&first, 0, 0, 0, 0).await;
    let (_, state) = call(&second, Method::GET, "/state", None).await;
    assert_eq!(state["current_player"], 1);
    assert_eq!(gate.state().current_player, Slot::Second);
}
