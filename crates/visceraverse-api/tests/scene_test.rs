//! Integration tests for the scene interaction routes.

mod common;

use axum::Router;
use axum::http::StatusCode;
use glam::Vec3;
use visceraverse_scene::Camera;

/// World-space center of the heart target in the default layout.
const HEART_CENTER: Vec3 = Vec3::new(0.0, 4.0, 1.0);

/// Screen coordinates that put the pointer ray straight through the given
/// world point (the app under test uses the default camera).
fn screen_at(world: Vec3) -> serde_json::Value {
    let (x, y) = Camera::default().project_to_screen(world).unwrap();
    serde_json::json!({ "x": x, "y": y })
}

async fn app_with_scenario() -> Router {
    let app = common::build_test_app();
    let (_, json) =
        common::post_json(app.clone(), "/api/v1/scenario/generate", &serde_json::json!({})).await;
    assert_eq!(json["success"], true);
    app
}

#[tokio::test]
async fn test_pointer_move_highlights_the_heart() {
    let app = app_with_scenario().await;

    let (status, scene) =
        common::post_json(app, "/api/v1/scene/pointer-move", &screen_at(HEART_CENTER)).await;

    assert_eq!(status, StatusCode::OK);
    let targets = scene["targets"].as_array().unwrap();
    for target in targets {
        assert_eq!(target["highlighted"], target["name"] == "Heart");
    }
}

#[tokio::test]
async fn test_pointer_move_on_empty_space_clears_highlight() {
    let app = app_with_scenario().await;
    common::post_json(
        app.clone(),
        "/api/v1/scene/pointer-move",
        &screen_at(HEART_CENTER),
    )
    .await;

    let (_, scene) = common::post_json(
        app,
        "/api/v1/scene/pointer-move",
        &serde_json::json!({ "x": 0.0, "y": 0.0 }),
    )
    .await;

    let targets = scene["targets"].as_array().unwrap();
    assert!(targets.iter().all(|t| t["highlighted"] == false));
}

#[tokio::test]
async fn test_pointer_down_starts_a_drag_and_records_the_interaction() {
    let app = app_with_scenario().await;
    common::post_json(
        app.clone(),
        "/api/v1/scene/pointer-move",
        &screen_at(HEART_CENTER),
    )
    .await;

    let (status, session) = common::post_empty(app.clone(), "/api/v1/scene/pointer-down").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["interactions"][0]["name"], "Heart");
    assert_eq!(session["interactions"][0]["count"], 1);

    let (_, scene) = common::get_json(app.clone(), "/api/v1/scene").await;
    assert_eq!(scene["dragging"], true);

    let (_, scene) = common::post_empty(app, "/api/v1/scene/pointer-up").await;
    assert_eq!(scene["dragging"], false);
}

#[tokio::test]
async fn test_magnifier_click_discovers_evidence_without_dragging() {
    let app = app_with_scenario().await;
    common::post_json(
        app.clone(),
        "/api/v1/session/tool",
        &serde_json::json!({ "tool": "magnifying-glass" }),
    )
    .await;
    common::post_json(
        app.clone(),
        "/api/v1/scene/pointer-move",
        &screen_at(HEART_CENTER),
    )
    .await;

    let (status, session) = common::post_empty(app.clone(), "/api/v1/scene/pointer-down").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        session["discoveredEvidence"],
        serde_json::json!(["evidence-heart"])
    );
    // The view merges the discovery flag into the scenario's evidence.
    assert_eq!(session["scenario"]["evidence"][0]["discovered"], true);

    let (_, scene) = common::get_json(app, "/api/v1/scene").await;
    assert_eq!(scene["dragging"], false);
}

#[tokio::test]
async fn test_double_click_creates_a_tag_with_a_screen_anchor() {
    let app = app_with_scenario().await;
    common::post_json(
        app.clone(),
        "/api/v1/scene/pointer-move",
        &screen_at(HEART_CENTER),
    )
    .await;

    let (status, session) = common::post_empty(app.clone(), "/api/v1/scene/double-click").await;

    assert_eq!(status, StatusCode::OK);
    let tags = session["tags"].as_array().unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0]["text"], "Heart");
    assert_eq!(tags[0]["createdAt"], "2026-01-15T10:00:00Z");

    let (_, anchors) = common::get_json(app.clone(), "/api/v1/scene/tags").await;
    let anchors = anchors.as_array().unwrap().clone();
    assert_eq!(anchors.len(), 1);
    assert_eq!(anchors[0]["id"], tags[0]["id"]);
    assert_eq!(anchors[0]["text"], "Heart");

    // Removing the tag through the session surface drops the anchor too.
    let tag_id = tags[0]["id"].as_str().unwrap();
    let (_, session) =
        common::delete_json(app.clone(), &format!("/api/v1/session/tags/{tag_id}")).await;
    assert_eq!(session["tags"], serde_json::json!([]));
    let (_, anchors) = common::get_json(app, "/api/v1/scene/tags").await;
    assert_eq!(anchors, serde_json::json!([]));
}

#[tokio::test]
async fn test_generate_places_an_injury_decal_on_the_heart() {
    let app = app_with_scenario().await;

    let (status, scene) = common::get_json(app, "/api/v1/scene").await;

    assert_eq!(status, StatusCode::OK);
    let decals = scene["decals"].as_array().unwrap();
    assert_eq!(decals.len(), 1);
    assert_eq!(decals[0]["organ"], "heart");
    assert_eq!(decals[0]["kind"], "stabbing");
}

#[tokio::test]
async fn test_session_clear_also_unloads_the_scene() {
    let app = app_with_scenario().await;
    let (_, scene) = common::get_json(app.clone(), "/api/v1/scene").await;
    assert_eq!(scene["decals"].as_array().unwrap().len(), 1);

    common::post_empty(app.clone(), "/api/v1/session/clear").await;

    let (status, scene) = common::get_json(app, "/api/v1/scene").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(scene["decals"], serde_json::json!([]));
    assert_eq!(scene["dragging"], false);
    let targets = scene["targets"].as_array().unwrap();
    assert!(targets.iter().all(|t| t["highlighted"] == false));
}

#[tokio::test]
async fn test_resize_answers_with_the_scene_view() {
    let app = common::build_test_app();

    let (status, scene) = common::post_json(
        app,
        "/api/v1/scene/resize",
        &serde_json::json!({ "width": 1920.0, "height": 1080.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(scene["dragging"], false);
}
