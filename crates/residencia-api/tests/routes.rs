use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use residencia_api::app;
use residencia_api::state::AppState;

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&value).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn nihss_responses(overrides: &[(&str, Value)]) -> Value {
    let mut responses = serde_json::Map::new();
    for item in &residencia_scales::get_scale("NIHSS").unwrap().items {
        responses.insert(item.id.clone(), json!(0));
    }
    for (id, value) in overrides {
        responses.insert(id.to_string(), value.clone());
    }
    Value::Object(responses)
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = send_json(app(AppState::in_memory()), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn lists_scale_summaries() {
    let (status, body) = send_json(app(AppState::in_memory()), Method::GET, "/scales", None).await;
    assert_eq!(status, StatusCode::OK);

    let scales = body.as_array().unwrap();
    assert_eq!(scales.len(), 6);
    assert_eq!(
        scales[0],
        json!({ "id": "NIHSS", "name": "NIHSS", "item_count": 15, "max_possible_score": 42 })
    );
}

#[tokio::test]
async fn scale_detail_includes_items_and_bands() {
    let (status, body) =
        send_json(app(AppState::in_memory()), Method::GET, "/scales/glasgow", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "GLASGOW");
    assert_eq!(body["items"].as_array().unwrap().len(), 3);
    assert_eq!(body["items"][1]["options"][5]["value"], "UN");
    assert_eq!(body["interpretation_bands"][0]["min_score"], 0);
}

#[tokio::test]
async fn unknown_scale_is_404() {
    let (status, body) =
        send_json(app(AppState::in_memory()), Method::GET, "/scales/NOPE", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "unknown scale: NOPE" }));
}

#[tokio::test]
async fn scores_a_complete_submission() {
    let request = json!({
        "responses": nihss_responses(&[("loc", json!(3)), ("motor-left-arm", json!("4")), ("ataxia", json!("UN"))])
    });
    let (status, body) = send_json(
        app(AppState::in_memory()),
        Method::POST,
        "/scales/NIHSS/score",
        Some(request),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_score"], 7);
    assert_eq!(body["interpretation"], "Ictus moderado.");
    assert_eq!(body["breakdown"][10]["item_id"], "ataxia");
    assert_eq!(body["breakdown"][10]["response_display"], "No evaluable");
}

#[tokio::test]
async fn incomplete_submission_is_422_with_missing_items() {
    let request = json!({ "responses": { "eye": 4, "motor": 6 } });
    let (status, body) = send_json(
        app(AppState::in_memory()),
        Method::POST,
        "/scales/GLASGOW/score",
        Some(request),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["missing"], json!(["verbal"]));
}

#[tokio::test]
async fn out_of_range_response_is_400() {
    let request = json!({ "responses": nihss_responses(&[("gaze", json!(5))]) });
    let (status, body) = send_json(
        app(AppState::in_memory()),
        Method::POST,
        "/scales/NIHSS/score",
        Some(request),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "invalid response '5' for item 'gaze' of scale 'NIHSS'"
    );
}

#[tokio::test]
async fn malformed_body_is_400() {
    let request = json!({ "responses": { "eye": "cuatro" } });
    let (status, body) = send_json(
        app(AppState::in_memory()),
        Method::POST,
        "/scales/GLASGOW/score",
        Some(request),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn score_text_returns_the_note_block() {
    let request = json!({ "responses": nihss_responses(&[]) });
    let (status, bytes) = send(
        app(AppState::in_memory()),
        Method::POST,
        "/scales/nihss/score/text",
        Some(request),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with("ESCALA NIHSS:\n- Puntuación total: 0 - Sin síntomas de ictus.\n"));
    assert!(text.ends_with("  • 11. Extinción e inatención: 0"));
}

#[tokio::test]
async fn assessments_are_recorded_and_listed_per_patient() {
    let state = AppState::in_memory();
    let request = json!({
        "scale_id": "MRS",
        "responses": { "grade": 2 },
        "notes": "Alta a domicilio",
        "assessed_by": "R3"
    });

    let (status, created) = send_json(
        app(state.clone()),
        Method::POST,
        "/patients/HC-42/assessments",
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["patient_id"], "HC-42");
    assert_eq!(created["result"]["interpretation"], "Discapacidad leve.");

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = send_json(
        app(state.clone()),
        Method::GET,
        &format!("/patients/HC-42/assessments/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, listed) = send_json(
        app(state.clone()),
        Method::GET,
        "/patients/HC-42/assessments",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));

    let (status, other) =
        send_json(app(state), Method::GET, "/patients/HC-43/assessments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(other, json!([]));
}

#[tokio::test]
async fn unapproved_scale_is_422() {
    let request = json!({ "scale_id": "TAROT", "responses": {} });
    let (status, body) = send_json(
        app(AppState::in_memory()),
        Method::POST,
        "/patients/HC-42/assessments",
        Some(request),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "scale is not on the approved list: TAROT");
}

#[tokio::test]
async fn incomplete_assessment_is_not_stored() {
    let state = AppState::in_memory();
    let request = json!({ "scale_id": "HAS-BLED", "responses": { "renal": 1 } });
    let (status, body) = send_json(
        app(state.clone()),
        Method::POST,
        "/patients/HC-42/assessments",
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["missing"].as_array().unwrap().len(), 8);

    let (_, listed) =
        send_json(app(state), Method::GET, "/patients/HC-42/assessments", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn unknown_assessment_is_404() {
    let (status, _) = send_json(
        app(AppState::in_memory()),
        Method::GET,
        "/patients/HC-42/assessments/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unsafe_patient_id_is_400() {
    let (status, body) = send_json(
        app(AppState::in_memory()),
        Method::GET,
        "/patients/HC.42/assessments",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid patient id: \"HC.42\"");
}

async fn send_raw(app: Router, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn repeated_item_in_body_is_400() {
    let (status, body) = send_raw(
        app(AppState::in_memory()),
        "/scales/GLASGOW/score",
        r#"{"responses": {"eye": 4, "eye": 1, "verbal": 5, "motor": 6}}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("duplicate response for item 'eye'"));

    let state = AppState::in_memory();
    let (status, _) = send_raw(
        app(state.clone()),
        "/patients/HC-42/assessments",
        r#"{"scale_id": "MRS", "responses": {"grade": 2, "grade": 3}}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, listed) =
        send_json(app(state), Method::GET, "/patients/HC-42/assessments", None).await;
    assert_eq!(listed, json!([]));
}
