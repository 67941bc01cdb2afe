use actix_web::{http::StatusCode, test::TestRequest, web, web::ServiceConfig};
use kiosk_engine::{db_types::Thread, ChatApi};

use super::{
    helpers::send_request,
    mocks::{sample_thread, MockChatStore},
};
use crate::routes::{CreateThreadRoute, GetThreadRoute};

const THREAD_JSON: &str = r#"{"id":"t-100","title":"General","created_at":"2024-02-29T13:30:00Z"}"#;

fn configure(cfg: &mut ServiceConfig) {
    let mut store = MockChatStore::new();
    store.expect_create_thread().returning(|title| Ok(Thread { title, ..sample_thread() }));
    store.expect_fetch_thread().returning(|id| match id {
        "t-100" => Ok(Some(sample_thread())),
        _ => Ok(None),
    });
    cfg.service(CreateThreadRoute::<MockChatStore>::new())
        .service(GetThreadRoute::<MockChatStore>::new())
        .app_data(web::Data::new(ChatApi::new(store)));
}

#[actix_web::test]
async fn create_thread_returns_the_stored_row() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::post().uri("/threads").set_json(serde_json::json!({"title": "General"}));
    let (status, body) = send_request(req, configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, THREAD_JSON);
}

#[actix_web::test]
async fn empty_titles_are_passed_through() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::post().uri("/threads").set_json(serde_json::json!({"title": ""}));
    let (status, body) = send_request(req, configure).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#""title":"""#), "unexpected body: {body}");
}

#[actix_web::test]
async fn create_thread_with_a_malformed_body_is_a_400() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::post()
        .uri("/threads")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(r#"{"title""#);
    let (status, body) = send_request(req, configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with(r#"{"error":"Could not read request body:"#), "unexpected body: {body}");
}

#[actix_web::test]
async fn get_thread_reports_existence_only() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::get().uri("/thread/t-100");
    let (status, body) = send_request(req, configure).await;
    assert_eq!(status, StatusCode::OK);
    // Deliberately not the thread payload
    assert_eq!(body, r#""thread found""#);
}

#[actix_web::test]
async fn get_missing_thread_is_a_404() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::get().uri("/thread/t-404");
    let (status, body) = send_request(req, configure).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"No thread found with id t-404"}"#);
}
