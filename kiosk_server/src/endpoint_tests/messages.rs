use actix_web::{http::StatusCode, test::TestRequest, web, web::ServiceConfig};
use kiosk_engine::{
    db_types::{Message, Pagination},
    traits::ChatApiError,
    ChatApi,
};

use super::{
    helpers::send_request,
    mocks::{sample_message, sample_thread, MockChatStore},
};
use crate::routes::{CreateMessageRoute, DeleteMessageRoute, GetMessageRoute, ThreadMessagesRoute, UpdateMessageRoute};

const MESSAGE_JSON: &str = r#"{"id":"m-1","thread_id":"t-100","content":"hi","created_at":"2024-02-29T13:30:00Z"}"#;

fn configure(cfg: &mut ServiceConfig) {
    let mut store = MockChatStore::new();
    store.expect_fetch_thread().returning(|id| match id {
        "t-100" => Ok(Some(sample_thread())),
        _ => Ok(None),
    });
    store.expect_create_message().returning(|new_message| {
        Ok(Message { thread_id: new_message.thread_id, content: new_message.content, ..sample_message() })
    });
    store.expect_fetch_message().returning(|id| match id {
        "m-1" => Ok(Some(sample_message())),
        _ => Ok(None),
    });
    store.expect_update_message().returning(|_| Ok(()));
    store.expect_delete_message().returning(|_| Ok(()));
    cfg.service(CreateMessageRoute::<MockChatStore>::new())
        .service(GetMessageRoute::<MockChatStore>::new())
        .service(UpdateMessageRoute::<MockChatStore>::new())
        .service(DeleteMessageRoute::<MockChatStore>::new())
        .app_data(web::Data::new(ChatApi::new(store)));
}

// The thread lookup fails, so the insert must never be attempted.
fn configure_missing_thread(cfg: &mut ServiceConfig) {
    let mut store = MockChatStore::new();
    store.expect_fetch_thread().returning(|_| Ok(None));
    store.expect_create_message().never();
    cfg.service(CreateMessageRoute::<MockChatStore>::new()).app_data(web::Data::new(ChatApi::new(store)));
}

fn configure_listing(cfg: &mut ServiceConfig) {
    let mut store = MockChatStore::new();
    store
        .expect_fetch_messages_for_thread()
        .withf(|thread_id, pagination| thread_id == "t-100" && *pagination == Pagination { limit: 5, offset: 0 })
        .returning(|_, _| Ok(vec![sample_message()]));
    store
        .expect_fetch_messages_for_thread()
        .withf(|thread_id, pagination| thread_id == "t-100" && *pagination == Pagination { limit: 2, offset: 3 })
        .returning(|_, _| Ok(vec![sample_message()]));
    store
        .expect_fetch_messages_for_thread()
        .withf(|thread_id, _| thread_id == "t-quiet")
        .returning(|_, _| Ok(vec![]));
    cfg.service(ThreadMessagesRoute::<MockChatStore>::new()).app_data(web::Data::new(ChatApi::new(store)));
}

fn configure_delete_failure(cfg: &mut ServiceConfig) {
    let mut store = MockChatStore::new();
    store.expect_delete_message().returning(|_| Err(ChatApiError::DatabaseError("disk I/O error".to_string())));
    cfg.service(DeleteMessageRoute::<MockChatStore>::new()).app_data(web::Data::new(ChatApi::new(store)));
}

#[actix_web::test]
async fn create_message_in_an_existing_thread() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::post().uri("/message").set_json(serde_json::json!({"thread_id": "t-100", "content": "hi"}));
    let (status, body) = send_request(req, configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, MESSAGE_JSON);
}

#[actix_web::test]
async fn create_message_requires_an_existing_thread() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::post().uri("/message").set_json(serde_json::json!({"thread_id": "t-404", "content": "hi"}));
    let (status, body) = send_request(req, configure_missing_thread).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"no result for this thread, please create a thread before creating a message"}"#);
}

#[actix_web::test]
async fn get_message_returns_the_row() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::get().uri("/message/m-1");
    let (status, body) = send_request(req, configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, MESSAGE_JSON);
}

#[actix_web::test]
async fn get_missing_message_is_a_404() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::get().uri("/message/m-404");
    let (status, body) = send_request(req, configure).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"No message found with id m-404"}"#);
}

#[actix_web::test]
async fn bad_pagination_parameters_fall_back_to_the_defaults() {
    let _ = env_logger::try_init().ok();
    // The mock only accepts (limit 5, offset 0) for this thread; anything else panics the test
    let req = TestRequest::get().uri("/thread/t-100/messages?limit=abc&offset=-4");
    let (status, body) = send_request(req, configure_listing).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, format!("[{MESSAGE_JSON}]"));
}

#[actix_web::test]
async fn explicit_pagination_parameters_are_used() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::get().uri("/thread/t-100/messages?limit=2&offset=3");
    let (status, _) = send_request(req, configure_listing).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn listing_an_empty_thread_is_a_404() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::get().uri("/thread/t-quiet/messages");
    let (status, body) = send_request(req, configure_listing).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"No message for this thread"}"#);
}

#[actix_web::test]
async fn update_message_reports_success() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::patch().uri("/message").set_json(serde_json::json!({"id": "m-1", "content": "hello"}));
    let (status, body) = send_request(req, configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":true,"message":"Message updated successfully"}"#);
}

#[actix_web::test]
async fn delete_message_reports_success() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::delete().uri("/message/m-1");
    let (status, body) = send_request(req, configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":true,"message":"message deleted successfully"}"#);
}

#[actix_web::test]
async fn delete_failure_sends_exactly_one_response() {
    let _ = env_logger::try_init().ok();
    let req = TestRequest::delete().uri("/message/m-1");
    let (status, body) = send_request(req, configure_delete_failure).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    // A single well-formed JSON error body, with no trailing success payload
    assert_eq!(body, r#"{"error":"An error occurred on the backend of the server. Database error: disk I/O error"}"#);
}
