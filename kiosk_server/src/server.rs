use std::time::Duration;

use actix_web::{dev::Server, error::JsonPayloadError, http::KeepAlive, middleware::Logger, web, App, HttpRequest, HttpServer};
use campay_tools::CampayApi;
use kiosk_engine::{ChatApi, OrderApi, SqliteDatabase};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    middleware::RecoveryMiddlewareFactory,
    routes::{
        health,
        CreateMessageRoute,
        CreateOrderRoute,
        CreateThreadRoute,
        DeleteMessageRoute,
        GetMessageRoute,
        GetThreadRoute,
        ThreadMessagesRoute,
        UpdateMessageRoute,
    },
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let payments = CampayApi::new(config.campay.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, db, payments)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(
    config: ServerConfig,
    db: SqliteDatabase,
    payments: CampayApi,
) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        let chat_api = ChatApi::new(db.clone());
        let order_api = OrderApi::new(db.clone());
        // The recovery middleware is wrapped last, making it the outermost layer: a panic anywhere
        // below it becomes a 500 for that request only.
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("ksk::access_log"))
            .wrap(RecoveryMiddlewareFactory::new())
            .app_data(web::Data::new(chat_api))
            .app_data(web::Data::new(order_api))
            .app_data(web::Data::new(payments.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(health)
            .service(CreateThreadRoute::<SqliteDatabase>::new())
            .service(GetThreadRoute::<SqliteDatabase>::new())
            .service(ThreadMessagesRoute::<SqliteDatabase>::new())
            .service(CreateMessageRoute::<SqliteDatabase>::new())
            .service(GetMessageRoute::<SqliteDatabase>::new())
            .service(UpdateMessageRoute::<SqliteDatabase>::new())
            .service(DeleteMessageRoute::<SqliteDatabase>::new())
            .service(CreateOrderRoute::<SqliteDatabase>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}

/// Gives request-body decode failures the same `{"error": ...}` shape as every other error.
pub(crate) fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ServerError::InvalidRequestBody(err.to_string()).into()
}
