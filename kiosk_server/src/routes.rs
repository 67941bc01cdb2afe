//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Since each worker thread processes its requests sequentially, handlers which block the current
//! thread will stop the worker from processing new requests. All store and payment-provider calls
//! are therefore expressed as futures and awaited, so worker threads keep serving other requests
//! while a call is in flight.
use actix_web::{get, web, HttpResponse, Responder};
use campay_tools::CampayApi;
use kiosk_engine::{
    db_types::{NewMessage, NewOrder, UpdateMessageRequest},
    traits::{ChatManagement, OrderManagement},
    ChatApi,
    OrderApi,
};
use log::*;

use crate::{
    data_objects::{JsonResponse, MessageListQuery, NewThreadParams, OrderConfirmation},
    errors::ServerError,
};

/// Description attached to every collection request sent to the payment provider.
const PAYMENT_DESCRIPTION: &str = "request payment";

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Threads  ----------------------------------------------------
route!(create_thread => Post "/threads" impl ChatManagement);
/// Creates a new thread from `{"title": ...}`. The title is passed through as-is; an empty string
/// is accepted. Responds with the stored thread row.
pub async fn create_thread<B: ChatManagement>(
    api: web::Data<ChatApi<B>>,
    body: web::Json<NewThreadParams>,
) -> Result<HttpResponse, ServerError> {
    let params = body.into_inner();
    let thread = api.create_thread(params.title).await?;
    debug!("💻️ Thread [{}] created", thread.id);
    Ok(HttpResponse::Ok().json(thread))
}

route!(get_thread => Get "/thread/{id}" impl ChatManagement);
/// Existence check for a thread. Deliberately does not return the thread payload; callers only
/// learn whether the id resolves.
pub async fn get_thread<B: ChatManagement>(
    path: web::Path<String>,
    api: web::Data<ChatApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    match api.thread_by_id(&id).await? {
        Some(_) => Ok(HttpResponse::Ok().json("thread found")),
        None => Err(ServerError::NoRecordFound(format!("No thread found with id {id}"))),
    }
}

//----------------------------------------------   Messages  ----------------------------------------------------
route!(create_message => Post "/message" impl ChatManagement);
/// Creates a message in an existing thread. The thread lookup is the precondition: posting into a
/// thread that does not exist is rejected before any insert is attempted.
pub async fn create_message<B: ChatManagement>(
    api: web::Data<ChatApi<B>>,
    body: web::Json<NewMessage>,
) -> Result<HttpResponse, ServerError> {
    let new_message = body.into_inner();
    if api.thread_by_id(&new_message.thread_id).await?.is_none() {
        debug!("💻️ Rejecting message for nonexistent thread [{}]", new_message.thread_id);
        return Err(ServerError::MissingThread);
    }
    let message = api.create_message(new_message).await?;
    Ok(HttpResponse::Ok().json(message))
}

route!(get_message => Get "/message/{id}" impl ChatManagement);
pub async fn get_message<B: ChatManagement>(
    path: web::Path<String>,
    api: web::Data<ChatApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    match api.message_by_id(&id).await? {
        Some(message) => Ok(HttpResponse::Ok().json(message)),
        None => Err(ServerError::NoRecordFound(format!("No message found with id {id}"))),
    }
}

route!(thread_messages => Get "/thread/{id}/messages" impl ChatManagement);
/// Lists one page of a thread's messages. `limit` and `offset` are sanitized independently; bad
/// values fall back to the defaults instead of erroring (see [`MessageListQuery::pagination`]).
pub async fn thread_messages<B: ChatManagement>(
    path: web::Path<String>,
    query: web::Query<MessageListQuery>,
    api: web::Data<ChatApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let thread_id = path.into_inner();
    let pagination = query.pagination();
    let messages = api.messages_for_thread(&thread_id, pagination).await?;
    if messages.is_empty() {
        return Err(ServerError::NoRecordFound("No message for this thread".to_string()));
    }
    Ok(HttpResponse::Ok().json(messages))
}

route!(update_message => Patch "/message" impl ChatManagement);
/// Unconditional content update. There is no existence precondition: updating a message that does
/// not exist affects zero rows and still reports success.
pub async fn update_message<B: ChatManagement>(
    api: web::Data<ChatApi<B>>,
    body: web::Json<UpdateMessageRequest>,
) -> Result<HttpResponse, ServerError> {
    api.update_message(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(JsonResponse::success("Message updated successfully")))
}

route!(delete_message => Delete "/message/{id}" impl ChatManagement);
pub async fn delete_message<B: ChatManagement>(
    path: web::Path<String>,
    api: web::Data<ChatApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    api.delete_message(&id).await?;
    Ok(HttpResponse::Ok().json(JsonResponse::success("message deleted successfully")))
}

//----------------------------------------------   Orders  ----------------------------------------------------
route!(create_order => Post "/order" impl OrderManagement);
/// Creates an order and immediately asks the payment provider to collect the amount from the
/// order's phone number.
///
/// The two steps are not transactional: the insert commits on its own, so a failed collection
/// request leaves the order row behind with no transaction reference. There is no retry and no
/// compensation; the caller sees a 500 and the order keeps its initial status.
pub async fn create_order<B: OrderManagement>(
    api: web::Data<OrderApi<B>>,
    payments: web::Data<CampayApi>,
    body: web::Json<NewOrder>,
) -> Result<HttpResponse, ServerError> {
    let order = api.create_order(body.into_inner()).await?;
    info!("💻️ Order [{}] created. Requesting collection of {} XAF from {}", order.id, order.amount, order.number);
    let reference = payments.request_collection(&order.number, &order.amount, PAYMENT_DESCRIPTION).await?;
    info!("💻️ Collection for order [{}] registered under reference {reference}", order.id);
    Ok(HttpResponse::Ok().json(OrderConfirmation { order, transaction_reference: reference }))
}
