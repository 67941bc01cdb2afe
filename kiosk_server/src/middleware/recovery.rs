//! Panic-recovery middleware for the kiosk server.
//! This middleware is installed as the outermost layer of the app.
//!
//! A panic that unwinds out of request handling is caught here and converted into the uniform 500
//! JSON error response. The process and all other in-flight requests are unaffected; only the
//! panicking request observes the failure.

use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use futures::future::{ok, Ready};
use futures::{Future, FutureExt};
use log::error;

use crate::errors::ServerError;

pub struct RecoveryMiddlewareFactory;

impl RecoveryMiddlewareFactory {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        RecoveryMiddlewareFactory
    }
}

impl<S, B> Transform<S, ServiceRequest> for RecoveryMiddlewareFactory
    where
        S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
        S::Future: 'static,
        B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RecoveryMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(RecoveryMiddlewareService { service: Rc::new(service) })
    }
}

pub struct RecoveryMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RecoveryMiddlewareService<S>
    where
        S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
        S::Future: 'static,
        B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        Box::pin(async move {
            match AssertUnwindSafe(service.call(req)).catch_unwind().await {
                Ok(result) => result,
                Err(panic) => {
                    let detail = panic
                        .downcast_ref::<&str>()
                        .map(|s| (*s).to_string())
                        .or_else(|| panic.downcast_ref::<String>().cloned())
                        .unwrap_or_else(|| "<non-string panic payload>".to_string());
                    error!("💥️ Panic while handling a request: {detail}");
                    Err(ServerError::HandlerPanic.into())
                },
            }
        })
    }
}
