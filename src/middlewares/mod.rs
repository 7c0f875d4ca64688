use crate::{error, StateTrait};
use axum::{
    response::{IntoResponse, Response},
    Router,
};
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    request_id::MakeRequestUuid,
    ServiceBuilderExt,
};

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic payload"
    };

    error!("request handler panicked: {}", details);

    error::INTERNAL.into_response()
}

pub fn middlewares<S: StateTrait>(state: S, router: Router<S>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let middlewares = ServiceBuilder::new()
        .layer(CatchPanicLayer::custom(handle_panic))
        .set_x_request_id(MakeRequestUuid)
        .trace_for_http()
        .propagate_x_request_id()
        .compression()
        .layer(cors_layer)
        .into_inner();

    router.layer(middlewares).with_state(state)
}
