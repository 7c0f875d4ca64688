#[macro_use]
extern crate tracing;

mod config;
pub mod error;
mod extractors;
mod handlers;
mod middlewares;
mod state;
pub mod uploads;
mod utils;
pub mod validation;

use crate::{middlewares::middlewares, utils::SignalHandler};
pub use config::*;
pub use state::*;
use tokio::net::TcpListener;
pub use uploads::UploadDir;

pub async fn run<S: StateTrait>(listener: TcpListener, state: S) -> anyhow::Result<()> {
    info!("listening on port {}", listener.local_addr()?.port());

    let routes = handlers::routes::<S>(&state);
    let app = middlewares(state, routes);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(SignalHandler::new().shutdown())
        .await?;

    Ok(())
}
