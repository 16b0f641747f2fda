//! HTTP surface of the screening service.
//!
//! ## Endpoints
//!
//! - `GET /` renders the screening form for the thirteen clinical
//!   parameters.
//! - `POST /predict` validates a form submission, encodes it, runs the
//!   classifier, and renders the result page. Invalid submissions get a 400
//!   carrying a single message; contract breaches behind the validator get
//!   a 500 with no internals disclosed.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cardio_server::{AppState, serve};
//!
//! serve("127.0.0.1:8080".parse()?, AppState::clinical()).await?;
//! ```

mod handlers;
pub mod pages;
mod request;
mod state;

use std::io;
use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;

pub use state::AppState;

/// Build the service router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::homepage))
        .route("/predict", post(handlers::predict))
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> io::Result<()> {
    let app = create_router(state);
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(addr = %local_addr, "screening server listening");
    axum::serve(listener, app).await
}
