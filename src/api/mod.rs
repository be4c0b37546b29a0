mod handlers;
mod page;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::bridge::{dispatch, Bridge, DispatchHandle};
use crate::table::LaunchTable;

pub use page::render_index;

/// Shared handler state: the bridge over the immutable table, and the handle
/// to the loop that serializes control events.
#[derive(Clone)]
pub struct AppState {
    pub bridge: Arc<Bridge>,
    pub dispatcher: DispatchHandle,
}

impl AppState {
    /// Build the bridge for `table` and start its dispatch loop.
    /// Must be called from within a tokio runtime.
    pub fn new(table: Arc<LaunchTable>) -> Self {
        let bridge = Arc::new(Bridge::new(table));
        let dispatcher = dispatch::spawn(bridge.clone());
        Self { bridge, dispatcher }
    }
}

pub fn create_router(table: Arc<LaunchTable>) -> Router {
    let api = Router::new()
        // Page layout and charts
        .route("/layout", get(handlers::get_layout))
        .route("/charts", get(handlers::get_initial_charts))
        .route("/charts/success-pie", get(handlers::get_success_pie))
        .route("/charts/payload-scatter", get(handlers::get_payload_scatter))
        // Control changes
        .route("/callback", post(handlers::callback))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(AppState::new(table))
}
