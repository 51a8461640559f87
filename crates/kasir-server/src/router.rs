//! HTTP routing
//!
//! Every reply is JSON: unknown paths, unsupported methods and empty item
//! ids are answered by the fallbacks in `handlers::fallback`.

use crate::handlers::{self, fallback};
use crate::AppState;
use axum::{routing::get, Router};
use kasir_core::{Category, Product};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .fallback(fallback::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/health",
            get(handlers::health).fallback(fallback::method_not_allowed),
        )
        .route(
            "/produk",
            get(handlers::products::list)
                .post(handlers::products::create)
                .fallback(fallback::method_not_allowed),
        )
        .route(
            "/produk/",
            get(fallback::empty_id::<Product>)
                .put(fallback::empty_id::<Product>)
                .delete(fallback::empty_id::<Product>)
                .fallback(fallback::method_not_allowed),
        )
        .route(
            "/produk/:id",
            get(handlers::products::get)
                .put(handlers::products::update)
                .delete(handlers::products::delete)
                .fallback(fallback::method_not_allowed),
        )
        .route(
            "/categories",
            get(handlers::categories::list)
                .post(handlers::categories::create)
                .fallback(fallback::method_not_allowed),
        )
        .route(
            "/categories/",
            get(fallback::empty_id::<Category>)
                .put(fallback::empty_id::<Category>)
                .delete(fallback::empty_id::<Category>)
                .fallback(fallback::method_not_allowed),
        )
        .route(
            "/categories/:id",
            get(handlers::categories::get)
                .put(handlers::categories::update)
                .delete(handlers::categories::delete)
                .fallback(fallback::method_not_allowed),
        )
}
