use axum::response::Redirect;
use axum::routing::get;
use axum::{middleware, Router};
use sqlx::{Pool, Sqlite};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

pub mod album_handlers;
pub mod error;
pub mod forms;
pub mod method_override;
pub mod track_handlers;
pub mod views;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Sqlite>,
}

pub fn build_router(state: AppState) -> Router {
    let routes: Router = Router::new()
        // Root
        .route("/", get(|| async { Redirect::to("/albums") }))
        // Albums
        .route(
            "/albums",
            get(album_handlers::index).post(album_handlers::create),
        )
        .route("/albums/new", get(album_handlers::new))
        .route(
            "/albums/:id",
            get(album_handlers::show)
                .patch(album_handlers::update)
                .delete(album_handlers::destroy),
        )
        .route("/albums/:id/edit", get(album_handlers::edit))
        // Tracks, nested under their album
        .route(
            "/albums/:album_id/tracks",
            get(track_handlers::index).post(track_handlers::create),
        )
        .route("/albums/:album_id/tracks/new", get(track_handlers::new))
        .route(
            "/albums/:album_id/tracks/:id",
            get(track_handlers::show)
                .patch(track_handlers::update)
                .delete(track_handlers::destroy),
        )
        .route(
            "/albums/:album_id/tracks/:id/edit",
            get(track_handlers::edit),
        )
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Middleware attached with Router::layer runs after the route has been
    // matched, too late to change the verb. The override has to wrap the
    // whole router, so everything is funneled through it as a fallback.
    Router::new().fallback_service(
        ServiceBuilder::new()
            .layer(middleware::from_fn(method_override::method_override))
            .service(routes),
    )
}
