use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, patch},
};

/// Protected Router Module
///
/// Every route here requires a verified bearer token (enforced by the
/// middleware layered on in `create_router`) plus a route-specific permission
/// string, checked inside each handler before the repository is touched.
pub fn protected_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // GET /actors?page=N       requires get:actors
        // POST /actors             requires post:actors
        .route(
            "/actors",
            get(handlers::get_actors).post(handlers::create_actor),
        )
        // PATCH/DELETE /actors/{id}
        // Partial update and permanent removal of a single record.
        .route(
            "/actors/{id}",
            patch(handlers::update_actor).delete(handlers::delete_actor),
        )
        // GET /movies?page=N       requires get:movies
        // POST /movies             requires post:movies
        .route(
            "/movies",
            get(handlers::get_movies).post(handlers::create_movie),
        )
        // PATCH/DELETE /movies/{id}
        .route(
            "/movies/{id}",
            patch(handlers::update_movie).delete(handlers::delete_movie),
        )
}
