use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use crate::AppState;

mod directors;
mod genres;
mod movies;

/// Collection routes answer with and without the trailing slash.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies", get(movies::list).post(movies::create))
        .route("/movies/", get(movies::list).post(movies::create))
        .route(
            "/movies/{id}",
            get(movies::get)
                .put(movies::replace)
                .patch(movies::partial_update)
                .delete(movies::delete),
        )
        .route("/directors", get(directors::list).post(directors::create))
        .route("/directors/", get(directors::list).post(directors::create))
        .route(
            "/directors/{id}",
            get(directors::get)
                .put(directors::replace)
                .patch(directors::partial_update)
                .delete(directors::delete),
        )
        .route("/genres", get(genres::list).post(genres::create))
        .route("/genres/", get(genres::list).post(genres::create))
        .route(
            "/genres/{id}",
            get(genres::get)
                .put(genres::replace)
                .patch(genres::partial_update)
                .delete(genres::delete),
        )
        .with_state(state)
}
