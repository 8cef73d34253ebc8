use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    AppState,
    error::{AppResult, Resource},
    extract::{ItemId, JsonBody, QueryParams},
    models::{MovieFilter, MovieInput, MoviePatch, MovieView},
};

/// `director_id` and `genre_id` filters combine with AND.
pub async fn list(
    State(state): State<Arc<AppState>>,
    QueryParams(filter): QueryParams<MovieFilter>,
) -> AppResult<Json<Vec<MovieView>>> {
    let movies = state.store.list_movies(filter).await?;
    Ok(Json(movies.into_iter().map(MovieView::from).collect()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<MovieInput>,
) -> AppResult<impl IntoResponse> {
    let id = state.store.create_movie(input).await?;
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/movies/{id}"))]))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    item: ItemId,
) -> AppResult<Json<MovieView>> {
    let id = item.resolve(Resource::Movie)?;
    Ok(Json(state.store.get_movie(id).await?.into()))
}

pub async fn replace(
    State(state): State<Arc<AppState>>,
    item: ItemId,
    JsonBody(input): JsonBody<MovieInput>,
) -> AppResult<StatusCode> {
    let id = item.resolve(Resource::Movie)?;
    state.store.replace_movie(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn partial_update(
    State(state): State<Arc<AppState>>,
    item: ItemId,
    JsonBody(patch): JsonBody<MoviePatch>,
) -> AppResult<StatusCode> {
    let id = item.resolve(Resource::Movie)?;
    state.store.patch_movie(id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    item: ItemId,
) -> AppResult<StatusCode> {
    let id = item.resolve(Resource::Movie)?;
    state.store.delete_movie(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
