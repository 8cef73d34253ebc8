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
    extract::{ItemId, JsonBody},
    models::{GenreView, NameInput, NamePatch},
};

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<GenreView>>> {
    let genres = state.store.list_genres().await?;
    Ok(Json(genres.into_iter().map(GenreView::from).collect()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<NameInput>,
) -> AppResult<impl IntoResponse> {
    let id = state.store.create_genre(input).await?;
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/genres/{id}"))]))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    item: ItemId,
) -> AppResult<Json<GenreView>> {
    let id = item.resolve(Resource::Genre)?;
    Ok(Json(state.store.get_genre(id).await?.into()))
}

pub async fn replace(
    State(state): State<Arc<AppState>>,
    item: ItemId,
    JsonBody(input): JsonBody<NameInput>,
) -> AppResult<StatusCode> {
    let id = item.resolve(Resource::Genre)?;
    state.store.replace_genre(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn partial_update(
    State(state): State<Arc<AppState>>,
    item: ItemId,
    JsonBody(patch): JsonBody<NamePatch>,
) -> AppResult<StatusCode> {
    let id = item.resolve(Resource::Genre)?;
    state.store.patch_genre(id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    item: ItemId,
) -> AppResult<StatusCode> {
    let id = item.resolve(Resource::Genre)?;
    state.store.delete_genre(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
