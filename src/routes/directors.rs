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
    models::{DirectorView, NameInput, NamePatch},
};

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<DirectorView>>> {
    let directors = state.store.list_directors().await?;
    Ok(Json(directors.into_iter().map(DirectorView::from).collect()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<NameInput>,
) -> AppResult<impl IntoResponse> {
    let id = state.store.create_director(input).await?;
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/directors/{id}"))]))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    item: ItemId,
) -> AppResult<Json<DirectorView>> {
    let id = item.resolve(Resource::Director)?;
    Ok(Json(state.store.get_director(id).await?.into()))
}

pub async fn replace(
    State(state): State<Arc<AppState>>,
    item: ItemId,
    JsonBody(input): JsonBody<NameInput>,
) -> AppResult<StatusCode> {
    let id = item.resolve(Resource::Director)?;
    state.store.replace_director(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn partial_update(
    State(state): State<Arc<AppState>>,
    item: ItemId,
    JsonBody(patch): JsonBody<NamePatch>,
) -> AppResult<StatusCode> {
    let id = item.resolve(Resource::Director)?;
    state.store.patch_director(id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    item: ItemId,
) -> AppResult<StatusCode> {
    let id = item.resolve(Resource::Director)?;
    state.store.delete_director(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
