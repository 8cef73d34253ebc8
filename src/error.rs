use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resource {
    Movie,
    Director,
    Genre,
}

impl Resource {
    pub fn not_found_message(self) -> &'static str {
        match self {
            Resource::Movie => "Такого фильма нет в базе данных",
            Resource::Director => "Такого продюсера нет в базе данных",
            Resource::Genre => "Такого жанра нет в базе данных",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{}", .resource.not_found_message())]
    NotFound { resource: Resource, id: String },
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] sea_orm::DbErr),
}

impl AppError {
    pub fn not_found(resource: Resource, id: impl ToString) -> Self {
        Self::NotFound { resource, id: id.to_string() }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "not_found",
            AppError::Validation(_) => "validation_error",
            AppError::Store(_) => "store_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    kind: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Store(err) => tracing::error!(error = %err, "store call failed"),
            AppError::NotFound { resource, id } => {
                tracing::debug!(?resource, %id, "lookup missed")
            },
            AppError::Validation(msg) => tracing::debug!(%msg, "rejected request"),
        }
        let body = ErrorBody { kind: self.kind(), message: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_localized_message_per_resource() {
        let err = AppError::not_found(Resource::Director, 7);
        assert_eq!(err.to_string(), "Такого продюсера нет в базе данных");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.kind(), "not_found");
    }

    #[test]
    fn kinds_map_to_distinct_statuses() {
        assert_eq!(AppError::Validation("bad".into()).status(), StatusCode::BAD_REQUEST);
        let store = AppError::from(sea_orm::DbErr::Custom("disk full".into()));
        assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(store.to_string().contains("disk full"));
    }
}
