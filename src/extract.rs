//! Extractors that reject with [`AppError`] instead of axum's plain-text
//! rejections, so every failure shares one response shape.

use axum::extract::{FromRequest, FromRequestParts, Request};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult, Resource};

/// JSON request body that must be an object. Arrays never reach the input
/// structs, so fields cannot be filled by position.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(map) = axum::Json::<Map<String, Value>>::from_request(req, state).await?;
        serde_json::from_value(Value::Object(map))
            .map(JsonBody)
            .map_err(|err| AppError::Validation(err.to_string()))
    }
}

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);

/// Raw `{id}` path segment, resolved per resource.
#[derive(FromRequestParts, serde::Deserialize)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ItemId(pub String);

impl ItemId {
    /// Integers that cannot be a stored id are reported as missing rows;
    /// anything that is not an integer is a validation error.
    pub fn resolve(&self, resource: Resource) -> AppResult<i32> {
        let raw = self.0.as_str();
        if let Ok(id) = raw.parse::<i32>() {
            return Ok(id);
        }
        let digits = raw.strip_prefix('-').unwrap_or(raw);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::not_found(resource, raw));
        }
        Err(AppError::Validation(format!("Invalid URL: `{raw}` is not an integer id")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_ids_resolve() {
        assert_eq!(ItemId("42".into()).resolve(Resource::Movie).unwrap(), 42);
    }

    #[test]
    fn out_of_range_ids_are_not_found() {
        for raw in ["3000000000", "-3000000000", "99999999999999999999999"] {
            let err = ItemId(raw.into()).resolve(Resource::Genre).unwrap_err();
            assert_eq!(err.kind(), "not_found", "{raw}");
            assert_eq!(err.to_string(), "Такого жанра нет в базе данных");
        }
    }

    #[test]
    fn non_numeric_ids_are_validation_errors() {
        for raw in ["abc", "-", "1.5", "12a"] {
            assert_eq!(ItemId(raw.into()).resolve(Resource::Movie).unwrap_err().kind(), "validation_error");
        }
    }
}
