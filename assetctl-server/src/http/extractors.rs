//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use sqlx::pool::PoolConnection;
use sqlx::Sqlite;

use super::error::ApiError;
use super::state::AppState;
use crate::db::DbError;
use crate::models::ValidationError;

/// Request-scoped database connection.
///
/// Acquired from the pool before the handler runs and returned to it
/// when the handler's future is dropped, whatever the outcome.
pub struct DbConn(pub PoolConnection<Sqlite>);

impl FromRequestParts<AppState> for DbConn {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let conn = state.pool().acquire().await.map_err(DbError::from)?;
        Ok(Self(conn))
    }
}

/// JSON body extractor that reports failures as `ApiError::Validation`
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::Body {
                reason: rejection.body_text(),
            })
        })?;
        Ok(Self(value))
    }
}

/// Query string extractor that reports failures as `ApiError::Validation`
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::Query {
                    reason: rejection.body_text(),
                })
            })?;
        Ok(Self(value))
    }
}
