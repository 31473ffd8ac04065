use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::{StatusCode, request::Parts};
use serde::de::DeserializeOwned;

use crate::error::LabError;

/// `Json<T>` whose rejections come back as `LabError` JSON bodies.
pub struct LabJson<T>(pub T);

impl<S, T> FromRequest<S> for LabJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = LabError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> LabError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return LabError::PayloadTooLarge;
    }
    LabError::BadRequest(rejection.body_text())
}

pub struct LabQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for LabQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = LabError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection| LabError::BadRequest(rejection.body_text()))
    }
}

pub struct LabPath<T>(pub T);

impl<S, T> FromRequestParts<S> for LabPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = LabError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|rejection| LabError::BadRequest(rejection.body_text()))
    }
}
