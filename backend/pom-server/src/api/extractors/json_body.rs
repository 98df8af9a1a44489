//! JSON body extractor with API-shaped rejections

use crate::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but a body that is not JSON, or has the wrong
/// shape, is rejected as an [`ApiError::BadRequest`] instead of axum's
/// plain-text rejection.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(JsonBody(value)),
                Err(rejection) => {
                    log::debug!("Rejected request body: {}", rejection);
                    Err(ApiError::BadRequest {
                        message: rejection.body_text(),
                        location: ErrorLocation::from(Location::caller()),
                    })
                }
            }
        }
    }
}
