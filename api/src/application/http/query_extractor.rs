use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Query-string extractor reporting malformed parameters with the JSON
/// error envelope instead of axum's plain-text rejection.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     QueryExtractor(query): QueryExtractor<GetRoomsQuery>,
/// ) -> Result<Response<GetRoomsResponse>, ApiError> {
///     // query.name, query.page_number, ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryExtractor<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryExtractor<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(QueryExtractor(query))
    }
}
