use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        FromRequestParts, Path, Query,
    },
    http::{header, request::Parts, HeaderMap},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Query string extractor that reports malformed parameters through the
/// standard error envelope instead of axum's plain-text rejection.
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppQueryRejection(rejection)),
        }
    }
}

pub struct AppQueryRejection(QueryRejection);

impl IntoResponse for AppQueryRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            QueryRejection::FailedToDeserializeQueryString(err) => {
                format!("Invalid query parameter: {}", err.body_text())
            }
            _ => "Failed to parse query string".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// Path extractor for record identifiers. An identifier that cannot be
/// parsed can never match a record, so it is reported as not found.
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppPathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppPathRejection(rejection)),
        }
    }
}

pub struct AppPathRejection(PathRejection);

impl IntoResponse for AppPathRejection {
    fn into_response(self) -> Response {
        match self.0 {
            PathRejection::FailedToDeserializePathParams(err) => {
                AppError::NotFound(format!("No record matches: {}", err.body_text()))
                    .into_response()
            }
            other => {
                AppError::Internal(format!("Path extraction failed: {}", other.body_text()))
                    .into_response()
            }
        }
    }
}

/// Scheme and authority the client used to reach the service, e.g.
/// `http://localhost:3000`. Used as the default origin of hyperlinks.
///
/// The origin announced by a reverse proxy (`X-Forwarded-Proto` and
/// `X-Forwarded-Host`) is kept apart and only used when the deployment
/// trusts those headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    direct: String,
    forwarded: Option<String>,
}

impl RequestOrigin {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            direct: origin.into(),
            forwarded: None,
        }
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        let host = headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .unwrap_or("localhost");

        let forwarded_proto = forwarded_value(headers, "x-forwarded-proto");
        let forwarded_host = forwarded_value(headers, "x-forwarded-host");
        let forwarded = (forwarded_proto.is_some() || forwarded_host.is_some()).then(|| {
            format!(
                "{}://{}",
                forwarded_proto.unwrap_or("http"),
                forwarded_host.unwrap_or(host)
            )
        });

        Self {
            direct: format!("http://{}", host),
            forwarded,
        }
    }

    /// Origin to build links with
    pub fn resolve(&self, trust_forwarded: bool) -> &str {
        match &self.forwarded {
            Some(forwarded) if trust_forwarded => forwarded,
            _ => &self.direct,
        }
    }
}

/// First entry of a possibly comma-separated forwarding header.
fn forwarded_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl<S> FromRequestParts<S> for RequestOrigin
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
