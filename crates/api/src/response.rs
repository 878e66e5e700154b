//! Shared response envelope types for API handlers.
//!
//! Successful responses use a `{ "status": ..., "data": ... }` envelope.
//! Failures are rendered by [`crate::error::AppError`] and never carry
//! partial data.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Standard `{ "status": "ok" | "created", "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { status: "ok", data }
    }

    pub fn created(data: T) -> Self {
        Self {
            status: "created",
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for DataResponse<T> {
    fn into_response(self) -> Response {
        let code = if self.status == "created" {
            StatusCode::CREATED
        } else {
            StatusCode::OK
        };
        (code, Json(self)).into_response()
    }
}
