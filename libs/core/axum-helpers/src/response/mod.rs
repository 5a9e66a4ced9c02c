//! Success envelope shared by every endpoint.
//!
//! ```json
//! { "status": 200, "message": "Success", "data": [...], "meta": {...} }
//! ```

mod meta;

pub use meta::{Meta, MetaError};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T> ApiResponse<T> {
    /// `200 OK` envelope.
    pub fn ok(message: impl Into<String>, data: Option<T>, meta: Option<Meta>) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: message.into(),
            data,
            meta,
        }
    }

    /// `201 Created` envelope.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::CREATED.as_u16(),
            message: message.into(),
            data: Some(data),
            meta: None,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
