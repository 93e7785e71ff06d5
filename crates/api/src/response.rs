//! API response types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Standard API response wrapper.
///
/// Read endpoints answer with `msg` plus `result` or `results`; mutations
/// answer with `message` and optionally the affected resource.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<T>,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    fn empty() -> Self {
        Self {
            msg: None,
            message: None,
            result: None,
            results: None,
            status: StatusCode::OK,
        }
    }

    /// `{msg, result}`.
    pub fn result(msg: &'static str, data: T) -> Self {
        Self {
            msg: Some(msg),
            result: Some(data),
            ..Self::empty()
        }
    }

    /// `{msg, results}`.
    pub fn results(msg: &'static str, data: T) -> Self {
        Self {
            msg: Some(msg),
            results: Some(data),
            ..Self::empty()
        }
    }

    /// `{message, result}`.
    pub fn message_with(message: &'static str, data: T) -> Self {
        Self {
            message: Some(message),
            result: Some(data),
            ..Self::empty()
        }
    }

    /// Answer with `201 Created` instead of `200 OK`.
    #[must_use]
    pub fn created(mut self) -> Self {
        self.status = StatusCode::CREATED;
        self
    }
}

impl ApiResponse<()> {
    /// `{message}` only.
    #[must_use]
    pub fn message(message: &'static str) -> Self {
        Self {
            message: Some(message),
            ..Self::empty()
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
