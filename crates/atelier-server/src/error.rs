// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use atelier_server_payments::PaymentError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// Database operation failed.
	#[error("Database error: {0}")]
	Db(#[from] sqlx::Error),

	/// Database error from atelier-server-db.
	#[error("Database error: {0}")]
	DbError(#[from] atelier_server_db::DbError),

	/// Unknown locale or resource.
	#[error("Not found: {0}")]
	NotFound(String),

	/// Invalid request payload.
	#[error("Invalid request: {0}")]
	BadRequest(String),

	/// A required setting is missing or unusable.
	#[error("Configuration error: {0}")]
	Configuration(String),

	/// Upstream service returned an error.
	#[error("Upstream error: {0}")]
	UpstreamError(String),

	/// Internal server error.
	#[error("Internal error: {0}")]
	Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl ErrorResponse {
	fn new(error: &str, message: impl Into<String>) -> Self {
		Self {
			error: error.to_string(),
			message: message.into(),
		}
	}
}

impl From<PaymentError> for ServerError {
	fn from(e: PaymentError) -> Self {
		match e {
			PaymentError::MissingSecretKey | PaymentError::Client(_) => {
				ServerError::Configuration(e.to_string())
			}
			PaymentError::Unauthorized => {
				ServerError::Configuration("Payment processor rejected the secret key".to_string())
			}
			PaymentError::Timeout
			| PaymentError::Network(_)
			| PaymentError::Api { .. }
			| PaymentError::InvalidResponse(_) => ServerError::UpstreamError(e.to_string()),
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, body) = match &self {
			ServerError::Db(e) => {
				tracing::error!(error = %e, "database error");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					ErrorResponse::new("database_error", "A database error occurred"),
				)
			}
			ServerError::DbError(e) => {
				tracing::error!(error = %e, "database error");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					ErrorResponse::new("database_error", "A database error occurred"),
				)
			}
			ServerError::NotFound(what) => (
				StatusCode::NOT_FOUND,
				ErrorResponse::new("not_found", format!("Not found: {what}")),
			),
			ServerError::BadRequest(msg) => (
				StatusCode::BAD_REQUEST,
				ErrorResponse::new("bad_request", msg.clone()),
			),
			ServerError::Configuration(msg) => {
				tracing::error!(error = %msg, "configuration error");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					ErrorResponse::new("configuration_error", "The server is not configured for this operation"),
				)
			}
			ServerError::UpstreamError(msg) => {
				tracing::warn!(error = %msg, "upstream error");
				(
					StatusCode::BAD_GATEWAY,
					ErrorResponse::new("upstream_error", msg.clone()),
				)
			}
			ServerError::Internal(msg) => {
				tracing::error!(error = %msg, "internal error");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					ErrorResponse::new("internal_error", "An internal error occurred"),
				)
			}
		};

		(status, Json(body)).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_codes() {
		let cases = [
			(ServerError::NotFound("locale 'de'".into()), StatusCode::NOT_FOUND),
			(ServerError::BadRequest("no items".into()), StatusCode::BAD_REQUEST),
			(
				ServerError::Configuration("no key".into()),
				StatusCode::INTERNAL_SERVER_ERROR,
			),
			(ServerError::UpstreamError("boom".into()), StatusCode::BAD_GATEWAY),
		];
		for (error, status) in cases {
			assert_eq!(error.into_response().status(), status);
		}
	}

	#[test]
	fn missing_payment_secret_is_configuration_error() {
		let error = ServerError::from(PaymentError::MissingSecretKey);
		assert!(matches!(error, ServerError::Configuration(_)));
	}

	#[test]
	fn processor_api_error_is_upstream() {
		let error = ServerError::from(PaymentError::Api {
			status: 400,
			message: "bad".to_string(),
		});
		assert!(matches!(error, ServerError::UpstreamError(_)));
	}
}
