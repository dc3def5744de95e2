// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the session service client.
//!
//! None of these reach the caller of [`crate::SessionRefresher::refresh`];
//! they decide which cookie writes (if any) the refresher produces.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
	/// The session service URL is not configured.
	#[error("Session service is not configured")]
	NotConfigured,

	/// The HTTP client could not be built.
	#[error("HTTP client error: {0}")]
	Client(reqwest::Error),

	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// The service refused the presented refresh token.
	#[error("Session rejected by the auth service (status {status})")]
	Rejected { status: u16 },

	/// The service answered with an unexpected status.
	#[error("Session service error: {status} - {message}")]
	Api { status: u16, message: String },

	/// The service answered 2xx with a body we could not read.
	#[error("Invalid response from session service: {0}")]
	InvalidResponse(String),
}
