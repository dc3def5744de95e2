// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the payment processor client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
	/// `STRIPE_SECRET_KEY` is not set. Raised before any network activity.
	#[error("Payment processor secret key is not configured (set STRIPE_SECRET_KEY)")]
	MissingSecretKey,

	/// The HTTP client could not be built.
	#[error("HTTP client error: {0}")]
	Client(reqwest::Error),

	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// The processor refused the secret key.
	#[error("Invalid payment processor secret key")]
	Unauthorized,

	/// The processor returned an error status.
	#[error("Payment processor error: {status} - {message}")]
	Api { status: u16, message: String },

	/// Invalid or unparseable response from the processor.
	#[error("Invalid response from payment processor: {0}")]
	InvalidResponse(String),
}

impl PaymentError {
	/// Whether the error comes from local configuration rather than the
	/// processor.
	pub fn is_configuration(&self) -> bool {
		matches!(self, PaymentError::MissingSecretKey | PaymentError::Client(_))
	}
}
