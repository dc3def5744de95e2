// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FxError {
	#[error("HTTP client error: {0}")]
	Client(reqwest::Error),

	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	#[error("Request timed out")]
	Timeout,

	#[error("Exchange rate provider error: status {status}")]
	Api { status: u16 },

	#[error("Invalid response from exchange rate provider: {0}")]
	InvalidResponse(String),

	#[error("Exchange rate provider has no {currency} rate")]
	MissingRate { currency: String },
}
