// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Payment processor configuration.
//!
//! The secret key is optional at load time: the server starts without it and
//! only requests that need a payment client fail.

use atelier_common_config::SecretString;
use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";
const DEFAULT_CURRENCY: &str = "cad";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct PaymentConfig {
	pub secret_key: Option<SecretString>,
	pub api_base: String,
	/// ISO 4217 code, lowercase, as the processor expects it.
	pub currency: String,
	pub timeout_secs: u64,
}

impl Default for PaymentConfig {
	fn default() -> Self {
		PaymentConfigLayer::default().finalize()
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfigLayer {
	#[serde(default)]
	pub secret_key: Option<SecretString>,
	#[serde(default)]
	pub api_base: Option<String>,
	#[serde(default)]
	pub currency: Option<String>,
	#[serde(default)]
	pub timeout_secs: Option<u64>,
}

impl PaymentConfigLayer {
	pub fn merge(&mut self, other: PaymentConfigLayer) {
		if other.secret_key.is_some() {
			self.secret_key = other.secret_key;
		}
		if other.api_base.is_some() {
			self.api_base = other.api_base;
		}
		if other.currency.is_some() {
			self.currency = other.currency;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	pub fn finalize(self) -> PaymentConfig {
		PaymentConfig {
			secret_key: self.secret_key.filter(|key| !key.is_blank()),
			api_base: self
				.api_base
				.map(|u| u.trim_end_matches('/').to_string())
				.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
			currency: self
				.currency
				.map(|c| c.to_ascii_lowercase())
				.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
			timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
		}
	}
}
