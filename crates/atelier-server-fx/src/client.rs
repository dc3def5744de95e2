// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Exchange rate provider client.
//!
//! The provider answers `GET {provider_url}` with USD as the base currency:
//!
//! ```json
//! { "result": "success", "base_code": "USD", "rates": { "CAD": 1.37, ... } }
//! ```

use std::collections::HashMap;
use std::time::Duration;

use atelier_server_config::FxConfig;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::FxError;

const TARGET_CURRENCY: &str = "CAD";

#[derive(Debug, Clone)]
pub struct FxClient {
	http_client: Client,
	provider_url: String,
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
	#[serde(default)]
	rates: HashMap<String, f64>,
}

impl FxClient {
	pub fn from_config(config: &FxConfig) -> Result<Self, FxError> {
		let http_client = atelier_common_http::build_client(Duration::from_secs(config.timeout_secs))
			.map_err(FxError::Client)?;

		Ok(Self {
			http_client,
			provider_url: config.provider_url.clone(),
		})
	}

	/// Sets a custom provider URL (useful for testing).
	pub fn with_provider_url(mut self, url: impl Into<String>) -> Self {
		self.provider_url = url.into();
		self
	}

	/// Fetch the current USD→CAD rate. Each call hits the provider.
	#[instrument(skip(self))]
	pub async fn usd_to_cad(&self) -> Result<f64, FxError> {
		let response = self
			.http_client
			.get(&self.provider_url)
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					FxError::Timeout
				} else {
					FxError::Network(e)
				}
			})?;

		let status = response.status();
		debug!(status = %status, "exchange rate response");
		if !status.is_success() {
			return Err(FxError::Api {
				status: status.as_u16(),
			});
		}

		let body: RatesResponse = response
			.json()
			.await
			.map_err(|e| FxError::InvalidResponse(format!("JSON parse error: {e}")))?;

		let rate = body
			.rates
			.get(TARGET_CURRENCY)
			.copied()
			.ok_or_else(|| FxError::MissingRate {
				currency: TARGET_CURRENCY.to_string(),
			})?;

		if !rate.is_finite() || rate <= 0.0 {
			return Err(FxError::InvalidResponse(format!(
				"{TARGET_CURRENCY} rate {rate} is not positive"
			)));
		}

		Ok(rate)
	}
}
