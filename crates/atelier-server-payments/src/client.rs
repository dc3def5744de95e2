// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Payment processor API client.

use std::time::Duration;

use atelier_common_secret::SecretString;
use atelier_server_config::PaymentConfig;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, instrument};

use crate::error::PaymentError;
use crate::types::{CheckoutSession, CheckoutSessionParams};

/// API version every request is pinned to.
pub const API_VERSION: &str = "2025-02-24.acacia";

/// Client for the payment processor's REST API.
///
/// Construction performs no network activity.
#[derive(Debug, Clone)]
pub struct PaymentClient {
	http_client: Client,
	secret_key: SecretString,
	api_base: String,
	currency: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
	error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
	message: Option<String>,
}

impl PaymentClient {
	/// Build a client from configuration, failing fast when the secret key is
	/// absent.
	pub fn from_config(config: &PaymentConfig) -> Result<Self, PaymentError> {
		let secret_key = config
			.secret_key
			.clone()
			.ok_or(PaymentError::MissingSecretKey)?;
		let http_client = atelier_common_http::build_client(Duration::from_secs(config.timeout_secs))
			.map_err(PaymentError::Client)?;

		Ok(Self {
			http_client,
			secret_key,
			api_base: config.api_base.clone(),
			currency: config.currency.clone(),
		})
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.api_base = base_url.into().trim_end_matches('/').to_string();
		self
	}

	pub fn api_version(&self) -> &'static str {
		API_VERSION
	}

	pub fn currency(&self) -> &str {
		&self.currency
	}

	/// Create a hosted checkout session in payment mode.
	#[instrument(skip(self, params), fields(items = params.line_items.len()))]
	pub async fn create_checkout_session(
		&self,
		params: &CheckoutSessionParams,
	) -> Result<CheckoutSession, PaymentError> {
		let url = format!("{}/v1/checkout/sessions", self.api_base);
		let form = self.checkout_form(params);

		debug!(url = %url, "creating checkout session");

		let response = self
			.http_client
			.post(&url)
			.bearer_auth(self.secret_key.expose())
			.header("Stripe-Version", API_VERSION)
			.form(&form)
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return PaymentError::Timeout;
				}
				error!(error = %e, "Network error during checkout session request");
				PaymentError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "received checkout session response");

		if !status.is_success() {
			let status_code = status.as_u16();
			let body = response.text().await.unwrap_or_default();

			if status_code == 401 {
				error!(status = status_code, "processor rejected secret key");
				return Err(PaymentError::Unauthorized);
			}

			let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
				.ok()
				.and_then(|envelope| envelope.error.message)
				.unwrap_or(body);
			error!(status = status_code, message = %message, "processor API error");
			return Err(PaymentError::Api {
				status: status_code,
				message,
			});
		}

		let session: CheckoutSession = response.json().await.map_err(|e| {
			error!(error = %e, "Failed to parse checkout session");
			PaymentError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		debug!(session_id = %session.id, "checkout session created");
		Ok(session)
	}

	fn checkout_form(&self, params: &CheckoutSessionParams) -> Vec<(String, String)> {
		let mut form = vec![
			("mode".to_string(), "payment".to_string()),
			("success_url".to_string(), params.success_url.clone()),
			("cancel_url".to_string(), params.cancel_url.clone()),
		];

		if let Some(email) = &params.customer_email {
			form.push(("customer_email".to_string(), email.clone()));
		}
		if let Some(locale) = &params.locale {
			form.push(("locale".to_string(), locale.clone()));
		}

		for (i, item) in params.line_items.iter().enumerate() {
			let prefix = format!("line_items[{i}]");
			form.push((format!("{prefix}[quantity]"), item.quantity.to_string()));
			form.push((
				format!("{prefix}[price_data][currency]"),
				self.currency.clone(),
			));
			form.push((
				format!("{prefix}[price_data][unit_amount]"),
				item.unit_amount.to_string(),
			));
			form.push((
				format!("{prefix}[price_data][product_data][name]"),
				item.name.clone(),
			));
		}

		form
	}
}
