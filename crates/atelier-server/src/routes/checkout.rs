// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Checkout session creation.

use atelier_common_i18n::Locale;
use atelier_server_payments::{CheckoutSessionParams, LineItem, PaymentClient};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{api::AppState, error::ServerError};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CheckoutItem {
	pub name: String,
	/// Price of one unit in cents.
	pub unit_amount: i64,
	pub quantity: u32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CheckoutRequest {
	/// Locale of the page the checkout started from (`en` or `fr`).
	pub locale: String,
	pub items: Vec<CheckoutItem>,
	#[serde(default)]
	pub customer_email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
	pub id: String,
	pub url: Option<String>,
}

impl CheckoutRequest {
	/// Check the cart and resolve the locale.
	pub fn validate(&self) -> Result<Locale, ServerError> {
		let locale: Locale = self
			.locale
			.parse()
			.map_err(|e| ServerError::BadRequest(format!("{e}")))?;

		if self.items.is_empty() {
			return Err(ServerError::BadRequest("items must not be empty".into()));
		}

		for (i, item) in self.items.iter().enumerate() {
			if item.name.trim().is_empty() {
				return Err(ServerError::BadRequest(format!("items[{i}].name must not be empty")));
			}
			if item.unit_amount <= 0 {
				return Err(ServerError::BadRequest(format!(
					"items[{i}].unit_amount must be positive"
				)));
			}
			if item.quantity == 0 {
				return Err(ServerError::BadRequest(format!(
					"items[{i}].quantity must be positive"
				)));
			}
		}

		if let Some(email) = &self.customer_email {
			if !email.contains('@') {
				return Err(ServerError::BadRequest("customer_email is not an email address".into()));
			}
		}

		Ok(locale)
	}
}

#[utoipa::path(
	post,
	path = "/api/checkout",
	request_body = CheckoutRequest,
	responses(
		(status = 200, description = "Hosted checkout session created", body = CheckoutResponse),
		(status = 400, description = "Invalid cart", body = crate::error::ErrorResponse),
		(status = 500, description = "Payment processor not configured", body = crate::error::ErrorResponse),
		(status = 502, description = "Payment processor error", body = crate::error::ErrorResponse)
	),
	tag = "checkout"
)]
/// POST /api/checkout - Create a hosted checkout session.
pub async fn create_checkout(
	State(state): State<AppState>,
	Json(body): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, ServerError> {
	let locale = body.validate()?;
	let client = PaymentClient::from_config(&state.config.payment)?;

	let params = CheckoutSessionParams {
		line_items: body
			.items
			.iter()
			.map(|item| LineItem {
				name: item.name.trim().to_string(),
				unit_amount: item.unit_amount,
				quantity: item.quantity,
			})
			.collect(),
		success_url: state.config.site.page_url(locale, "checkout/success"),
		cancel_url: state.config.site.page_url(locale, "checkout/cancel"),
		customer_email: body.customer_email.clone(),
		locale: Some(locale.code().to_string()),
	};

	let session = client.create_checkout_session(&params).await?;
	tracing::info!(session_id = %session.id, locale = %locale, "checkout session created");

	Ok(Json(CheckoutResponse {
		id: session.id,
		url: session.url,
	}))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn request(items: Vec<CheckoutItem>) -> CheckoutRequest {
		CheckoutRequest {
			locale: "fr".to_string(),
			items,
			customer_email: None,
		}
	}

	fn item(unit_amount: i64, quantity: u32) -> CheckoutItem {
		CheckoutItem {
			name: "Pilot 40".to_string(),
			unit_amount,
			quantity,
		}
	}

	#[test]
	fn valid_cart_resolves_locale() {
		assert_eq!(request(vec![item(98_000, 2)]).validate().unwrap(), Locale::Fr);
	}

	#[test]
	fn empty_cart_is_rejected() {
		assert!(matches!(
			request(vec![]).validate(),
			Err(ServerError::BadRequest(_))
		));
	}

	#[test]
	fn non_positive_amounts_are_rejected() {
		assert!(request(vec![item(0, 1)]).validate().is_err());
		assert!(request(vec![item(-5, 1)]).validate().is_err());
		assert!(request(vec![item(100, 0)]).validate().is_err());
	}

	#[test]
	fn unknown_locale_is_rejected() {
		let mut req = request(vec![item(100, 1)]);
		req.locale = "de".to_string();
		assert!(matches!(req.validate(), Err(ServerError::BadRequest(_))));
	}

	#[test]
	fn malformed_email_is_rejected() {
		let mut req = request(vec![item(100, 1)]);
		req.customer_email = Some("nobody".to_string());
		assert!(req.validate().is_err());
	}
}
