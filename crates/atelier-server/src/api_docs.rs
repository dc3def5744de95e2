// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OpenAPI documentation for atelier-server.
//!
//! Covers the JSON API; page shells are a contract with the presentation
//! tier and are not listed. The document is served at `/api/openapi.json`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
	info(
		title = "Atelier Storefront API",
		description = "Checkout, pricing and health endpoints of the Atelier watch storefront.",
		license(name = "Proprietary")
	),
	servers(
		(url = "/", description = "Local server")
	),
	tags(
		(name = "health", description = "Health checks"),
		(name = "pricing", description = "Currency conversion for price display"),
		(name = "checkout", description = "Hosted checkout sessions")
	),
	paths(
		crate::routes::health::health_check,
		crate::routes::exchange_rate::exchange_rate,
		crate::routes::checkout::create_checkout,
	),
	components(schemas(
		crate::routes::health::HealthResponse,
		crate::routes::health::HealthStatus,
		crate::routes::exchange_rate::ExchangeRateResponse,
		crate::routes::checkout::CheckoutRequest,
		crate::routes::checkout::CheckoutItem,
		crate::routes::checkout::CheckoutResponse,
		crate::error::ErrorResponse,
	))
)]
pub struct ApiDoc;
