// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! USD→CAD exchange rate for client-side price conversion.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateResponse {
	pub usd_to_cad: f64,
}

#[utoipa::path(
	get,
	path = "/api/exchange-rate",
	responses(
		(status = 200, description = "Current USD to CAD rate, or the configured fallback when the provider is unavailable", body = ExchangeRateResponse)
	),
	tag = "pricing"
)]
/// GET /api/exchange-rate - Current USD→CAD rate.
pub async fn exchange_rate(State(state): State<AppState>) -> Json<ExchangeRateResponse> {
	let usd_to_cad = match state.fx_client.usd_to_cad().await {
		Ok(rate) => rate,
		Err(e) => {
			let fallback = state.config.fx.fallback_usd_to_cad;
			tracing::warn!(error = %e, fallback, "exchange rate provider failed, using fallback rate");
			fallback
		}
	};

	Json(ExchangeRateResponse { usd_to_cad })
}
