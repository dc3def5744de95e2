// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application state and router assembly.

use std::sync::Arc;

use atelier_server_config::ServerConfig;
use atelier_server_fx::FxClient;
use atelier_server_session::{HttpSessionRefresher, NoopSessionRefresher, SessionRefresher};
use axum::{
	http::Uri,
	middleware::from_fn_with_state,
	routing::{get, post},
	Json, Router,
};
use sqlx::sqlite::SqlitePool;
use utoipa::OpenApi;

use crate::{
	api_docs::ApiDoc,
	catalog::CategoryAccessor,
	db::{CategoryRepository, SiteSettingsRepository},
	error::ServerError,
	home_cards::HomeCardAccessor,
	locale_router::{locale_layer, RoutingConfig},
	routes,
};

/// Shared state, immutable after startup.
#[derive(Clone)]
pub struct AppState {
	pub config: Arc<ServerConfig>,
	pub pool: SqlitePool,
	pub routing: Arc<RoutingConfig>,
	pub catalog: CategoryAccessor,
	pub home_cards: HomeCardAccessor,
	pub session_refresher: Arc<dyn SessionRefresher>,
	pub fx_client: Arc<FxClient>,
}

/// Wire repositories and outbound clients from configuration.
///
/// Without a session service URL the router runs with a no-op refresher.
/// The payment client is not built here: checkout builds one per request so
/// a missing secret only affects checkout.
pub fn create_app_state(pool: SqlitePool, config: &ServerConfig) -> Result<AppState, ServerError> {
	let session_refresher: Arc<dyn SessionRefresher> = if config.session.is_configured() {
		let refresher = HttpSessionRefresher::from_config(&config.session)
			.map_err(|e| ServerError::Configuration(e.to_string()))?;
		Arc::new(refresher)
	} else {
		tracing::info!("session service not configured, session refresh disabled");
		Arc::new(NoopSessionRefresher)
	};

	let fx_client =
		FxClient::from_config(&config.fx).map_err(|e| ServerError::Configuration(e.to_string()))?;

	Ok(AppState {
		config: Arc::new(config.clone()),
		routing: Arc::new(RoutingConfig::new(config.site.default_locale)),
		catalog: CategoryAccessor::new(
			Arc::new(CategoryRepository::new(pool.clone())),
			&config.catalog.fallback,
		),
		home_cards: HomeCardAccessor::new(Arc::new(SiteSettingsRepository::new(pool.clone()))),
		session_refresher,
		fx_client: Arc::new(fx_client),
		pool,
	})
}

/// Build the router. Everything except `/health` sits behind the locale
/// router; unmatched paths fall through it too so unprefixed URLs redirect.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route(
			"/api/exchange-rate",
			get(routes::exchange_rate::exchange_rate),
		)
		.route("/api/checkout", post(routes::checkout::create_checkout))
		.route("/api/openapi.json", get(openapi_json))
		.route("/{locale}", get(routes::pages::home))
		.route("/{locale}/shop", get(routes::pages::shop))
		.route("/{locale}/shop/{slug}", get(routes::pages::category))
		.route("/{locale}/custom", get(routes::pages::custom_build))
		.route(
			"/{locale}/checkout/success",
			get(routes::pages::checkout_success),
		)
		.route(
			"/{locale}/checkout/cancel",
			get(routes::pages::checkout_cancel),
		)
		.fallback(not_found)
		.layer(from_fn_with_state(state.clone(), locale_layer))
		.route("/health", get(routes::health::health_check))
		.with_state(state)
}

/// GET /api/openapi.json
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
	Json(ApiDoc::openapi())
}

async fn not_found(uri: Uri) -> ServerError {
	ServerError::NotFound(uri.path().to_string())
}
