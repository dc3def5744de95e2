// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the Atelier storefront server.
//!
//! Configuration is loaded once at startup into [`ServerConfig`] and injected
//! into the components that need it; nothing reads the environment after
//! that.
//!
//! - Layered configuration from defaults, a TOML file and the environment
//! - `ATELIER_SERVER_*` environment variables, plus `STRIPE_SECRET_KEY`
//! - Secrets wrapped in [`atelier_common_config::SecretString`]
//!
//! ```ignore
//! let config = atelier_server_config::load_config()?;
//! println!("listening on {}", config.socket_addr());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

use std::collections::HashSet;
use std::path::PathBuf;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub site: SiteConfig,
	pub database: DatabaseConfig,
	pub session: SessionConfig,
	pub payment: PaymentConfig,
	pub fx: FxConfig,
	pub catalog: CatalogConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables
/// 2. Config file (`/etc/atelier/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(config_path: impl Into<PathBuf>) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge sources in precedence order and finalize.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	finalize(merged)
}

/// Finalize a merged layer into resolved, validated config.
pub fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let config = ServerConfig {
		http: layer.http.unwrap_or_default().finalize(),
		site: layer.site.unwrap_or_default().finalize(),
		database: layer.database.unwrap_or_default().finalize(),
		session: layer.session.unwrap_or_default().finalize(),
		payment: layer.payment.unwrap_or_default().finalize(),
		fx: layer.fx.unwrap_or_default().finalize(),
		catalog: layer.catalog.unwrap_or_default().finalize(),
		logging: layer.logging.unwrap_or_default().finalize(),
	};

	validate_config(&config)?;

	info!(
		host = %config.http.host,
		port = config.http.port,
		site_url = %config.site.url,
		default_locale = %config.site.default_locale,
		database = %config.database.url,
		session_configured = config.session.is_configured(),
		payment_configured = config.payment.secret_key.is_some(),
		fallback_categories = config.catalog.fallback.len(),
		"Server configuration loaded"
	);

	Ok(config)
}

/// Validate cross-field configuration rules.
fn validate_config(config: &ServerConfig) -> Result<(), ConfigError> {
	if config.catalog.fallback.is_empty() {
		return Err(ConfigError::Validation(
			"catalog.fallback must list at least one category".to_string(),
		));
	}

	let mut seen = HashSet::new();
	for entry in &config.catalog.fallback {
		if entry.slug.trim().is_empty() {
			return Err(ConfigError::Validation(
				"catalog.fallback contains an empty slug".to_string(),
			));
		}
		if !seen.insert(entry.slug.as_str()) {
			return Err(ConfigError::Validation(format!(
				"catalog.fallback slug '{}' is duplicated",
				entry.slug
			)));
		}
	}

	let rate = config.fx.fallback_usd_to_cad;
	if !rate.is_finite() || rate <= 0.0 {
		return Err(ConfigError::InvalidValue {
			key: "fx.fallback_usd_to_cad".to_string(),
			message: format!("must be a positive number, got {rate}"),
		});
	}

	for (key, url) in [
		("site.url", Some(config.site.url.as_str())),
		("session.url", config.session.url.as_deref()),
		("payment.api_base", Some(config.payment.api_base.as_str())),
		("fx.provider_url", Some(config.fx.provider_url.as_str())),
	] {
		if let Some(url) = url {
			if !(url.starts_with("http://") || url.starts_with("https://")) {
				return Err(ConfigError::InvalidValue {
					key: key.to_string(),
					message: format!("'{url}' is not an http(s) URL"),
				});
			}
		}
	}

	Ok(())
}
