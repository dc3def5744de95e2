// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: defaults, TOML files and environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use atelier_common_config::{env_var, load_secret_env};
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{
	DatabaseConfigLayer, FxConfigLayer, HttpConfigLayer, LoggingConfigLayer, PaymentConfigLayer,
	SessionConfigLayer, SiteConfigLayer,
};

/// Payment secret, named the way the processor's tooling names it.
pub const PAYMENT_SECRET_ENV: &str = "STRIPE_SECRET_KEY";
/// Legacy name of the public site URL, still honoured after the new one.
pub const LEGACY_SITE_URL_ENV: &str = "NEXT_PUBLIC_SITE_URL";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is not an error.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/atelier/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `ATELIER_SERVER_<SECTION>_<FIELD>`, plus the processor's own
/// `STRIPE_SECRET_KEY`.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		Ok(ServerConfigLayer {
			http: Some(load_http_from_env()?),
			site: Some(load_site_from_env()),
			database: Some(load_database_from_env()),
			session: Some(load_session_from_env()?),
			payment: Some(load_payment_from_env()?),
			fx: Some(load_fx_from_env()?),
			catalog: None,
			logging: Some(load_logging_from_env()),
		})
	}
}

fn var(name: &str) -> Option<String> {
	env_var(&[name])
}

fn env_bool(name: &str) -> Option<bool> {
	var(name).map(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

fn env_parse<T: FromStr>(name: &str, kind: &str) -> Result<Option<T>, ConfigError> {
	match var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid {kind} value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn load_http_from_env() -> Result<HttpConfigLayer, ConfigError> {
	Ok(HttpConfigLayer {
		host: var("ATELIER_SERVER_HOST"),
		port: env_parse("ATELIER_SERVER_PORT", "u16")?,
	})
}

fn load_site_from_env() -> SiteConfigLayer {
	SiteConfigLayer {
		url: env_var(&["ATELIER_SERVER_SITE_URL", LEGACY_SITE_URL_ENV]),
		default_locale: var("ATELIER_SERVER_DEFAULT_LOCALE"),
	}
}

fn load_database_from_env() -> DatabaseConfigLayer {
	DatabaseConfigLayer {
		url: var("ATELIER_SERVER_DATABASE_URL"),
	}
}

fn load_session_from_env() -> Result<SessionConfigLayer, ConfigError> {
	Ok(SessionConfigLayer {
		url: var("ATELIER_SERVER_SESSION_URL"),
		anon_key: load_secret_env("ATELIER_SERVER_SESSION_ANON_KEY")?,
		access_cookie: var("ATELIER_SERVER_SESSION_ACCESS_COOKIE"),
		refresh_cookie: var("ATELIER_SERVER_SESSION_REFRESH_COOKIE"),
		cookie_secure: env_bool("ATELIER_SERVER_SESSION_COOKIE_SECURE"),
		timeout_secs: env_parse("ATELIER_SERVER_SESSION_TIMEOUT_SECS", "u64")?,
	})
}

fn load_payment_from_env() -> Result<PaymentConfigLayer, ConfigError> {
	Ok(PaymentConfigLayer {
		secret_key: load_secret_env(PAYMENT_SECRET_ENV)?,
		api_base: var("ATELIER_SERVER_PAYMENT_API_BASE"),
		currency: var("ATELIER_SERVER_PAYMENT_CURRENCY"),
		timeout_secs: env_parse("ATELIER_SERVER_PAYMENT_TIMEOUT_SECS", "u64")?,
	})
}

fn load_fx_from_env() -> Result<FxConfigLayer, ConfigError> {
	Ok(FxConfigLayer {
		provider_url: var("ATELIER_SERVER_FX_PROVIDER_URL"),
		fallback_usd_to_cad: env_parse("ATELIER_SERVER_FX_FALLBACK_USD_TO_CAD", "f64")?,
		timeout_secs: env_parse("ATELIER_SERVER_FX_TIMEOUT_SECS", "u64")?,
	})
}

fn load_logging_from_env() -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: var("ATELIER_SERVER_LOG_LEVEL"),
		json: env_bool("ATELIER_SERVER_LOG_JSON"),
	}
}
