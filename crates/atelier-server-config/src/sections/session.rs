// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session service configuration.
//!
//! The session service is an external GoTrue-compatible auth server. When no
//! URL is configured the server runs without session refresh.

use atelier_common_config::SecretString;
use serde::Deserialize;

pub const DEFAULT_ACCESS_COOKIE: &str = "atelier-access-token";
pub const DEFAULT_REFRESH_COOKIE: &str = "atelier-refresh-token";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct SessionConfig {
	/// Base URL of the auth service, e.g. `https://project.supabase.co`.
	pub url: Option<String>,
	/// Public (anon) API key sent as the `apikey` header.
	pub anon_key: Option<SecretString>,
	pub access_cookie: String,
	pub refresh_cookie: String,
	/// Whether written cookies carry the `Secure` attribute.
	pub cookie_secure: bool,
	pub timeout_secs: u64,
}

impl Default for SessionConfig {
	fn default() -> Self {
		SessionConfigLayer::default().finalize()
	}
}

impl SessionConfig {
	pub fn is_configured(&self) -> bool {
		self.url.is_some()
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfigLayer {
	#[serde(default)]
	pub url: Option<String>,
	#[serde(default)]
	pub anon_key: Option<SecretString>,
	#[serde(default)]
	pub access_cookie: Option<String>,
	#[serde(default)]
	pub refresh_cookie: Option<String>,
	#[serde(default)]
	pub cookie_secure: Option<bool>,
	#[serde(default)]
	pub timeout_secs: Option<u64>,
}

impl SessionConfigLayer {
	pub fn merge(&mut self, other: SessionConfigLayer) {
		if other.url.is_some() {
			self.url = other.url;
		}
		if other.anon_key.is_some() {
			self.anon_key = other.anon_key;
		}
		if other.access_cookie.is_some() {
			self.access_cookie = other.access_cookie;
		}
		if other.refresh_cookie.is_some() {
			self.refresh_cookie = other.refresh_cookie;
		}
		if other.cookie_secure.is_some() {
			self.cookie_secure = other.cookie_secure;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	pub fn finalize(self) -> SessionConfig {
		SessionConfig {
			url: self.url.map(|u| u.trim_end_matches('/').to_string()),
			anon_key: self.anon_key,
			access_cookie: self
				.access_cookie
				.unwrap_or_else(|| DEFAULT_ACCESS_COOKIE.to_string()),
			refresh_cookie: self
				.refresh_cookie
				.unwrap_or_else(|| DEFAULT_REFRESH_COOKIE.to_string()),
			cookie_secure: self.cookie_secure.unwrap_or(true),
			timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
		}
	}
}
