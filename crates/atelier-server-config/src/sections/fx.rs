// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Exchange rate provider configuration.

use serde::Deserialize;

pub const DEFAULT_PROVIDER_URL: &str = "https://open.er-api.com/v6/latest/USD";
pub const DEFAULT_FALLBACK_USD_TO_CAD: f64 = 1.36;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct FxConfig {
	/// Endpoint returning USD-based rates (`{"rates": {"CAD": ...}}`).
	pub provider_url: String,
	/// Rate served when the provider is unreachable.
	pub fallback_usd_to_cad: f64,
	pub timeout_secs: u64,
}

impl Default for FxConfig {
	fn default() -> Self {
		FxConfigLayer::default().finalize()
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FxConfigLayer {
	#[serde(default)]
	pub provider_url: Option<String>,
	#[serde(default)]
	pub fallback_usd_to_cad: Option<f64>,
	#[serde(default)]
	pub timeout_secs: Option<u64>,
}

impl FxConfigLayer {
	pub fn merge(&mut self, other: FxConfigLayer) {
		if other.provider_url.is_some() {
			self.provider_url = other.provider_url;
		}
		if other.fallback_usd_to_cad.is_some() {
			self.fallback_usd_to_cad = other.fallback_usd_to_cad;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	pub fn finalize(self) -> FxConfig {
		FxConfig {
			provider_url: self
				.provider_url
				.unwrap_or_else(|| DEFAULT_PROVIDER_URL.to_string()),
			fallback_usd_to_cad: self
				.fallback_usd_to_cad
				.unwrap_or(DEFAULT_FALLBACK_USD_TO_CAD),
			timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = FxConfig::default();
		assert_eq!(config.provider_url, DEFAULT_PROVIDER_URL);
		assert_eq!(config.fallback_usd_to_cad, 1.36);
		assert_eq!(config.timeout_secs, 10);
	}

	#[test]
	fn test_deserialize_partial() {
		let layer: FxConfigLayer = toml::from_str("fallback_usd_to_cad = 1.4").unwrap();
		assert_eq!(layer.finalize().fallback_usd_to_cad, 1.4);
	}
}
