// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::locale::Locale;

/// Resolve the effective locale from a preference and a configured default.
///
/// Resolution order (highest to lowest priority):
/// 1. `preferred` (if supported)
/// 2. `configured_default` (if supported)
/// 3. [`Locale::DEFAULT`]
///
/// ```
/// use atelier_common_i18n::{resolve_locale, Locale};
///
/// assert_eq!(resolve_locale(Some("fr"), "en"), Locale::Fr);
/// assert_eq!(resolve_locale(None, "fr"), Locale::Fr);
/// assert_eq!(resolve_locale(Some("de"), "xx"), Locale::En);
/// ```
pub fn resolve_locale(preferred: Option<&str>, configured_default: &str) -> Locale {
	preferred
		.and_then(|code| code.parse().ok())
		.or_else(|| configured_default.parse().ok())
		.unwrap_or(Locale::DEFAULT)
}
