// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locales and locale-prefix detection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A storefront locale. The set is closed; unknown codes fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	En,
	Fr,
}

/// Error returned when a locale code is not one of the supported locales.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0:?}")]
pub struct UnsupportedLocale(pub String);

impl Locale {
	/// The locale used when a request carries no locale prefix.
	pub const DEFAULT: Locale = Locale::En;

	pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

	pub fn code(self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::Fr => "fr",
		}
	}

	pub fn info(self) -> &'static LocaleInfo {
		match self {
			Locale::En => &LOCALES[0],
			Locale::Fr => &LOCALES[1],
		}
	}

	/// The locale whose prefix `path` carries, if any.
	///
	/// A prefix matches when the path is exactly `/<code>` or starts with
	/// `/<code>/`; `/english` does not carry the `en` prefix.
	///
	/// ```
	/// use atelier_common_i18n::Locale;
	///
	/// assert_eq!(Locale::from_path_prefix("/fr/shop"), Some(Locale::Fr));
	/// assert_eq!(Locale::from_path_prefix("/en"), Some(Locale::En));
	/// assert_eq!(Locale::from_path_prefix("/english"), None);
	/// assert_eq!(Locale::from_path_prefix("/"), None);
	/// ```
	pub fn from_path_prefix(path: &str) -> Option<Locale> {
		let rest = path.strip_prefix('/')?;
		Locale::ALL.into_iter().find(|locale| {
			rest.strip_prefix(locale.code())
				.is_some_and(|tail| tail.is_empty() || tail.starts_with('/'))
		})
	}
}

impl Default for Locale {
	fn default() -> Self {
		Locale::DEFAULT
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

impl FromStr for Locale {
	type Err = UnsupportedLocale;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"en" => Ok(Locale::En),
			"fr" => Ok(Locale::Fr),
			other => Err(UnsupportedLocale(other.to_string())),
		}
	}
}

/// Metadata about a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	/// ISO 639-1 code.
	pub code: &'static str,
	/// English name of the language.
	pub name: &'static str,
	/// Native name, used by the language switcher.
	pub native_name: &'static str,
	/// BCP 47 tag used for `<html lang>` and number formatting.
	pub html_lang: &'static str,
}

/// Code of [`Locale::DEFAULT`].
pub const DEFAULT_LOCALE: &str = "en";

/// All supported locales, in [`Locale::ALL`] order.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
		html_lang: "en-CA",
	},
	LocaleInfo {
		code: "fr",
		name: "French",
		native_name: "Français",
		html_lang: "fr-CA",
	},
];

/// Get metadata for a locale code.
pub fn locale_info(code: &str) -> Option<&'static LocaleInfo> {
	LOCALES.iter().find(|l| l.code == code)
}

/// Check if a locale code is supported.
pub fn is_supported(code: &str) -> bool {
	code.parse::<Locale>().is_ok()
}

/// Get all supported locales.
pub fn available_locales() -> &'static [LocaleInfo] {
	LOCALES
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn parse_supported_codes() {
		assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
		assert_eq!("fr".parse::<Locale>(), Ok(Locale::Fr));
	}

	#[test]
	fn parse_rejects_unknown_and_case_variants() {
		assert!("de".parse::<Locale>().is_err());
		assert!("EN".parse::<Locale>().is_err());
		assert!("".parse::<Locale>().is_err());
		assert!("en-CA".parse::<Locale>().is_err());
	}

	#[test]
	fn default_is_english() {
		assert_eq!(Locale::default(), Locale::En);
		assert_eq!(Locale::DEFAULT.code(), DEFAULT_LOCALE);
	}

	#[test]
	fn locales_table_matches_enum() {
		assert_eq!(LOCALES.len(), Locale::ALL.len());
		for locale in Locale::ALL {
			assert_eq!(locale.info().code, locale.code());
			assert_eq!(locale_info(locale.code()), Some(locale.info()));
		}
		assert!(locale_info("es").is_none());
	}

	#[test]
	fn serde_uses_lowercase_codes() {
		assert_eq!(serde_json::to_string(&Locale::Fr).unwrap(), "\"fr\"");
		let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
		assert_eq!(parsed, Locale::En);
	}

	#[test]
	fn path_prefix_detection() {
		assert_eq!(Locale::from_path_prefix("/en"), Some(Locale::En));
		assert_eq!(Locale::from_path_prefix("/en/"), Some(Locale::En));
		assert_eq!(Locale::from_path_prefix("/fr/custom"), Some(Locale::Fr));
		assert_eq!(Locale::from_path_prefix("/frames"), None);
		assert_eq!(Locale::from_path_prefix("/shop/en"), None);
		assert_eq!(Locale::from_path_prefix("en"), None);
		assert_eq!(Locale::from_path_prefix(""), None);
	}

	proptest! {
		#[test]
		fn prefixed_paths_are_detected(rest in "(/[a-z0-9-]{0,12}){0,3}") {
			for locale in Locale::ALL {
				let path = format!("/{}{}", locale.code(), rest);
				prop_assert_eq!(Locale::from_path_prefix(&path), Some(locale));
			}
		}

		#[test]
		fn is_supported_agrees_with_parse(code in "[a-z]{0,3}") {
			prop_assert_eq!(is_supported(&code), code == "en" || code == "fr");
		}
	}
}
