// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization support for the Atelier storefront.
//!
//! The storefront ships in English and French. Every page lives under a
//! locale prefix (`/en/...`, `/fr/...`) and renders labels from a static
//! [`Dictionary`].
//!
//! # Example
//!
//! ```
//! use atelier_common_i18n::{dictionary, Locale};
//!
//! let locale: Locale = "fr".parse().unwrap();
//! assert_eq!(dictionary(locale).nav.shop, "Boutique");
//!
//! assert!("de".parse::<Locale>().is_err());
//! assert_eq!(Locale::DEFAULT, Locale::En);
//! ```

mod dictionary;
mod locale;
mod resolve;

pub use dictionary::{
	dictionary, CheckoutLabels, CustomBuildLabels, Dictionary, FooterLabels, HomeLabels,
	NavLabels, ShopLabels,
};
pub use locale::{available_locales, is_supported, locale_info, Locale, LocaleInfo, UnsupportedLocale};
pub use resolve::resolve_locale;

pub use locale::{DEFAULT_LOCALE, LOCALES};
