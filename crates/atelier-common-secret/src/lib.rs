// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Redacting wrapper for credentials.
//!
//! The storefront holds a handful of long-lived credentials (the payment
//! processor secret key, the session service anon key). They are wrapped in
//! [`Secret<T>`] so that:
//!
//! - `Debug`, `Display` and `Serialize` print `[REDACTED]`
//! - the inner value is zeroized on drop
//! - reading the value requires an explicit `.expose()`
//!
//! ```
//! use atelier_common_secret::Secret;
//!
//! let key = Secret::new("sk_test_123".to_string());
//! assert_eq!(format!("{key}"), "[REDACTED]");
//! assert_eq!(key.expose(), "sk_test_123");
//! ```

use std::fmt;
use zeroize::Zeroize;

/// Placeholder printed in place of any secret value.
pub const REDACTED: &str = "[REDACTED]";

/// A value that must never reach logs, config dumps or API responses.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Secret<T>
where
	T: Zeroize,
{
	inner: T,
}

/// The common case: a secret string.
pub type SecretString = Secret<String>;

impl<T> Secret<T>
where
	T: Zeroize,
{
	pub fn new(inner: T) -> Self {
		Self { inner }
	}

	/// Access the wrapped value. Call sites opt in explicitly.
	pub fn expose(&self) -> &T {
		&self.inner
	}

	/// Clone the wrapped value out. The original stays zeroize-on-drop.
	pub fn into_inner(self) -> T
	where
		T: Clone,
	{
		self.inner.clone()
	}
}

impl SecretString {
	/// True when the wrapped string is empty or whitespace.
	pub fn is_blank(&self) -> bool {
		self.inner.trim().is_empty()
	}
}

impl<T> Clone for Secret<T>
where
	T: Zeroize + Clone,
{
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl<T> fmt::Debug for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Secret").field(&REDACTED).finish()
	}
}

impl<T> fmt::Display for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl<T> PartialEq for Secret<T>
where
	T: Zeroize + PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}

impl<T> Eq for Secret<T> where T: Zeroize + Eq {}

#[cfg(feature = "serde")]
mod serde_impl {
	use super::{Secret, REDACTED};
	use serde::{Deserialize, Deserializer, Serialize, Serializer};
	use zeroize::Zeroize;

	impl<T> Serialize for Secret<T>
	where
		T: Serialize + Zeroize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			serializer.serialize_str(REDACTED)
		}
	}

	impl<'de, T> Deserialize<'de> for Secret<T>
	where
		T: Deserialize<'de> + Zeroize,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			T::deserialize(deserializer).map(Secret::new)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn debug_and_display_are_redacted() {
		let key = Secret::new("sk_live_abcdef".to_string());
		assert_eq!(format!("{key}"), REDACTED);
		let debug = format!("{key:?}");
		assert!(debug.contains(REDACTED));
		assert!(!debug.contains("sk_live_abcdef"));
	}

	#[test]
	fn option_secret_debug_is_redacted() {
		let key: Option<SecretString> = Some(Secret::new("sk_live_abcdef".to_string()));
		assert!(!format!("{key:?}").contains("sk_live_abcdef"));
	}

	#[test]
	fn expose_and_into_inner_return_value() {
		let key = Secret::new("anon-key".to_string());
		assert_eq!(key.expose(), "anon-key");
		assert_eq!(key.clone().into_inner(), "anon-key");
	}

	#[test]
	fn blank_detection() {
		assert!(Secret::new("   ".to_string()).is_blank());
		assert!(Secret::new(String::new()).is_blank());
		assert!(!Secret::new("sk_test".to_string()).is_blank());
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serialize_is_redacted_and_deserialize_populates() {
		let key = Secret::new("sk_test_123".to_string());
		let json = serde_json::to_string(&key).unwrap();
		assert_eq!(json, format!("\"{REDACTED}\""));

		let parsed: SecretString = serde_json::from_str("\"sk_test_456\"").unwrap();
		assert_eq!(parsed.expose(), "sk_test_456");
	}

	proptest! {
		#[test]
		fn display_never_contains_secret(inner in "[a-zA-Z0-9_]{8,40}") {
			prop_assume!(!inner.contains("REDACTED"));
			let secret = Secret::new(inner.clone());
			let displayed = format!("{secret}");
			let debugged = format!("{secret:?}");
			prop_assert!(!displayed.contains(&inner));
			prop_assert!(!debugged.contains(&inner));
		}
	}
}
