// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Inbound cookie parsing and outbound `Set-Cookie` instructions.

use std::fmt;

use http::header::COOKIE;
use http::HeaderMap;

/// Cookies presented by the browser, in header order.
///
/// Duplicate names keep their first value for [`RequestCookies::get`], which
/// matches how browsers order same-named cookies (most specific path first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestCookies {
	entries: Vec<(String, String)>,
}

impl RequestCookies {
	/// Parse a single `Cookie` header value (`a=1; b=2`). Pairs without `=`
	/// are skipped.
	pub fn parse(header: &str) -> Self {
		let entries = header
			.split(';')
			.filter_map(|pair| {
				let (name, value) = pair.trim().split_once('=')?;
				let name = name.trim();
				if name.is_empty() {
					return None;
				}
				Some((name.to_string(), value.trim().to_string()))
			})
			.collect();
		Self { entries }
	}

	/// Collect cookies from every `Cookie` header on a request.
	pub fn from_headers(headers: &HeaderMap) -> Self {
		let entries = headers
			.get_all(COOKIE)
			.iter()
			.filter_map(|value| value.to_str().ok())
			.flat_map(|value| Self::parse(value).entries)
			.collect();
		Self { entries }
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_str())
	}

	/// Like [`RequestCookies::get`] but treats an empty value as absent.
	pub fn get_non_empty(&self, name: &str) -> Option<&str> {
		self.get(name).filter(|v| !v.is_empty())
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
	}

	/// Apply response cookie writes so the set reflects what the browser
	/// will hold afterwards. Removals drop the cookie entirely.
	pub fn apply(&mut self, writes: &[ResponseCookie]) {
		for write in writes {
			self.entries.retain(|(n, _)| n != &write.name);
			if !write.is_removal() {
				self.entries.push((write.name.clone(), write.value.clone()));
			}
		}
	}

	/// Render as a `Cookie` header value.
	pub fn to_header_value(&self) -> String {
		self.entries
			.iter()
			.map(|(n, v)| format!("{n}={v}"))
			.collect::<Vec<_>>()
			.join("; ")
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
	Strict,
	Lax,
	None,
}

impl SameSite {
	pub fn as_str(&self) -> &'static str {
		match self {
			SameSite::Strict => "Strict",
			SameSite::Lax => "Lax",
			SameSite::None => "None",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieAttributes {
	pub path: String,
	/// Seconds; `None` makes a browser-session cookie.
	pub max_age: Option<u64>,
	pub http_only: bool,
	pub secure: bool,
	pub same_site: SameSite,
}

impl CookieAttributes {
	/// Attributes for session cookies: site-wide, HttpOnly, SameSite=Lax.
	pub fn session(secure: bool) -> Self {
		Self {
			path: "/".to_string(),
			max_age: None,
			http_only: true,
			secure,
			same_site: SameSite::Lax,
		}
	}
}

/// One cookie write to attach to a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseCookie {
	pub name: String,
	pub value: String,
	pub attributes: CookieAttributes,
}

impl ResponseCookie {
	pub fn new(name: impl Into<String>, value: impl Into<String>, attributes: CookieAttributes) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
			attributes,
		}
	}

	/// A write that deletes the cookie: empty value, `Max-Age=0`.
	pub fn removal(name: impl Into<String>, mut attributes: CookieAttributes) -> Self {
		attributes.max_age = Some(0);
		Self::new(name, "", attributes)
	}

	pub fn with_max_age(mut self, seconds: u64) -> Self {
		self.attributes.max_age = Some(seconds);
		self
	}

	pub fn is_removal(&self) -> bool {
		self.attributes.max_age == Some(0)
	}

	/// Render as a `Set-Cookie` header value.
	pub fn to_set_cookie(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for ResponseCookie {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}={}", self.name, self.value)?;
		write!(f, "; Path={}", self.attributes.path)?;
		if let Some(max_age) = self.attributes.max_age {
			write!(f, "; Max-Age={max_age}")?;
		}
		if self.attributes.http_only {
			f.write_str("; HttpOnly")?;
		}
		if self.attributes.secure {
			f.write_str("; Secure")?;
		}
		write!(f, "; SameSite={}", self.attributes.same_site.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use http::HeaderValue;
	use proptest::prelude::*;

	#[test]
	fn parses_multiple_cookies_with_whitespace() {
		let cookies = RequestCookies::parse("  theme=dark ;atelier-access-token=abc;  cart=3");
		assert_eq!(cookies.len(), 3);
		assert_eq!(cookies.get("theme"), Some("dark"));
		assert_eq!(cookies.get("atelier-access-token"), Some("abc"));
		assert_eq!(cookies.get("cart"), Some("3"));
	}

	#[test]
	fn value_may_contain_equals() {
		let cookies = RequestCookies::parse("token=a.b=c==");
		assert_eq!(cookies.get("token"), Some("a.b=c=="));
	}

	#[test]
	fn malformed_pairs_are_skipped() {
		let cookies = RequestCookies::parse("novalue; =orphan; ok=1");
		assert_eq!(cookies.len(), 1);
		assert_eq!(cookies.get("ok"), Some("1"));
	}

	#[test]
	fn first_duplicate_wins() {
		let cookies = RequestCookies::parse("a=1; a=2");
		assert_eq!(cookies.get("a"), Some("1"));
	}

	#[test]
	fn empty_value_is_absent_for_get_non_empty() {
		let cookies = RequestCookies::parse("a=");
		assert_eq!(cookies.get("a"), Some(""));
		assert_eq!(cookies.get_non_empty("a"), None);
	}

	#[test]
	fn from_headers_joins_every_cookie_header() {
		let mut headers = HeaderMap::new();
		headers.append(COOKIE, HeaderValue::from_static("a=1"));
		headers.append(COOKIE, HeaderValue::from_static("b=2; c=3"));
		let cookies = RequestCookies::from_headers(&headers);
		assert_eq!(cookies.to_header_value(), "a=1; b=2; c=3");
	}

	#[test]
	fn apply_replaces_and_removes() {
		let mut cookies = RequestCookies::parse("keep=1; access=old; refresh=r");
		let attrs = CookieAttributes::session(true);
		cookies.apply(&[
			ResponseCookie::new("access", "new", attrs.clone()),
			ResponseCookie::removal("refresh", attrs),
		]);
		assert_eq!(cookies.to_header_value(), "keep=1; access=new");
	}

	#[test]
	fn set_cookie_renders_all_attributes() {
		let cookie = ResponseCookie::new("access", "tok", CookieAttributes::session(true)).with_max_age(3600);
		assert_eq!(
			cookie.to_set_cookie(),
			"access=tok; Path=/; Max-Age=3600; HttpOnly; Secure; SameSite=Lax"
		);
	}

	#[test]
	fn insecure_session_cookie_omits_secure() {
		let cookie = ResponseCookie::new("access", "tok", CookieAttributes::session(false));
		assert_eq!(cookie.to_set_cookie(), "access=tok; Path=/; HttpOnly; SameSite=Lax");
	}

	#[test]
	fn removal_has_empty_value_and_zero_max_age() {
		let cookie = ResponseCookie::removal("refresh", CookieAttributes::session(true));
		assert!(cookie.is_removal());
		assert_eq!(cookie.value, "");
		assert!(cookie.to_set_cookie().contains("Max-Age=0"));
	}

	proptest! {
		#[test]
		fn rendered_header_parses_back(
			pairs in prop::collection::btree_map("[a-z][a-z0-9_-]{0,12}", "[A-Za-z0-9._-]{0,16}", 0..6)
		) {
			let header = pairs
				.iter()
				.map(|(n, v)| format!("{n}={v}"))
				.collect::<Vec<_>>()
				.join("; ");
			let cookies = RequestCookies::parse(&header);
			prop_assert_eq!(cookies.len(), pairs.len());
			for (name, value) in &pairs {
				prop_assert_eq!(cookies.get(name), Some(value.as_str()));
			}
		}
	}
}
