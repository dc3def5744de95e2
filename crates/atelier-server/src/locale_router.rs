// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale-prefix enforcement and session cookie propagation.
//!
//! Every request first goes through the session refresher. Paths under the
//! asset or API prefixes, and anything that looks like a file, pass through
//! untouched apart from cookie writes. Everything else must start with a
//! supported locale segment or is redirected to the default locale.
//!
//! The decision itself is [`route_request`], a pure function over the path,
//! query and refresh outcome. [`locale_layer`] only applies it.
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/{locale}", get(home))
//!     .layer(from_fn_with_state(state.clone(), locale_layer));
//! ```

use atelier_common_i18n::Locale;
use atelier_server_session::{RequestCookies, ResponseCookie, SessionRefresh};
use axum::{
	body::Body,
	extract::State,
	http::{header, HeaderValue, Request},
	middleware::Next,
	response::{IntoResponse, Redirect, Response},
};

use crate::api::AppState;

/// Prefix of framework-internal assets.
pub const INTERNAL_ASSETS_PREFIX: &str = "/_next";
/// Prefix of JSON API routes.
pub const API_PREFIX: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingConfig {
	pub default_locale: Locale,
}

impl RoutingConfig {
	pub fn new(default_locale: Locale) -> Self {
		Self { default_locale }
	}

	/// Whether `path` bypasses locale enforcement.
	pub fn is_exempt(&self, path: &str) -> bool {
		path.starts_with(INTERNAL_ASSETS_PREFIX) || path.starts_with(API_PREFIX) || path.contains('.')
	}

	/// The supported locale `path` is prefixed with, if any. The prefix must
	/// be a whole segment: `/fr` and `/fr/shop` match, `/french` does not.
	pub fn locale_prefix(&self, path: &str) -> Option<Locale> {
		Locale::from_path_prefix(path)
	}

	/// `/<default>` + `path`; the root maps to exactly `/<default>`.
	pub fn redirect_path(&self, path: &str) -> String {
		let code = self.default_locale.code();
		if path == "/" || path.is_empty() {
			format!("/{code}")
		} else if path.starts_with('/') {
			format!("/{code}{path}")
		} else {
			format!("/{code}/{path}")
		}
	}
}

impl Default for RoutingConfig {
	fn default() -> Self {
		Self::new(Locale::DEFAULT)
	}
}

/// What the router does with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
	/// Run the downstream handler, then attach `cookies` to its response.
	PassThrough { cookies: Vec<ResponseCookie> },
	/// Answer with a temporary redirect carrying `cookies`; the handler does
	/// not run.
	Redirect {
		location: String,
		cookies: Vec<ResponseCookie>,
	},
}

/// Decide how to route a request given the session refresh outcome.
pub fn route_request(
	config: &RoutingConfig,
	path: &str,
	query: Option<&str>,
	refresh: SessionRefresh,
) -> RouteDecision {
	let cookies = refresh.cookies;

	if config.is_exempt(path) || config.locale_prefix(path).is_some() {
		return RouteDecision::PassThrough { cookies };
	}

	let mut location = config.redirect_path(path);
	if let Some(query) = query.filter(|q| !q.is_empty()) {
		location.push('?');
		location.push_str(query);
	}

	RouteDecision::Redirect { location, cookies }
}

/// Axum middleware applying [`route_request`].
pub async fn locale_layer(
	State(state): State<AppState>,
	mut request: Request<Body>,
	next: Next,
) -> Response {
	let mut cookies = RequestCookies::from_headers(request.headers());
	let refresh = state.session_refresher.refresh(&cookies).await;
	tracing::trace!(status = ?refresh.status, writes = refresh.cookies.len(), "session refreshed");

	let decision = route_request(
		&state.routing,
		request.uri().path(),
		request.uri().query(),
		refresh,
	);

	match decision {
		RouteDecision::Redirect { location, cookies: writes } => {
			tracing::debug!(from = %request.uri(), to = %location, "redirecting to locale prefix");
			let mut response = Redirect::temporary(&location).into_response();
			append_set_cookies(&mut response, &writes);
			response
		}
		RouteDecision::PassThrough { cookies: writes } => {
			if !writes.is_empty() {
				cookies.apply(&writes);
				forward_cookies(&mut request, &cookies);
			}
			let mut response = next.run(request).await;
			append_set_cookies(&mut response, &writes);
			response
		}
	}
}

/// Replace the request's `Cookie` header so handlers see the refreshed
/// session.
fn forward_cookies(request: &mut Request<Body>, cookies: &RequestCookies) {
	let headers = request.headers_mut();
	headers.remove(header::COOKIE);
	if cookies.is_empty() {
		return;
	}
	match HeaderValue::from_str(&cookies.to_header_value()) {
		Ok(value) => {
			headers.insert(header::COOKIE, value);
		}
		Err(e) => tracing::warn!(error = %e, "refreshed cookies are not a valid header value"),
	}
}

fn append_set_cookies(response: &mut Response, writes: &[ResponseCookie]) {
	for cookie in writes {
		match HeaderValue::from_str(&cookie.to_set_cookie()) {
			Ok(value) => {
				response.headers_mut().append(header::SET_COOKIE, value);
			}
			Err(e) => tracing::warn!(cookie = %cookie.name, error = %e, "skipping invalid Set-Cookie"),
		}
	}
}
