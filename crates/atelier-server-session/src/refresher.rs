// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session validation and token refresh against a GoTrue-compatible auth
//! service.

use std::time::Duration;

use async_trait::async_trait;
use atelier_common_secret::SecretString;
use atelier_server_config::SessionConfig;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::cookies::{CookieAttributes, RequestCookies, ResponseCookie};
use crate::error::SessionError;

/// Lifetime of the refresh-token cookie: 400 days, the ceiling browsers
/// accept for `Max-Age`.
pub const REFRESH_COOKIE_MAX_AGE_SECS: u64 = 400 * 24 * 60 * 60;

/// What the refresher concluded about the inbound session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
	/// No session cookies were presented.
	Anonymous,
	/// The access token was accepted as is.
	Valid,
	/// New tokens were issued.
	Refreshed,
	/// The service refused the session; cookies are cleared.
	Rejected,
	/// The service could not be reached; the request proceeds without a
	/// session and without cookie writes.
	Unavailable,
}

/// Outcome of a refresh: the cookies to write on whatever response the
/// request ends up producing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRefresh {
	pub status: SessionStatus,
	pub cookies: Vec<ResponseCookie>,
}

impl SessionRefresh {
	pub fn without_writes(status: SessionStatus) -> Self {
		Self {
			status,
			cookies: Vec::new(),
		}
	}

	pub fn anonymous() -> Self {
		Self::without_writes(SessionStatus::Anonymous)
	}
}

#[async_trait]
pub trait SessionRefresher: Send + Sync {
	/// Validate and, when needed, refresh the session carried by `cookies`.
	/// Never fails: service problems degrade to "no session".
	async fn refresh(&self, cookies: &RequestCookies) -> SessionRefresh;
}

/// Refresher used when no session service is configured.
#[derive(Debug, Clone, Default)]
pub struct NoopSessionRefresher;

#[async_trait]
impl SessionRefresher for NoopSessionRefresher {
	async fn refresh(&self, _cookies: &RequestCookies) -> SessionRefresh {
		SessionRefresh::anonymous()
	}
}

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
	refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
	access_token: String,
	refresh_token: String,
	expires_in: u64,
}

/// Refresher backed by the auth service's `/auth/v1` endpoints.
#[derive(Debug, Clone)]
pub struct HttpSessionRefresher {
	http_client: Client,
	base_url: String,
	anon_key: Option<SecretString>,
	access_cookie: String,
	refresh_cookie: String,
	attributes: CookieAttributes,
}

impl HttpSessionRefresher {
	pub fn from_config(config: &SessionConfig) -> Result<Self, SessionError> {
		let base_url = config.url.clone().ok_or(SessionError::NotConfigured)?;
		let http_client = atelier_common_http::build_client(Duration::from_secs(config.timeout_secs))
			.map_err(SessionError::Client)?;

		Ok(Self {
			http_client,
			base_url,
			anon_key: config.anon_key.clone(),
			access_cookie: config.access_cookie.clone(),
			refresh_cookie: config.refresh_cookie.clone(),
			attributes: CookieAttributes::session(config.cookie_secure),
		})
	}

	/// Sets a custom base URL for the service (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into().trim_end_matches('/').to_string();
		self
	}

	fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
		match &self.anon_key {
			Some(key) => builder.header("apikey", key.expose().as_str()),
			None => builder,
		}
	}

	/// `Ok(true)` when the service accepts the access token, `Ok(false)`
	/// when it refuses it.
	#[instrument(skip(self, access_token))]
	async fn validate(&self, access_token: &str) -> Result<bool, SessionError> {
		let url = format!("{}/auth/v1/user", self.base_url);
		let response = self
			.request(self.http_client.get(&url))
			.bearer_auth(access_token)
			.send()
			.await
			.map_err(map_send_error)?;

		let status = response.status();
		debug!(status = %status, "session validation response");
		match status {
			s if s.is_success() => Ok(true),
			StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(false),
			_ => Err(api_error(response).await),
		}
	}

	#[instrument(skip(self, refresh_token))]
	async fn exchange(&self, refresh_token: &str) -> Result<TokenResponse, SessionError> {
		let url = format!("{}/auth/v1/token?grant_type=refresh_token", self.base_url);
		let response = self
			.request(self.http_client.post(&url))
			.json(&RefreshRequest { refresh_token })
			.send()
			.await
			.map_err(map_send_error)?;

		let status = response.status();
		debug!(status = %status, "token refresh response");
		match status {
			s if s.is_success() => response
				.json::<TokenResponse>()
				.await
				.map_err(|e| SessionError::InvalidResponse(format!("JSON parse error: {e}"))),
			StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => Err(SessionError::Rejected {
				status: status.as_u16(),
			}),
			_ => Err(api_error(response).await),
		}
	}

	fn issued(&self, tokens: TokenResponse) -> SessionRefresh {
		SessionRefresh {
			status: SessionStatus::Refreshed,
			cookies: vec![
				ResponseCookie::new(&self.access_cookie, tokens.access_token, self.attributes.clone())
					.with_max_age(tokens.expires_in),
				ResponseCookie::new(&self.refresh_cookie, tokens.refresh_token, self.attributes.clone())
					.with_max_age(REFRESH_COOKIE_MAX_AGE_SECS),
			],
		}
	}

	fn cleared(&self) -> SessionRefresh {
		SessionRefresh {
			status: SessionStatus::Rejected,
			cookies: vec![
				ResponseCookie::removal(&self.access_cookie, self.attributes.clone()),
				ResponseCookie::removal(&self.refresh_cookie, self.attributes.clone()),
			],
		}
	}
}

#[async_trait]
impl SessionRefresher for HttpSessionRefresher {
	async fn refresh(&self, cookies: &RequestCookies) -> SessionRefresh {
		let access = cookies.get_non_empty(&self.access_cookie);
		let refresh = cookies.get_non_empty(&self.refresh_cookie);

		if access.is_none() && refresh.is_none() {
			return SessionRefresh::anonymous();
		}

		if let Some(access_token) = access {
			match self.validate(access_token).await {
				Ok(true) => return SessionRefresh::without_writes(SessionStatus::Valid),
				Ok(false) => debug!("access token refused, trying refresh token"),
				Err(e) => {
					warn!(error = %e, "session validation failed, continuing without session");
					return SessionRefresh::without_writes(SessionStatus::Unavailable);
				}
			}
		}

		let Some(refresh_token) = refresh else {
			return self.cleared();
		};

		match self.exchange(refresh_token).await {
			Ok(tokens) => self.issued(tokens),
			Err(SessionError::Rejected { status }) => {
				debug!(status, "refresh token rejected, clearing session cookies");
				self.cleared()
			}
			Err(e) => {
				warn!(error = %e, "session refresh failed, continuing without session");
				SessionRefresh::without_writes(SessionStatus::Unavailable)
			}
		}
	}
}

fn map_send_error(e: reqwest::Error) -> SessionError {
	if e.is_timeout() {
		SessionError::Timeout
	} else {
		SessionError::Network(e)
	}
}

async fn api_error(response: Response) -> SessionError {
	let status = response.status().as_u16();
	let message = response.text().await.unwrap_or_default();
	SessionError::Api { status, message }
}

#[cfg(test)]
mod tests {
	use super::*;
	use atelier_server_config::SessionConfigLayer;
	use wiremock::matchers::{body_json, header, method, path, query_param};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	const ACCESS: &str = "atelier-access-token";
	const REFRESH: &str = "atelier-refresh-token";

	fn refresher(server: &MockServer) -> HttpSessionRefresher {
		let config = SessionConfigLayer {
			url: Some(server.uri()),
			anon_key: Some(SecretString::new("anon-key".to_string())),
			..Default::default()
		}
		.finalize();
		HttpSessionRefresher::from_config(&config).unwrap()
	}

	fn cookies(header: &str) -> RequestCookies {
		RequestCookies::parse(header)
	}

	#[test]
	fn from_config_requires_url() {
		let config = SessionConfig::default();
		assert!(matches!(
			HttpSessionRefresher::from_config(&config),
			Err(SessionError::NotConfigured)
		));
	}

	#[tokio::test]
	async fn noop_refresher_never_writes() {
		let refresh = NoopSessionRefresher.refresh(&cookies("atelier-access-token=x")).await;
		assert_eq!(refresh, SessionRefresh::anonymous());
	}

	#[tokio::test]
	async fn no_session_cookies_means_no_network() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(500))
			.expect(0)
			.mount(&server)
			.await;

		let refresh = refresher(&server).refresh(&cookies("theme=dark")).await;
		assert_eq!(refresh.status, SessionStatus::Anonymous);
		assert!(refresh.cookies.is_empty());
	}

	#[tokio::test]
	async fn valid_access_token_writes_nothing() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/auth/v1/user"))
			.and(header("authorization", "Bearer good"))
			.and(header("apikey", "anon-key"))
			.respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "u1"})))
			.expect(1)
			.mount(&server)
			.await;

		let refresh = refresher(&server)
			.refresh(&cookies("atelier-access-token=good; atelier-refresh-token=r1"))
			.await;
		assert_eq!(refresh.status, SessionStatus::Valid);
		assert!(refresh.cookies.is_empty());
	}

	#[tokio::test]
	async fn expired_access_token_is_refreshed() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/auth/v1/user"))
			.respond_with(ResponseTemplate::new(401))
			.mount(&server)
			.await;
		Mock::given(method("POST"))
			.and(path("/auth/v1/token"))
			.and(query_param("grant_type", "refresh_token"))
			.and(body_json(serde_json::json!({"refresh_token": "r1"})))
			.respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
				"access_token": "a2",
				"refresh_token": "r2",
				"expires_in": 3600,
				"token_type": "bearer"
			})))
			.expect(1)
			.mount(&server)
			.await;

		let refresh = refresher(&server)
			.refresh(&cookies("atelier-access-token=stale; atelier-refresh-token=r1"))
			.await;

		assert_eq!(refresh.status, SessionStatus::Refreshed);
		assert_eq!(refresh.cookies.len(), 2);
		assert_eq!(refresh.cookies[0].name, ACCESS);
		assert_eq!(refresh.cookies[0].value, "a2");
		assert_eq!(refresh.cookies[0].attributes.max_age, Some(3600));
		assert_eq!(refresh.cookies[1].name, REFRESH);
		assert_eq!(refresh.cookies[1].value, "r2");
		assert_eq!(
			refresh.cookies[1].attributes.max_age,
			Some(REFRESH_COOKIE_MAX_AGE_SECS)
		);
		assert!(refresh.cookies.iter().all(|c| c.attributes.http_only && c.attributes.secure));
	}

	#[tokio::test]
	async fn refresh_token_alone_is_exchanged_without_validation() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(200))
			.expect(0)
			.mount(&server)
			.await;
		Mock::given(method("POST"))
			.and(path("/auth/v1/token"))
			.respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
				"access_token": "a2",
				"refresh_token": "r2",
				"expires_in": 60
			})))
			.mount(&server)
			.await;

		let refresh = refresher(&server).refresh(&cookies("atelier-refresh-token=r1")).await;
		assert_eq!(refresh.status, SessionStatus::Refreshed);
	}

	#[tokio::test]
	async fn rejected_refresh_token_clears_cookies() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/auth/v1/token"))
			.respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
				"error": "invalid_grant"
			})))
			.mount(&server)
			.await;

		let refresh = refresher(&server).refresh(&cookies("atelier-refresh-token=revoked")).await;
		assert_eq!(refresh.status, SessionStatus::Rejected);
		assert_eq!(refresh.cookies.len(), 2);
		assert!(refresh.cookies.iter().all(ResponseCookie::is_removal));
		assert!(refresh.cookies.iter().all(|c| c.value.is_empty()));
	}

	#[tokio::test]
	async fn refused_access_token_without_refresh_clears_cookies() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/auth/v1/user"))
			.respond_with(ResponseTemplate::new(401))
			.mount(&server)
			.await;

		let refresh = refresher(&server).refresh(&cookies("atelier-access-token=stale")).await;
		assert_eq!(refresh.status, SessionStatus::Rejected);
		assert!(refresh.cookies.iter().all(ResponseCookie::is_removal));
	}

	#[tokio::test]
	async fn server_error_degrades_without_writes() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/auth/v1/user"))
			.respond_with(ResponseTemplate::new(503))
			.mount(&server)
			.await;

		let refresh = refresher(&server)
			.refresh(&cookies("atelier-access-token=a; atelier-refresh-token=r"))
			.await;
		assert_eq!(refresh.status, SessionStatus::Unavailable);
		assert!(refresh.cookies.is_empty());
	}

	#[tokio::test]
	async fn refresh_server_error_degrades_without_writes() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/auth/v1/token"))
			.respond_with(ResponseTemplate::new(502))
			.mount(&server)
			.await;

		let refresh = refresher(&server).refresh(&cookies("atelier-refresh-token=r")).await;
		assert_eq!(refresh.status, SessionStatus::Unavailable);
		assert!(refresh.cookies.is_empty());
	}

	#[tokio::test]
	async fn unreachable_service_degrades_without_writes() {
		let config = SessionConfigLayer {
			url: Some("http://127.0.0.1:1".to_string()),
			..Default::default()
		}
		.finalize();
		let refresher = HttpSessionRefresher::from_config(&config).unwrap();

		let refresh = refresher.refresh(&cookies("atelier-refresh-token=r")).await;
		assert_eq!(refresh.status, SessionStatus::Unavailable);
		assert!(refresh.cookies.is_empty());
	}

	#[tokio::test]
	async fn garbled_token_response_degrades_without_writes() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/auth/v1/token"))
			.respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
			.mount(&server)
			.await;

		let refresh = refresher(&server).refresh(&cookies("atelier-refresh-token=r")).await;
		assert_eq!(refresh.status, SessionStatus::Unavailable);
	}
}
