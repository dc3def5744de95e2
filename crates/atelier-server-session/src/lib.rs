// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session handling for the Atelier storefront.
//!
//! The locale router calls a [`SessionRefresher`] on every request. The
//! refresher looks at the session cookies, talks to the auth service when it
//! has to, and hands back the cookie writes the response must carry. Service
//! failures never surface as errors; they degrade to an anonymous session.

pub mod cookies;
pub mod error;
pub mod refresher;

pub use cookies::{CookieAttributes, RequestCookies, ResponseCookie, SameSite};
pub use error::SessionError;
pub use refresher::{
	HttpSessionRefresher, NoopSessionRefresher, SessionRefresh, SessionRefresher, SessionStatus,
	REFRESH_COOKIE_MAX_AGE_SECS,
};
