// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Atelier storefront server.
//!
//! Serves locale-prefixed page shells (English and French) to the
//! presentation tier, the checkout and exchange-rate APIs, and keeps the
//! visitor's session cookies fresh on every request.

pub mod api;
pub mod api_docs;
pub mod catalog;
pub mod db;
pub mod error;
pub mod home_cards;
pub mod layout;
pub mod locale_router;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use api_docs::ApiDoc;
pub use atelier_server_config::ServerConfig;
pub use catalog::{CatalogFetch, CategoryAccessor};
pub use error::ServerError;
pub use locale_router::{route_request, RouteDecision, RoutingConfig};
