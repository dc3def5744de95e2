// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections for atelier-server.

pub mod catalog;
pub mod database;
pub mod fx;
pub mod http;
pub mod logging;
pub mod payment;
pub mod session;
pub mod site;

pub use catalog::{default_fallback, CatalogConfig, CatalogConfigLayer, FallbackCategory};
pub use database::{DatabaseConfig, DatabaseConfigLayer};
pub use fx::{FxConfig, FxConfigLayer};
pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use payment::{PaymentConfig, PaymentConfigLayer};
pub use session::{SessionConfig, SessionConfigLayer};
pub use site::{SiteConfig, SiteConfigLayer};
