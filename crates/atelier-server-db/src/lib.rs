// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! # atelier-server-db
//!
//! Persistence layer for the Atelier storefront using SQLite via sqlx.
//!
//! ## Repository Pattern
//!
//! Each domain has two components:
//! - **`*Store` trait**: the interface handlers depend on (`CategoryStore`,
//!   `SettingsStore`), so tests can substitute failing or empty stores
//! - **`*Repository` struct**: the concrete implementation holding a `SqlitePool`
//!
//! Repositories report what the database says. Fallback and default values
//! are applied by the server, which knows the configured defaults.
//!
//! Schema lives in `atelier-server/migrations/`; [`testing`] mirrors the
//! tables for unit tests.

pub mod catalog;
mod error;
pub mod pool;
pub mod settings;
pub mod testing;
pub mod types;

pub use catalog::{CategoryRepository, CategoryStore};
pub use error::{DbError, Result};
pub use pool::{create_pool, ping};
pub use settings::{SettingsStore, SiteSettingsRepository};
pub use types::WatchCategory;
