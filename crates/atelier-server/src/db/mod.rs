// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! SQLite access for the storefront.
//!
//! Re-exports repositories from atelier-server-db and provides the
//! server-specific migrations.

use sqlx::sqlite::SqlitePool;

use crate::error::ServerError;

pub use atelier_server_db::{
	create_pool, ping, CategoryRepository, CategoryStore, DbError, SettingsStore,
	SiteSettingsRepository, WatchCategory,
};

/// Run all database migrations (001-002).
///
/// Migrations are idempotent; running them on every start is safe.
#[tracing::instrument(skip(pool))]
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), ServerError> {
	let migrations = [
		include_str!("../../migrations/001_create_categories.sql"),
		include_str!("../../migrations/002_create_site_settings.sql"),
	];

	for migration in migrations {
		for stmt in statements(migration) {
			sqlx::query(stmt).execute(pool).await?;
		}
	}

	tracing::debug!(count = migrations.len(), "migrations applied");
	Ok(())
}

/// Split a migration file into executable statements, dropping comment-only
/// fragments.
fn statements(sql: &str) -> impl Iterator<Item = &str> {
	sql.split(';').filter(|stmt| {
		stmt.lines()
			.map(str::trim)
			.any(|line| !line.is_empty() && !line.starts_with("--"))
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use atelier_server_db::testing::create_test_pool;

	#[tokio::test]
	async fn migrations_are_idempotent() {
		let pool = create_test_pool().await;
		run_migrations(&pool).await.unwrap();
		run_migrations(&pool).await.unwrap();

		let repo = CategoryRepository::new(pool.clone());
		assert!(repo.list_categories().await.unwrap().is_empty());
		let settings = SiteSettingsRepository::new(pool);
		assert!(settings.get_setting("home_style_cards").await.unwrap().is_none());
	}

	#[tokio::test]
	async fn migrated_file_database_survives_reopen() {
		let dir = tempfile::tempdir().unwrap();
		let url = format!("sqlite:{}", dir.path().join("atelier.db").display());

		let pool = create_pool(&url).await.unwrap();
		run_migrations(&pool).await.unwrap();
		SiteSettingsRepository::new(pool.clone())
			.put_setting("announcement", &serde_json::json!("open on Saturdays"))
			.await
			.unwrap();
		pool.close().await;

		let pool = create_pool(&url).await.unwrap();
		run_migrations(&pool).await.unwrap();
		let value = SiteSettingsRepository::new(pool)
			.get_setting("announcement")
			.await
			.unwrap();
		assert_eq!(value, Some(serde_json::json!("open on Saturdays")));
	}

	#[test]
	fn comment_only_fragments_are_skipped() {
		let sql = "-- header\nCREATE TABLE a (id INTEGER);\n-- trailing\n";
		assert_eq!(statements(sql).count(), 1);
	}
}
