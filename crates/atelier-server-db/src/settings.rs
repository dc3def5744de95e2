// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Site settings repository.
//!
//! Settings are JSON documents stored as text under a string key. Decoding a
//! document into its typed shape (and defaulting when it is absent or stale)
//! belongs to the consumer.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;

use crate::error::DbError;

#[async_trait]
pub trait SettingsStore: Send + Sync {
	async fn get_setting(&self, key: &str) -> Result<Option<serde_json::Value>, DbError>;
	async fn put_setting(&self, key: &str, value: &serde_json::Value) -> Result<(), DbError>;
}

#[derive(Clone)]
pub struct SiteSettingsRepository {
	pool: SqlitePool,
}

impl SiteSettingsRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Fetch and parse a setting. Text that is not valid JSON is reported as
	/// [`DbError::Serialization`].
	#[tracing::instrument(skip(self))]
	pub async fn get_setting(&self, key: &str) -> Result<Option<serde_json::Value>, DbError> {
		let raw: Option<(String,)> = sqlx::query_as("SELECT value FROM site_settings WHERE key = ?1")
			.bind(key)
			.fetch_optional(&self.pool)
			.await?;

		match raw {
			Some((text,)) => Ok(Some(serde_json::from_str(&text)?)),
			None => Ok(None),
		}
	}

	#[tracing::instrument(skip(self, value))]
	pub async fn put_setting(&self, key: &str, value: &serde_json::Value) -> Result<(), DbError> {
		let text = serde_json::to_string(value)?;
		sqlx::query(
			r#"
			INSERT INTO site_settings (key, value, updated_at)
			VALUES (?1, ?2, CURRENT_TIMESTAMP)
			ON CONFLICT(key) DO UPDATE SET
				value = excluded.value,
				updated_at = excluded.updated_at
			"#,
		)
		.bind(key)
		.bind(text)
		.execute(&self.pool)
		.await?;

		tracing::debug!(key, "stored site setting");
		Ok(())
	}
}

#[async_trait]
impl SettingsStore for SiteSettingsRepository {
	async fn get_setting(&self, key: &str) -> Result<Option<serde_json::Value>, DbError> {
		self.get_setting(key).await
	}

	async fn put_setting(&self, key: &str, value: &serde_json::Value) -> Result<(), DbError> {
		self.put_setting(key, value).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{create_site_settings_table, create_test_pool};
	use serde_json::json;

	async fn make_repo() -> SiteSettingsRepository {
		let pool = create_test_pool().await;
		create_site_settings_table(&pool).await;
		SiteSettingsRepository::new(pool)
	}

	#[tokio::test]
	async fn absent_key_is_none() {
		let repo = make_repo().await;
		assert!(repo.get_setting("home_style_cards").await.unwrap().is_none());
	}

	#[tokio::test]
	async fn put_then_get() {
		let repo = make_repo().await;
		let value = json!({ "shop": { "title_en": "Shop" } });
		repo.put_setting("home_style_cards", &value).await.unwrap();

		assert_eq!(repo.get_setting("home_style_cards").await.unwrap(), Some(value));
	}

	#[tokio::test]
	async fn put_overwrites_existing_value() {
		let repo = make_repo().await;
		repo.put_setting("banner", &json!("first")).await.unwrap();
		repo.put_setting("banner", &json!("second")).await.unwrap();

		assert_eq!(repo.get_setting("banner").await.unwrap(), Some(json!("second")));
	}

	#[tokio::test]
	async fn malformed_text_is_serialization_error() {
		let pool = create_test_pool().await;
		create_site_settings_table(&pool).await;
		sqlx::query("INSERT INTO site_settings (key, value) VALUES ('broken', '{not json')")
			.execute(&pool)
			.await
			.unwrap();
		let repo = SiteSettingsRepository::new(pool);

		assert!(matches!(
			repo.get_setting("broken").await,
			Err(DbError::Serialization(_))
		));
	}
}
