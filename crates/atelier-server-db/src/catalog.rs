// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Catalog repository: the watch categories shown in navigation and on the
//! shop pages.
//!
//! The repository reports exactly what the table holds. Substituting the
//! static fallback for an empty or failing query is the caller's job.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;

use crate::error::DbError;
use crate::types::WatchCategory;

#[async_trait]
pub trait CategoryStore: Send + Sync {
	async fn list_categories(&self) -> Result<Vec<WatchCategory>, DbError>;
}

#[derive(Clone)]
pub struct CategoryRepository {
	pool: SqlitePool,
}

impl CategoryRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// All categories, ascending by `sort_order`.
	#[tracing::instrument(skip(self))]
	pub async fn list_categories(&self) -> Result<Vec<WatchCategory>, DbError> {
		let categories: Vec<WatchCategory> = sqlx::query_as(
			r#"
			SELECT id, slug, label_en, label_fr, sort_order, image_url, display_price
			FROM categories
			ORDER BY sort_order ASC
			"#,
		)
		.fetch_all(&self.pool)
		.await?;

		tracing::debug!(count = categories.len(), "listed categories");
		Ok(categories)
	}
}

#[async_trait]
impl CategoryStore for CategoryRepository {
	async fn list_categories(&self) -> Result<Vec<WatchCategory>, DbError> {
		self.list_categories().await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{create_categories_table, create_test_pool, insert_category, make_category};

	#[tokio::test]
	async fn empty_table_lists_nothing() {
		let pool = create_test_pool().await;
		create_categories_table(&pool).await;
		let repo = CategoryRepository::new(pool);

		assert!(repo.list_categories().await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn rows_come_back_in_sort_order() {
		let pool = create_test_pool().await;
		create_categories_table(&pool).await;
		insert_category(&pool, &make_category("c3", "pilot", 30)).await;
		insert_category(&pool, &make_category("c1", "dress", 10)).await;
		insert_category(&pool, &make_category("c2", "diver", 20)).await;
		let repo = CategoryRepository::new(pool);

		let categories = repo.list_categories().await.unwrap();
		let slugs: Vec<_> = categories.iter().map(|c| c.slug.as_str()).collect();
		assert_eq!(slugs, ["dress", "diver", "pilot"]);
		assert_eq!(categories[0], make_category("c1", "dress", 10));
	}

	#[tokio::test]
	async fn optional_columns_may_be_null() {
		let pool = create_test_pool().await;
		create_categories_table(&pool).await;
		let mut bare = make_category("c1", "field", 1);
		bare.image_url = None;
		bare.display_price = None;
		insert_category(&pool, &bare).await;
		let repo = CategoryRepository::new(pool);

		let categories = repo.list_categories().await.unwrap();
		assert_eq!(categories, vec![bare]);
	}

	#[tokio::test]
	async fn missing_table_is_an_error() {
		let pool = create_test_pool().await;
		let repo = CategoryRepository::new(pool);

		assert!(matches!(
			repo.list_categories().await,
			Err(DbError::Sqlx(_))
		));
	}
}
