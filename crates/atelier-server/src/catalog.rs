// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Category access with a static fallback.
//!
//! Pages always get a non-empty, ordered category list. When the store
//! answers with rows they are returned verbatim; when it fails or is empty
//! the configured fallback list is returned instead.

use std::sync::Arc;

use atelier_server_config::FallbackCategory;

use crate::db::{CategoryStore, WatchCategory};

/// Result of asking the store for categories.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogFetch {
	/// The store answered with at least one row.
	Fetched(Vec<WatchCategory>),
	/// The query failed or matched nothing.
	Unavailable(String),
}

/// Build the fallback list: ids `fallback-<n>` and `sort_order = n`, with
/// `n` the 1-based position in the configured list.
pub fn build_fallback(entries: &[FallbackCategory]) -> Vec<WatchCategory> {
	entries
		.iter()
		.enumerate()
		.map(|(i, entry)| {
			let position = i as i64 + 1;
			WatchCategory {
				id: format!("fallback-{position}"),
				slug: entry.slug.clone(),
				label_en: entry.label_en.clone(),
				label_fr: entry.label_fr.clone(),
				sort_order: position,
				image_url: None,
				display_price: None,
			}
		})
		.collect()
}

#[derive(Clone)]
pub struct CategoryAccessor {
	store: Arc<dyn CategoryStore>,
	fallback: Arc<[WatchCategory]>,
}

impl CategoryAccessor {
	pub fn new(store: Arc<dyn CategoryStore>, fallback: &[FallbackCategory]) -> Self {
		Self {
			store,
			fallback: build_fallback(fallback).into(),
		}
	}

	pub fn fallback(&self) -> &[WatchCategory] {
		&self.fallback
	}

	#[tracing::instrument(skip(self))]
	pub async fn fetch(&self) -> CatalogFetch {
		match self.store.list_categories().await {
			Ok(rows) if rows.is_empty() => CatalogFetch::Unavailable("no categories in store".to_string()),
			Ok(rows) => CatalogFetch::Fetched(rows),
			Err(e) => CatalogFetch::Unavailable(e.to_string()),
		}
	}

	/// Map a fetch result to the list pages render.
	pub fn resolve(&self, fetch: CatalogFetch) -> Vec<WatchCategory> {
		match fetch {
			CatalogFetch::Fetched(rows) => rows,
			CatalogFetch::Unavailable(reason) => {
				tracing::warn!(reason = %reason, "catalog unavailable, serving fallback categories");
				self.fallback.to_vec()
			}
		}
	}

	pub async fn categories(&self) -> Vec<WatchCategory> {
		let fetch = self.fetch().await;
		self.resolve(fetch)
	}

	/// Find one category by slug in the (possibly fallback) list.
	pub async fn category(&self, slug: &str) -> Option<WatchCategory> {
		self.categories().await.into_iter().find(|c| c.slug == slug)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::db::DbError;
	use async_trait::async_trait;
	use atelier_server_config::default_fallback;
	use atelier_server_db::testing::make_category;
	use std::sync::atomic::{AtomicUsize, Ordering};

	struct StubStore {
		result: fn() -> Result<Vec<WatchCategory>, DbError>,
		calls: AtomicUsize,
	}

	impl StubStore {
		fn new(result: fn() -> Result<Vec<WatchCategory>, DbError>) -> Arc<Self> {
			Arc::new(Self {
				result,
				calls: AtomicUsize::new(0),
			})
		}
	}

	#[async_trait]
	impl CategoryStore for StubStore {
		async fn list_categories(&self) -> Result<Vec<WatchCategory>, DbError> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			(self.result)()
		}
	}

	fn rows() -> Result<Vec<WatchCategory>, DbError> {
		Ok(vec![
			make_category("c1", "tourbillon", 3),
			make_category("c2", "skeleton", 7),
		])
	}

	fn empty() -> Result<Vec<WatchCategory>, DbError> {
		Ok(vec![])
	}

	fn failing() -> Result<Vec<WatchCategory>, DbError> {
		Err(DbError::Internal("connection refused".to_string()))
	}

	#[test]
	fn fallback_is_numbered_by_position() {
		let fallback = build_fallback(&default_fallback());
		assert_eq!(fallback.len(), 5);
		for (i, category) in fallback.iter().enumerate() {
			assert_eq!(category.sort_order, i as i64 + 1);
			assert_eq!(category.id, format!("fallback-{}", i + 1));
		}
		let slugs: Vec<_> = fallback.iter().map(|c| c.slug.as_str()).collect();
		assert_eq!(slugs, ["dress", "diver", "pilot", "field", "chronograph"]);
		assert_eq!(fallback[1].label_fr, "Plongée");
	}

	#[tokio::test]
	async fn store_rows_are_returned_verbatim() {
		let store = StubStore::new(rows);
		let accessor = CategoryAccessor::new(store.clone(), &default_fallback());

		assert_eq!(accessor.categories().await, rows().unwrap());
		assert_eq!(store.calls.load(Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn empty_store_serves_fallback() {
		let accessor = CategoryAccessor::new(StubStore::new(empty), &default_fallback());

		assert!(matches!(accessor.fetch().await, CatalogFetch::Unavailable(_)));
		assert_eq!(accessor.categories().await, build_fallback(&default_fallback()));
	}

	#[tokio::test]
	async fn failing_store_serves_fallback() {
		let accessor = CategoryAccessor::new(StubStore::new(failing), &default_fallback());

		match accessor.fetch().await {
			CatalogFetch::Unavailable(reason) => assert!(reason.contains("connection refused")),
			other => panic!("expected Unavailable, got {other:?}"),
		}
		assert_eq!(accessor.categories().await, accessor.fallback().to_vec());
	}

	#[tokio::test]
	async fn configured_fallback_order_is_kept() {
		let entries = vec![
			FallbackCategory::new("pilot", "Pilot", "Aviateur"),
			FallbackCategory::new("dress", "Dress", "Habillées"),
		];
		let accessor = CategoryAccessor::new(StubStore::new(failing), &entries);

		let categories = accessor.categories().await;
		assert_eq!(categories[0].slug, "pilot");
		assert_eq!(categories[0].sort_order, 1);
		assert_eq!(categories[1].slug, "dress");
		assert_eq!(categories[1].sort_order, 2);
	}

	#[tokio::test]
	async fn category_lookup_by_slug() {
		let accessor = CategoryAccessor::new(StubStore::new(rows), &default_fallback());

		assert_eq!(accessor.category("skeleton").await.unwrap().id, "c2");
		assert!(accessor.category("diver").await.is_none());
	}
}
