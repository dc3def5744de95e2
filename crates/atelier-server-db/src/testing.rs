// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Test helpers: an in-memory pool and the storefront tables.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::types::WatchCategory;

/// In-memory pool pinned to one connection so every query sees the same
/// database.
pub async fn create_test_pool() -> SqlitePool {
	SqlitePoolOptions::new()
		.max_connections(1)
		.connect("sqlite::memory:")
		.await
		.unwrap()
}

pub async fn create_categories_table(pool: &SqlitePool) {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS categories (
			id TEXT PRIMARY KEY,
			slug TEXT NOT NULL UNIQUE,
			label_en TEXT NOT NULL,
			label_fr TEXT NOT NULL,
			sort_order INTEGER NOT NULL DEFAULT 0,
			image_url TEXT,
			display_price REAL
		)
		"#,
	)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn create_site_settings_table(pool: &SqlitePool) {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS site_settings (
			key TEXT PRIMARY KEY,
			value TEXT NOT NULL,
			updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
		)
		"#,
	)
	.execute(pool)
	.await
	.unwrap();
}

pub async fn insert_category(pool: &SqlitePool, category: &WatchCategory) {
	sqlx::query(
		r#"
		INSERT INTO categories (id, slug, label_en, label_fr, sort_order, image_url, display_price)
		VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
		"#,
	)
	.bind(&category.id)
	.bind(&category.slug)
	.bind(&category.label_en)
	.bind(&category.label_fr)
	.bind(category.sort_order)
	.bind(&category.image_url)
	.bind(category.display_price)
	.execute(pool)
	.await
	.unwrap();
}

pub fn make_category(id: &str, slug: &str, sort_order: i64) -> WatchCategory {
	WatchCategory {
		id: id.to_string(),
		slug: slug.to_string(),
		label_en: format!("{slug} (en)"),
		label_fr: format!("{slug} (fr)"),
		sort_order,
		image_url: Some(format!("https://cdn.atelier.example/{slug}.jpg")),
		display_price: Some(100.0 * sort_order as f64),
	}
}
