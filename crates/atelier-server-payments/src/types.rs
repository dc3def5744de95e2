// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

/// One product line on a checkout session. Amounts are in the smallest
/// currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
	pub name: String,
	pub unit_amount: i64,
	pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSessionParams {
	pub line_items: Vec<LineItem>,
	pub success_url: String,
	pub cancel_url: String,
	pub customer_email: Option<String>,
	/// Processor-hosted page language, e.g. `fr`.
	pub locale: Option<String>,
}

/// A hosted checkout session as created by the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
	pub id: String,
	pub url: Option<String>,
}
