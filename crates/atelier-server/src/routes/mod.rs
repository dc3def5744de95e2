// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP route handlers organized by concern.

pub mod checkout;
pub mod exchange_rate;
pub mod health;
pub mod pages;
