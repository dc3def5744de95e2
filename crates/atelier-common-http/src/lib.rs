// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Atelier.
//!
//! Every outbound client (session service, payment processor, exchange rate
//! provider) is built from [`builder`] so requests carry the same User-Agent.
//! No retry helpers live here: failed upstream calls degrade or propagate.

mod client;

pub use client::{build_client, builder, user_agent};
