// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! USD→CAD exchange rate lookups for price display.

mod client;
mod error;

pub use client::FxClient;
pub use error::FxError;
