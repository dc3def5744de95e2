// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Payment processor client for Atelier checkout.
//!
//! [`PaymentClient::from_config`] is the only way to obtain a client. It
//! refuses to build one without a secret key, so a misconfigured deployment
//! fails at checkout time with a configuration error instead of sending an
//! unauthenticated request.

mod client;
mod error;
mod types;

pub use client::{PaymentClient, API_VERSION};
pub use error::PaymentError;
pub use types::{CheckoutSession, CheckoutSessionParams, LineItem};
