// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Common configuration primitives for Atelier.
//!
//! - [`Secret<T>`]: redacting wrapper (re-exported from [`atelier_common_secret`])
//! - [`load_secret_env`]: read a secret from `VAR` or the file named by `VAR_FILE`
//! - [`env_var`]: read a non-empty variable, trying aliases in order

pub mod env;

pub use atelier_common_secret::{Secret, SecretString, REDACTED};

pub use env::{env_var, load_secret_env, require_secret_env, RequiredSecretError, SecretEnvError};
