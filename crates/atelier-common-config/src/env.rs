// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Environment variable helpers.
//!
//! Secrets follow the `VAR` / `VAR_FILE` convention so that the payment key
//! can be mounted as a Docker or Kubernetes secret file instead of living in
//! the process environment.

use std::path::PathBuf;
use std::{env, fs};

use atelier_common_secret::Secret;
use thiserror::Error;

/// Errors raised while loading a secret from the environment.
#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },
}

/// Error returned when a required secret is not configured.
#[derive(Debug, Error)]
pub enum RequiredSecretError {
	#[error("required secret not found: set either {var} or {file_var}")]
	Missing { var: String, file_var: String },

	#[error(transparent)]
	Load(#[from] SecretEnvError),
}

/// Read the first non-empty variable among `names`.
///
/// Used for settings that have a legacy alias, e.g. the site URL which is
/// also accepted as `NEXT_PUBLIC_SITE_URL`.
pub fn env_var(names: &[&str]) -> Option<String> {
	names
		.iter()
		.find_map(|name| env::var(name).ok().filter(|v| !v.is_empty()))
}

/// Load a secret from `{var}_FILE` (preferred) or `{var}`.
///
/// A single trailing newline is stripped from file contents. An empty direct
/// value is treated as unset.
///
/// ```no_run
/// use atelier_common_config::load_secret_env;
///
/// if let Some(key) = load_secret_env("STRIPE_SECRET_KEY")? {
///     println!("payment key configured: {key}"); // prints "[REDACTED]"
/// }
/// # Ok::<(), atelier_common_config::SecretEnvError>(())
/// ```
pub fn load_secret_env(var: &str) -> Result<Option<Secret<String>>, SecretEnvError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path_str) = env::var(&file_var) {
		if path_str.is_empty() {
			return Err(SecretEnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(&path_str);
		let content = fs::read_to_string(&path).map_err(|source| SecretEnvError::Io {
			path: path.clone(),
			source,
		})?;

		let secret = content.strip_suffix('\n').unwrap_or(&content).to_string();
		return Ok(Some(Secret::new(secret)));
	}

	match env::var(var) {
		Ok(value) if !value.is_empty() => Ok(Some(Secret::new(value))),
		_ => Ok(None),
	}
}

/// Like [`load_secret_env`] but a missing secret is an error.
pub fn require_secret_env(var: &str) -> Result<Secret<String>, RequiredSecretError> {
	load_secret_env(var)?.ok_or_else(|| RequiredSecretError::Missing {
		var: var.to_string(),
		file_var: format!("{var}_FILE"),
	})
}
