//! Shared frontend utilities for API access, configuration and build metadata.
//!
//! Feature clients go through [`api`] so every request gets the same timeout,
//! URL joining and error mapping. Errors are `carpool_ui::AppError`, the same
//! type the terminal client produces, so pages can hand them straight to the
//! flow helpers. Session tokens are passed in by callers and never stored here.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
