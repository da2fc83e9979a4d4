//! # Carpool terminal client
//!
//! `carpool` drives the rider flows of the carpool web app from a terminal:
//! email and Google sign-in, registration, email verification with a
//! six-digit code, profile completion and the rider dashboard.
//!
//! The decisions behind every flow (code entry, resend countdown, routing
//! after login or verification, error messages) live in [`carpool_ui`] and are
//! shared with the Leptos front-end. This crate adds the HTTP client, the
//! command-line surface and an interactive verification prompt.
//!
//! ## Verification prompt
//!
//! `carpool verify` (or `carpool login --verify` when the account is not yet
//! verified) reads one command per line while a one-second ticker counts the
//! resend cooldown down:
//!
//! - a single digit fills the focused cell; several digits are pasted from
//!   the first cell,
//! - `<` deletes the last digit,
//! - an empty line or `submit` sends the code once all six cells are filled,
//! - `resend` asks for a new code once the countdown reaches zero,
//! - `quit` leaves without verifying.

pub mod cli;
pub mod client;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
