//! Auth feature module: password and Google sign-in, registration, and the
//! email verification hand-off. Session state lives in a single
//! `carpool_ui::SessionStore` held by [`state::AuthContext`].
//!
//! Flow Overview: Login either signs in or, for an unverified account, hands
//! the email to the verification page. Registration always hands off. The
//! verification page signs the user in when the backend returns a session and
//! falls back to the login page otherwise.

pub(crate) mod client;
pub(crate) mod google;
mod guards;
pub(crate) mod state;

pub(crate) use guards::RequireAuth;
