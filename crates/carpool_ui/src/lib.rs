//! # Carpool view models
//!
//! Framework-agnostic state and decisions behind the carpool front-ends. The
//! Leptos web app and the terminal client both drive these types; neither
//! holds logic beyond wiring events to them and issuing the HTTP requests they
//! describe.
//!
//! ## Verification flow
//!
//! 1. **Hand-off:** Login (unverified account) or registration stores a
//!    [`PendingVerification`] in the [`SessionStore`].
//! 2. **Entry:** The page fills an [`OtpInput`] cell by cell or from a paste and
//!    only submits once all six digits are present.
//! 3. **Resend:** A [`ResendTimer`] counts down from 30 seconds; a successful
//!    resend restarts it and clears the cells.
//! 4. **Result:** A response carrying a session signs the user in and routes
//!    home; otherwise the user is sent to the login page.
//!
//! Nothing here performs I/O, and secrets are redacted from `Debug` output.

pub mod content;
pub mod endpoints;
pub mod error;
pub mod flows;
pub mod guard;
pub mod otp;
pub mod paths;
pub mod resend;
pub mod session;
pub mod types;

pub use error::AppError;
pub use guard::MountGuard;
pub use otp::{InputOutcome, OTP_LENGTH, OtpInput};
pub use resend::{RESEND_COOLDOWN_SECS, ResendTimer, TimerState};
pub use session::{PendingVerification, SessionStore};
pub use types::{Session, User};
