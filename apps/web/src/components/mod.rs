//! Shared UI components exported for routes and features.

pub(crate) mod layout;
mod otp_input;
pub(crate) mod ui;

pub(crate) use layout::AppShell;
pub(crate) use otp_input::OtpFields;
pub(crate) use ui::{Alert, AlertKind, Button, Spinner};
