//! Client-side route paths. Both front-ends navigate by these constants so a
//! flow decision made in this crate means the same page everywhere.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const VERIFY_EMAIL: &str = "/verify-email";
pub const COMPLETE_PROFILE: &str = "/complete-profile";
pub const DASHBOARD: &str = "/dashboard";
pub const HELP: &str = "/help";
pub const SERVICES: &str = "/services";
pub const DRIVER_VERIFICATION: &str = "/driver-verification";
