//! Backend endpoint paths and URL helpers shared by the HTTP wrappers.

pub const LOGIN: &str = "/auth/login";
pub const GOOGLE_LOGIN: &str = "/auth/google";
pub const REGISTER: &str = "/auth/register";
pub const VERIFY_EMAIL: &str = "/auth/verify-email";
pub const RESEND_OTP: &str = "/auth/resend-otp";
pub const DASHBOARD: &str = "/users/me/dashboard";
pub const PROFILE: &str = "/users/me";

/// Joins a base URL and a path with exactly one slash between them. An empty
/// base yields the bare path so same-origin deployments work unchanged.
#[must_use]
pub fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_with_single_slash() {
        assert_eq!(
            build_url("https://api.carpool.dev/api/", "/auth/login"),
            "https://api.carpool.dev/api/auth/login"
        );
        assert_eq!(
            build_url(" https://api.carpool.dev ", "users/me"),
            "https://api.carpool.dev/users/me"
        );
    }

    #[test]
    fn build_url_without_base_keeps_path() {
        assert_eq!(build_url("", LOGIN), "/auth/login");
        assert_eq!(build_url("   ", " /users/me "), "/users/me");
    }

    #[test]
    fn bearer_header_value() {
        assert_eq!(bearer("abc"), "Bearer abc");
    }
}
