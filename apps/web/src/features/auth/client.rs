//! Client wrappers for the carpool auth endpoints. Passwords and codes are
//! passed straight through to the request body and never logged.

use crate::app_lib::api::{post_json, post_json_empty};
use carpool_ui::{
    endpoints,
    types::{
        AuthResponse, Credentials, GoogleLoginRequest, RegisterRequest, RegisterResponse,
        ResendOtpRequest, VerifyEmailRequest, VerifyEmailResponse,
    },
    AppError,
};

pub async fn login(credentials: &Credentials) -> Result<AuthResponse, AppError> {
    post_json(endpoints::LOGIN, credentials).await
}

/// Exchanges the ID token handed over by Google Identity Services.
pub async fn google_login(credential: String) -> Result<AuthResponse, AppError> {
    post_json(endpoints::GOOGLE_LOGIN, &GoogleLoginRequest { credential }).await
}

pub async fn register(request: &RegisterRequest) -> Result<RegisterResponse, AppError> {
    post_json(endpoints::REGISTER, request).await
}

pub async fn verify_email(request: &VerifyEmailRequest) -> Result<VerifyEmailResponse, AppError> {
    post_json(endpoints::VERIFY_EMAIL, request).await
}

/// Requests a new code; the response body is ignored.
pub async fn resend_otp(request: &ResendOtpRequest) -> Result<(), AppError> {
    post_json_empty(endpoints::RESEND_OTP, request).await
}
