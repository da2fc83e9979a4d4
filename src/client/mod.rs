//! HTTP wrapper for the carpool API. Every call maps transport and status
//! failures into `AppError` at this boundary so the flows only ever see a
//! message-bearing error. Tokens travel in the `Authorization` header and are
//! never written to logs or spans.

use crate::APP_USER_AGENT;
use carpool_ui::{
    endpoints::{self, bearer, build_url},
    types::{
        AuthResponse, Credentials, DashboardResponse, GoogleLoginRequest, RegisterRequest,
        RegisterResponse, ResendOtpRequest, UpdateProfileRequest, User, VerifyEmailRequest,
        VerifyEmailResponse,
    },
    AppError,
};
use reqwest::{header::AUTHORIZATION, Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, info_span, Instrument};

/// Default request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Signs in with email and password.
    /// # Errors
    /// Returns the mapped request error.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, AppError> {
        self.post_json(endpoints::LOGIN, credentials, None).await
    }

    /// Exchanges a Google ID-token credential for a session.
    /// # Errors
    /// Returns the mapped request error.
    pub async fn google_login(&self, credential: &str) -> Result<AuthResponse, AppError> {
        let request = GoogleLoginRequest {
            credential: credential.to_string(),
        };
        self.post_json(endpoints::GOOGLE_LOGIN, &request, None).await
    }

    /// Creates an account; the backend emails a verification code.
    /// # Errors
    /// Returns the mapped request error.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, AppError> {
        self.post_json(endpoints::REGISTER, request, None).await
    }

    /// Submits a six-digit code.
    /// # Errors
    /// Returns the mapped request error.
    pub async fn verify_email(
        &self,
        request: &VerifyEmailRequest,
    ) -> Result<VerifyEmailResponse, AppError> {
        self.post_json(endpoints::VERIFY_EMAIL, request, None).await
    }

    /// Asks for a new code. The response body is not used.
    /// # Errors
    /// Returns the mapped request error.
    pub async fn resend_otp(&self, request: &ResendOtpRequest) -> Result<(), AppError> {
        let builder = self.request(Method::POST, endpoints::RESEND_OTP, None).json(request);
        self.send(Method::POST, endpoints::RESEND_OTP, builder)
            .await
            .map(|_| ())
    }

    /// # Errors
    /// Returns the mapped request error.
    pub async fn dashboard(&self, token: &str) -> Result<DashboardResponse, AppError> {
        let builder = self.request(Method::GET, endpoints::DASHBOARD, Some(token));
        let response = self.send(Method::GET, endpoints::DASHBOARD, builder).await?;
        decode(response).await
    }

    /// Saves the phone number of the signed-in user.
    /// # Errors
    /// Returns the mapped request error.
    pub async fn update_profile(
        &self,
        token: &str,
        request: &UpdateProfileRequest,
    ) -> Result<User, AppError> {
        let builder = self
            .request(Method::PATCH, endpoints::PROFILE, Some(token))
            .json(request);
        let response = self.send(Method::PATCH, endpoints::PROFILE, builder).await?;
        decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, AppError> {
        let builder = self.request(Method::POST, path, token).json(body);
        let response = self.send(Method::POST, path, builder).await?;
        decode(response).await
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.http.request(method, build_url(&self.base_url, path));
        match token {
            Some(token) => builder.header(AUTHORIZATION, bearer(token)),
            None => builder,
        }
    }

    /// Sends the request and turns non-success statuses into `AppError::Http`
    /// carrying the server's message.
    async fn send(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<Response, AppError> {
        let span = info_span!("carpool.request", http.method = %method, url.path = %path);

        let response = builder
            .send()
            .instrument(span)
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        debug!(http.status = status.as_u16(), "{method} {path}");

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(AppError::from_response(status.as_u16(), &body))
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    response
        .json::<T>()
        .await
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AppError::Serialization(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client(server: &MockServer) -> Result<ApiClient> {
        Ok(ApiClient::new(&server.uri(), DEFAULT_TIMEOUT)?)
    }

    #[tokio::test]
    async fn login_posts_credentials_and_returns_session() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({"email": "ada@example.com", "password": "secret"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "jwt-1",
                "user": {"_id": "u1", "email": "ada@example.com", "phone": "5550100"}
            })))
            .mount(&server)
            .await;

        let response = client(&server)?
            .login(&Credentials::new("ada@example.com", "secret"))
            .await?;
        assert_eq!(response.token, "jwt-1");
        assert_eq!(response.user.id, "u1");
        Ok(())
    }

    #[tokio::test]
    async fn error_status_carries_server_message() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"message": "Email not verified"})),
            )
            .mount(&server)
            .await;

        let err = client(&server)?
            .login(&Credentials::new("ada@example.com", "secret"))
            .await
            .err()
            .ok_or_else(|| anyhow!("expected error"))?;
        assert_eq!(
            err,
            AppError::Http {
                status: 403,
                message: "Email not verified".to_string()
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn dashboard_sends_bearer_token() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/me/dashboard"))
            .and(header("Authorization", "Bearer jwt-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "stats": {"totalRides": 4},
                "recentActivity": []
            })))
            .mount(&server)
            .await;

        let dashboard = client(&server)?.dashboard("jwt-1").await?;
        assert_eq!(dashboard.stats.total_rides, 4);
        assert!(dashboard.recent_activity.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn resend_ignores_response_body() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/resend-otp"))
            .and(body_json(json!({"email": "ada@example.com"})))
            .respond_with(ResponseTemplate::new(200).set_body_string("sent"))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)?
            .resend_otp(&ResendOtpRequest {
                user_id: None,
                email: "ada@example.com".to_string(),
            })
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn undecodable_success_body_is_a_parse_error() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let result = client(&server)?
            .update_profile(
                "jwt-1",
                &UpdateProfileRequest {
                    phone: "5550100".to_string(),
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::Parse(_))));
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() -> Result<()> {
        let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(2))?;
        let result = client.dashboard("jwt-1").await;
        assert!(matches!(
            result,
            Err(AppError::Network(_) | AppError::Timeout(_))
        ));
        Ok(())
    }
}
