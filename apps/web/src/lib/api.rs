//! HTTP helpers for the carpool JSON API with a shared timeout and error
//! mapping. Bearer tokens are attached only when a caller passes one; nothing
//! here stores or logs them.

use super::config::AppConfig;
use carpool_ui::{
    endpoints::{bearer, build_url},
    AppError,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::to_string;
use web_sys::{AbortController, AbortSignal};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Posts JSON and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = send_json(Request::post(&url(path)), body, None).await?;
    handle_json_response(response).await
}

/// Posts JSON and ignores the response body.
pub async fn post_json_empty<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let response = send_json(Request::post(&url(path)), body, None).await?;
    handle_empty_response(response).await
}

/// Patches JSON on behalf of the signed-in user.
pub async fn patch_json_with_token<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: &str,
) -> Result<T, AppError> {
    let response = send_json(Request::patch(&url(path)), body, Some(token)).await?;
    handle_json_response(response).await
}

/// Fetches JSON on behalf of the signed-in user.
pub async fn get_json_with_token<T: DeserializeOwned>(
    path: &str,
    token: &str,
) -> Result<T, AppError> {
    let url = url(path);
    let authorization = bearer(token);
    let response = send_with_timeout(|signal| {
        Request::get(&url)
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

fn url(path: &str) -> String {
    build_url(&AppConfig::load().api_base_url, path)
}

async fn send_json<B: Serialize>(
    builder: RequestBuilder,
    body: &B,
    token: Option<&str>,
) -> Result<Response, AppError> {
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

    send_with_timeout(move |signal| {
        let mut builder = builder
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal));
        if let Some(token) = token {
            builder = builder.header("Authorization", &bearer(token));
        }

        builder
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout so a stalled backend cannot leave
/// the page in a submitting state.
async fn send_with_timeout(
    build_request: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(error_from(response).await)
    }
}

async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(error_from(response).await)
    }
}

async fn error_from(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::from_response(status, &body)
}
