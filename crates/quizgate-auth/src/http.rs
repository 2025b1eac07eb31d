//! HTTP client for the external authorization service.
//!
//! Two endpoints: `POST /auth/code/verify` exchanges an authorization code
//! for an access token, and `POST /token/validate` reports whether a token
//! is valid and which permissions it carries. Every failure path — timeout,
//! transport error, non-success status, malformed body — denies.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use quizgate_core::traits::AccessGate;

use crate::error::AuthError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Access gate backed by the remote authorization service.
pub struct HttpAccessGate {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpAccessGate {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs: timeout.as_secs(),
            client,
        }
    }

    async fn try_exchange(&self, code: &str) -> Result<String, AuthError> {
        let response = self
            .client
            .post(format!("{}/auth/code/verify", self.base_url))
            .json(&VerifyRequest { code })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::ServiceError { status, message });
        }

        let body: VerifyResponse = response
            .json()
            .await
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        Ok(body.access_token)
    }

    async fn try_validate(&self, token: &str) -> Result<ValidateResponse, AuthError> {
        let response = self
            .client
            .post(format!("{}/token/validate", self.base_url))
            .json(&ValidateRequest {
                access_token: token,
            })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::ServiceError { status, message });
        }

        response
            .json()
            .await
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))
    }

    fn transport_error(&self, e: reqwest::Error) -> AuthError {
        if e.is_timeout() {
            AuthError::Timeout(self.timeout_secs)
        } else {
            AuthError::NetworkError(e.to_string())
        }
    }
}

#[derive(Serialize)]
struct VerifyRequest<'a> {
    code: &'a str,
}

#[derive(Deserialize)]
struct VerifyResponse {
    /// Absent token is treated as an empty string, i.e. denial.
    #[serde(default)]
    access_token: String,
}

#[derive(Serialize)]
struct ValidateRequest<'a> {
    access_token: &'a str,
}

#[derive(Deserialize)]
struct ValidateResponse {
    #[serde(default)]
    valid: bool,
    #[serde(default)]
    permissions: Vec<String>,
}

#[async_trait]
impl AccessGate for HttpAccessGate {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self, code))]
    async fn exchange_code(&self, code: &str) -> String {
        match self.try_exchange(code).await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("code exchange failed: {e}");
                String::new()
            }
        }
    }

    #[instrument(skip(self, token))]
    async fn has_permission(&self, token: &str, action: &str) -> bool {
        match self.try_validate(token).await {
            Ok(body) => body.valid && body.permissions.iter().any(|p| p == action),
            Err(e) => {
                tracing::warn!("token validation failed: {e}");
                false
            }
        }
    }
}
