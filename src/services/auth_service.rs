// ============================================================================
// AUTH SERVICE - HTTP only, no state
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{Credentials, SignInResponse};
use crate::utils::constants::SIGN_IN_PATH;

/// Sign-in endpoint seam; the browser implementation is `HttpAuthApi`.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn sign_in(&self, credentials: &Credentials) -> Result<SignInResponse, String>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn sign_in_url(&self) -> String {
        format!("{}{}", self.base_url, SIGN_IN_PATH)
    }
}

impl Default for HttpAuthApi {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthApi for HttpAuthApi {
    async fn sign_in(&self, credentials: &Credentials) -> Result<SignInResponse, String> {
        let url = self.sign_in_url();
        log::info!("🔐 Signing in {}", credentials.email);

        let response = Request::post(&url)
            .json(credentials)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<SignInResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}
