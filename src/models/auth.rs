use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /signin`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenData {
    pub token: String,
}

/// Successful sign-in body. The token may arrive wrapped in a `data`
/// envelope or at the top level.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum SignInResponse {
    Wrapped { data: TokenData },
    Bare(TokenData),
}

impl SignInResponse {
    pub fn token(&self) -> &str {
        match self {
            SignInResponse::Wrapped { data } => &data.token,
            SignInResponse::Bare(data) => &data.token,
        }
    }

    pub fn into_token(self) -> String {
        match self {
            SignInResponse::Wrapped { data } | SignInResponse::Bare(data) => data.token,
        }
    }
}

/// An authenticated session as held by the `auth` slice.
#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub token: String,
    /// Address used to sign in; unknown for sessions restored from storage.
    pub email: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, email: Option<String>) -> Self {
        Self {
            token: token.into(),
            email,
        }
    }

    /// Name shown in the navigation bar.
    pub fn display_name(&self) -> &str {
        match &self.email {
            Some(email) => email.split('@').next().unwrap_or(email),
            None => "Account",
        }
    }
}
