/// Backend base URL, set at compile time.
/// - Development: http://localhost:3000 (default)
/// - Production: via the BACKEND_URL env var or `.env`
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// localStorage key holding the raw session token.
pub const STORAGE_KEY_USER: &str = "user";

/// localStorage key holding JSON overrides for `ClientConfig`.
pub const STORAGE_KEY_CONFIG: &str = "poker_client_config";

pub const SIGN_IN_PATH: &str = "/signin";

/// Shown for every failed sign-in, whatever the underlying cause.
pub const SIGN_IN_ERROR_MESSAGE: &str = "Invalid email or password";

/// Prefix of actions that are meant to be forwarded to the game server.
pub const SERVER_ACTION_PREFIX: &str = "server/";
