// ============================================================================
// AUTH ACTION CREATORS
// ============================================================================

use yew::Callback;

use crate::models::{Action, AuthAction, Credentials, Route, Session};
use crate::services::{AuthApi, Navigator, TokenStorage};
use crate::utils::constants::SIGN_IN_ERROR_MESSAGE;

pub fn auth_requested() -> Action {
    Action::Auth(AuthAction::Requested)
}

pub fn authenticated(session: Session) -> Action {
    Action::Auth(AuthAction::Authenticated(session))
}

pub fn unauthenticated() -> Action {
    Action::Auth(AuthAction::Unauthenticated)
}

pub fn authentication_error() -> Action {
    Action::Auth(AuthAction::Error(SIGN_IN_ERROR_MESSAGE.to_string()))
}

/// Single sign-in attempt. On success the token is stored, `AUTHENTICATED`
/// is dispatched and the lobby opens; any failure dispatches the generic
/// `AUTHENTICATION_ERROR` and touches nothing else.
pub async fn sign_in_action<A, S, N>(
    credentials: Credentials,
    api: &A,
    storage: &S,
    navigator: &N,
    dispatch: &Callback<Action>,
) where
    A: AuthApi,
    S: TokenStorage,
    N: Navigator,
{
    match api.sign_in(&credentials).await {
        Ok(response) => {
            let token = response.into_token();
            if let Err(e) = storage.set_token(&token) {
                log::error!("❌ Token not persisted: {}", e);
            }
            log::info!("✅ Signed in: {}", credentials.email);
            dispatch.emit(authenticated(Session::new(token, Some(credentials.email))));
            navigator.push(Route::Lobby);
        }
        Err(e) => {
            log::error!("❌ Sign-in failed: {}", e);
            dispatch.emit(authentication_error());
        }
    }
}

pub fn logout_user<S: TokenStorage>(storage: &S, dispatch: &Callback<Action>) {
    if let Err(e) = storage.clear_token() {
        log::warn!("⚠️ Token not removed: {}", e);
    }
    log::info!("👋 Logout");
    dispatch.emit(unauthenticated());
}

/// Re-enters the authenticated state from a token left by an earlier visit.
pub fn restore_session<S: TokenStorage>(storage: &S, dispatch: &Callback<Action>) -> bool {
    match storage.token() {
        Some(token) => {
            log::info!("✅ Restored stored session");
            dispatch.emit(authenticated(Session::new(token, None)));
            true
        }
        None => false,
    }
}
