// ============================================================================
// AUTH STORE - Unauthenticated / Authenticated / AuthError
// ============================================================================

use std::rc::Rc;

use super::settle;
use crate::models::{Action, AuthAction, Session};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthStore {
    #[default]
    Unauthenticated,
    Authenticated(Session),
    AuthError(String),
}

impl AuthStore {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStore::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthStore::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AuthStore::AuthError(message) => Some(message),
            _ => None,
        }
    }
}

pub fn reduce(state: &Rc<AuthStore>, action: &Action) -> Rc<AuthStore> {
    let Action::Auth(action) = action else {
        return Rc::clone(state);
    };
    let next = match (&**state, action) {
        (_, AuthAction::Authenticated(session)) => AuthStore::Authenticated(session.clone()),
        (_, AuthAction::Unauthenticated) => AuthStore::Unauthenticated,
        // a failed attempt replaces any session, so the form always sees the error
        (_, AuthAction::Error(message)) => AuthStore::AuthError(message.clone()),
        (AuthStore::AuthError(_), AuthAction::Requested) => AuthStore::Unauthenticated,
        (_, AuthAction::Requested) => return Rc::clone(state),
    };
    settle(state, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameAction, LobbyAction};

    fn all_states() -> Vec<Rc<AuthStore>> {
        vec![
            Rc::new(AuthStore::Unauthenticated),
            Rc::new(AuthStore::Authenticated(Session::new("old", Some("ann@example.com".into())))),
            Rc::new(AuthStore::AuthError("Invalid email or password".into())),
        ]
    }

    fn authenticated(token: &str) -> Action {
        Action::Auth(AuthAction::Authenticated(Session::new(token, None)))
    }

    #[test]
    fn authenticated_from_any_state() {
        for state in all_states() {
            let next = reduce(&state, &authenticated("fresh"));
            assert_eq!(*next, AuthStore::Authenticated(Session::new("fresh", None)));
        }
    }

    #[test]
    fn unauthenticated_from_any_state() {
        for state in all_states() {
            let next = reduce(&state, &Action::Auth(AuthAction::Unauthenticated));
            assert_eq!(*next, AuthStore::Unauthenticated);
        }
    }

    #[test]
    fn repeated_transition_keeps_identity() {
        let state = reduce(&Rc::new(AuthStore::default()), &authenticated("abc"));
        let again = reduce(&state, &authenticated("abc"));
        assert!(Rc::ptr_eq(&state, &again));

        let out = Rc::new(AuthStore::Unauthenticated);
        assert!(Rc::ptr_eq(&out, &reduce(&out, &Action::Auth(AuthAction::Unauthenticated))));
    }

    #[test]
    fn error_is_recorded_when_not_signed_in() {
        let state = Rc::new(AuthStore::Unauthenticated);
        let next = reduce(&state, &Action::Auth(AuthAction::Error("Invalid email or password".into())));
        assert_eq!(next.error(), Some("Invalid email or password"));
        assert!(!next.is_authenticated());
    }

    #[test]
    fn failed_sign_in_ends_live_session() {
        let mut state = Rc::new(AuthStore::Authenticated(Session::new("old", None)));
        state = reduce(&state, &Action::Auth(AuthAction::Requested));
        state = reduce(&state, &Action::Auth(AuthAction::Error("Invalid email or password".into())));
        assert_eq!(*state, AuthStore::AuthError("Invalid email or password".into()));
        assert!(state.session().is_none());
        assert_eq!(state.error(), Some("Invalid email or password"));
    }

    #[test]
    fn error_from_any_state() {
        for state in all_states() {
            let next = reduce(&state, &Action::Auth(AuthAction::Error("nope".into())));
            assert_eq!(next.error(), Some("nope"));
            assert!(!next.is_authenticated());
        }
    }

    #[test]
    fn new_attempt_clears_error() {
        let state = Rc::new(AuthStore::AuthError("Invalid email or password".into()));
        let next = reduce(&state, &Action::Auth(AuthAction::Requested));
        assert_eq!(*next, AuthStore::Unauthenticated);

        let signed_in = Rc::new(AuthStore::Authenticated(Session::new("abc", None)));
        assert!(Rc::ptr_eq(&signed_in, &reduce(&signed_in, &Action::Auth(AuthAction::Requested))));
    }

    #[test]
    fn foreign_actions_are_ignored() {
        for state in all_states() {
            for action in [
                Action::Lobby(LobbyAction::GetLobby),
                Action::Game(GameAction::Fold(1)),
            ] {
                assert!(Rc::ptr_eq(&state, &reduce(&state, &action)));
            }
        }
    }
}
