// ============================================================================
// ROOT STORE - combines the per-slice reducers into one state tree
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use super::auth_store::{self, AuthStore};
use super::game_store::{self, GameStore};
use super::lobby_store::{self, LobbyStore};
use super::socket_store::{self, SocketStore};
use crate::models::Action;

/// Immutable state tree. Slices a reducer left untouched keep their `Rc`
/// identity, which is what the memoized selectors key on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootState {
    pub auth: Rc<AuthStore>,
    pub socket: Rc<SocketStore>,
    pub lobby: Rc<LobbyStore>,
    pub game: Rc<GameStore>,
}

impl RootState {
    pub fn apply(&self, action: &Action) -> RootState {
        RootState {
            auth: auth_store::reduce(&self.auth, action),
            socket: socket_store::reduce(&self.socket, action),
            lobby: lobby_store::reduce(&self.lobby, action),
            game: game_store::reduce(&self.game, action),
        }
    }

    pub fn shares_slices_with(&self, other: &RootState) -> bool {
        Rc::ptr_eq(&self.auth, &other.auth)
            && Rc::ptr_eq(&self.socket, &other.socket)
            && Rc::ptr_eq(&self.lobby, &other.lobby)
            && Rc::ptr_eq(&self.game, &other.game)
    }
}

impl Reducible for RootState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        log::debug!("dispatch {}", action.tag());
        let next = self.apply(&action);
        if next.shares_slices_with(&self) {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthAction, LobbyAction, Session, TableSummary};

    #[test]
    fn only_touched_slices_change() {
        let state = RootState::default();
        let next = state.apply(&Action::Auth(AuthAction::Authenticated(Session::new("abc", None))));
        assert!(!Rc::ptr_eq(&state.auth, &next.auth));
        assert!(Rc::ptr_eq(&state.lobby, &next.lobby));
        assert!(Rc::ptr_eq(&state.game, &next.game));
        assert!(Rc::ptr_eq(&state.socket, &next.socket));
    }

    #[test]
    fn no_op_dispatch_returns_same_tree() {
        let state = Rc::new(RootState::default());
        let next = Reducible::reduce(Rc::clone(&state), Action::Auth(AuthAction::Unauthenticated));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn lobby_push_reaches_lobby_slice() {
        let tables = vec![TableSummary {
            id: 9,
            name: "High stakes".into(),
            seated: 2,
            max_players: 6,
            small_blind: 50,
            big_blind: 100,
        }];
        let state = Reducible::reduce(
            Rc::new(RootState::default()),
            Action::Lobby(LobbyAction::NewLobby(tables.clone())),
        );
        assert_eq!(state.lobby.tables, tables);
    }
}
