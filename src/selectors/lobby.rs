use std::rc::Rc;

use super::memo::Memo;
use crate::models::TableSummary;
use crate::stores::{LobbyStore, RootState};

thread_local! {
    static LOBBY_TABLES: Memo<LobbyStore, Vec<TableSummary>> = const { Memo::new() };
}

pub fn get_lobby_state(state: &RootState) -> Rc<LobbyStore> {
    Rc::clone(&state.lobby)
}

/// Table list, stable across calls while the lobby slice is unchanged.
pub fn get_lobby_tables(state: &RootState) -> Rc<Vec<TableSummary>> {
    let lobby = get_lobby_state(state);
    LOBBY_TABLES.with(|memo| memo.get_or_compute(&lobby, |lobby| lobby.tables.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, AuthAction, LobbyAction, Session};

    fn table(id: u32) -> TableSummary {
        TableSummary {
            id,
            name: format!("Table {}", id),
            seated: 1,
            max_players: 6,
            small_blind: 5,
            big_blind: 10,
        }
    }

    #[test]
    fn tables_are_referentially_stable() {
        let state = RootState::default().apply(&Action::Lobby(LobbyAction::NewLobby(vec![table(1)])));
        let first = get_lobby_tables(&state);
        let second = get_lobby_tables(&state);
        assert!(Rc::ptr_eq(&first, &second));

        // other slices changing does not invalidate
        let state = state.apply(&Action::Auth(AuthAction::Authenticated(Session::new("t", None))));
        assert!(Rc::ptr_eq(&first, &get_lobby_tables(&state)));
    }

    #[test]
    fn new_lobby_yields_new_tables() {
        let state = RootState::default().apply(&Action::Lobby(LobbyAction::NewLobby(vec![table(1)])));
        let before = get_lobby_tables(&state);
        let state = state.apply(&Action::Lobby(LobbyAction::NewLobby(vec![table(1), table(2)])));
        let after = get_lobby_tables(&state);
        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(after.len(), 2);
    }
}
