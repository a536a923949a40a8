use std::rc::Rc;

use super::settle;
use crate::models::{Action, LobbyAction, TableSummary};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LobbyStore {
    pub tables: Vec<TableSummary>,
    /// Set while a lobby request is outstanding.
    pub loading: bool,
}

pub fn reduce(state: &Rc<LobbyStore>, action: &Action) -> Rc<LobbyStore> {
    let Action::Lobby(action) = action else {
        return Rc::clone(state);
    };
    match action {
        LobbyAction::GetLobby => settle(
            state,
            LobbyStore {
                tables: state.tables.clone(),
                loading: true,
            },
        ),
        // a fresh push always replaces the slice, even with equal contents
        LobbyAction::NewLobby(tables) => Rc::new(LobbyStore {
            tables: tables.clone(),
            loading: false,
        }),
        LobbyAction::TakeSeat(_) => Rc::clone(state),
    }
}
