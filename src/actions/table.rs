// Lobby and game intents. Tags prefixed `server/` are forwarded to the server.

use crate::models::{Action, Chips, GameAction, GameState, LobbyAction, SeatRequest, TableId, TableSummary};

pub fn get_lobby() -> Action {
    Action::Lobby(LobbyAction::GetLobby)
}

pub fn new_lobby(tables: Vec<TableSummary>) -> Action {
    Action::Lobby(LobbyAction::NewLobby(tables))
}

pub fn take_seat(table_id: TableId, seat: Option<usize>, buy_in: Chips) -> Action {
    Action::Lobby(LobbyAction::TakeSeat(SeatRequest {
        table_id,
        seat,
        buy_in,
    }))
}

pub fn new_game_state(state: GameState) -> Action {
    Action::Game(GameAction::NewGameState(state))
}

pub fn successfully_sat_down(position: usize) -> Action {
    Action::Game(GameAction::SatDown { position })
}

pub fn post_big_blind(table_id: TableId) -> Action {
    Action::Game(GameAction::PostBigBlind(table_id))
}

pub fn post_small_blind(table_id: TableId) -> Action {
    Action::Game(GameAction::PostSmallBlind(table_id))
}

pub fn bet(table_id: TableId, amount: Chips) -> Action {
    Action::Game(GameAction::Bet { table_id, amount })
}

pub fn raise(table_id: TableId, amount: Chips) -> Action {
    Action::Game(GameAction::Raise { table_id, amount })
}

pub fn check(table_id: TableId) -> Action {
    Action::Game(GameAction::Check(table_id))
}

pub fn call(table_id: TableId) -> Action {
    Action::Game(GameAction::Call(table_id))
}

pub fn fold(table_id: TableId) -> Action {
    Action::Game(GameAction::Fold(table_id))
}

pub fn leave_seat(table_id: TableId) -> Action {
    Action::Game(GameAction::LeaveSeat(table_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServerAction;

    #[test]
    fn betting_intents_go_to_server() {
        for action in [
            post_big_blind(1),
            post_small_blind(1),
            bet(1, 20),
            raise(1, 40),
            check(1),
            call(1),
            fold(1),
            leave_seat(1),
            get_lobby(),
            take_seat(1, None, 200),
        ] {
            assert!(action.is_server_bound(), "{}", action.tag());
        }
    }

    #[test]
    fn pushes_stay_local() {
        assert!(!new_lobby(Vec::new()).is_server_bound());
        assert!(!successfully_sat_down(3).is_server_bound());
    }

    #[test]
    fn take_seat_carries_request() {
        assert_eq!(
            take_seat(8, Some(2), 1500).to_server(),
            Some(ServerAction::TakeSeat(SeatRequest {
                table_id: 8,
                seat: Some(2),
                buy_in: 1500,
            }))
        );
    }
}
