use std::rc::Rc;

use super::settle;
use crate::models::{Action, AuthAction, GameAction, GameState, TableId};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameStore {
    pub state: Option<GameState>,
    /// Our seat at the current table, once the server confirmed it.
    pub own_seat: Option<usize>,
}

impl GameStore {
    pub fn table_id(&self) -> Option<TableId> {
        self.state.as_ref().map(|game| game.table_id)
    }
}

pub fn reduce(state: &Rc<GameStore>, action: &Action) -> Rc<GameStore> {
    match action {
        Action::Auth(AuthAction::Unauthenticated) => settle(state, GameStore::default()),
        Action::Game(GameAction::NewGameState(game)) => {
            let own_seat = match state.table_id() {
                Some(table_id) if table_id != game.table_id => None,
                _ => state.own_seat,
            };
            Rc::new(GameStore {
                state: Some(game.clone()),
                own_seat,
            })
        }
        Action::Game(GameAction::SatDown { position }) => settle(
            state,
            GameStore {
                state: state.state.clone(),
                own_seat: Some(*position),
            },
        ),
        Action::Game(GameAction::LeaveSeat(_)) => settle(
            state,
            GameStore {
                state: state.state.clone(),
                own_seat: None,
            },
        ),
        _ => Rc::clone(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerSeat;

    fn game(table_id: TableId) -> GameState {
        GameState {
            table_id,
            seats: vec![
                Some(PlayerSeat {
                    player_name: "ann".into(),
                    chips: 1000,
                    has_pocket_cards: false,
                }),
                None,
            ],
            to_act: Some(0),
            pot: 0,
        }
    }

    #[test]
    fn seat_survives_pushes_for_same_table() {
        let mut state = Rc::new(GameStore::default());
        state = reduce(&state, &Action::Game(GameAction::NewGameState(game(1))));
        state = reduce(&state, &Action::Game(GameAction::SatDown { position: 1 }));
        state = reduce(&state, &Action::Game(GameAction::NewGameState(game(1))));
        assert_eq!(state.own_seat, Some(1));

        state = reduce(&state, &Action::Game(GameAction::NewGameState(game(2))));
        assert_eq!(state.own_seat, None);
        assert_eq!(state.table_id(), Some(2));
    }

    #[test]
    fn leaving_clears_seat() {
        let mut state = Rc::new(GameStore::default());
        state = reduce(&state, &Action::Game(GameAction::SatDown { position: 4 }));
        state = reduce(&state, &Action::Game(GameAction::LeaveSeat(1)));
        assert_eq!(state.own_seat, None);
    }

    #[test]
    fn sign_out_clears_table() {
        let state = reduce(&Rc::new(GameStore::default()), &Action::Game(GameAction::NewGameState(game(1))));
        let state = reduce(&state, &Action::Auth(AuthAction::Unauthenticated));
        assert_eq!(*state, GameStore::default());
    }

    #[test]
    fn betting_actions_do_not_change_local_state() {
        let state = reduce(&Rc::new(GameStore::default()), &Action::Game(GameAction::NewGameState(game(1))));
        for action in [
            GameAction::Bet { table_id: 1, amount: 10 },
            GameAction::Check(1),
            GameAction::PostBigBlind(1),
        ] {
            assert!(Rc::ptr_eq(&state, &reduce(&state, &Action::Game(action))));
        }
    }
}
