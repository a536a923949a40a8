use serde::{Deserialize, Serialize};

pub type TableId = u32;
pub type Chips = u64;

/// An occupied seat in a server-pushed game state.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PlayerSeat {
    pub player_name: String,
    pub chips: Chips,
    #[serde(default)]
    pub has_pocket_cards: bool,
}

/// Table snapshot pushed by the server. `seats` is indexed by position;
/// `None` marks an empty seat.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct GameState {
    pub table_id: TableId,
    pub seats: Vec<Option<PlayerSeat>>,
    #[serde(default)]
    pub to_act: Option<usize>,
    #[serde(default)]
    pub pot: Chips,
}

/// Per-seat display data, derived from `GameState` on every push.
#[derive(Clone, PartialEq, Debug)]
pub struct SeatViewModel {
    pub position: usize,
    pub player_name: Option<String>,
    pub chips: Chips,
    pub is_turn_to_act: bool,
    pub has_pocket_cards: bool,
}

impl SeatViewModel {
    pub fn is_empty(&self) -> bool {
        self.player_name.is_none()
    }
}

impl GameState {
    pub fn seat_views(&self) -> Vec<SeatViewModel> {
        self.seats
            .iter()
            .enumerate()
            .map(|(position, seat)| {
                let is_turn_to_act = self.to_act == Some(position);
                match seat {
                    Some(player) => SeatViewModel {
                        position,
                        player_name: Some(player.player_name.clone()),
                        chips: player.chips,
                        is_turn_to_act,
                        has_pocket_cards: player.has_pocket_cards,
                    },
                    None => SeatViewModel {
                        position,
                        player_name: None,
                        chips: 0,
                        is_turn_to_act: false,
                        has_pocket_cards: false,
                    },
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_views_mark_turn_and_empty_seats() {
        let state: GameState = serde_json::from_str(
            r#"{
                "table_id": 3,
                "seats": [
                    {"player_name": "ann", "chips": 900, "has_pocket_cards": true},
                    null,
                    {"player_name": "bob", "chips": 1100}
                ],
                "to_act": 2,
                "pot": 30
            }"#,
        )
        .unwrap();

        let views = state.seat_views();
        assert_eq!(views.len(), 3);
        assert_eq!(views[0].player_name.as_deref(), Some("ann"));
        assert!(views[0].has_pocket_cards);
        assert!(!views[0].is_turn_to_act);
        assert!(views[1].is_empty());
        assert_eq!(views[1].chips, 0);
        assert!(views[2].is_turn_to_act);
        assert!(!views[2].has_pocket_cards);
    }

    #[test]
    fn turn_on_empty_seat_is_not_shown() {
        let state = GameState {
            table_id: 1,
            seats: vec![None],
            to_act: Some(0),
            pot: 0,
        };
        assert!(!state.seat_views()[0].is_turn_to_act);
    }
}
