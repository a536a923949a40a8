use serde::{Deserialize, Serialize};

use super::game::{Chips, TableId};

/// One row of the lobby, as pushed by the server.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TableSummary {
    pub id: TableId,
    pub name: String,
    #[serde(default)]
    pub seated: u8,
    pub max_players: u8,
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl TableSummary {
    pub fn is_full(&self) -> bool {
        self.seated >= self.max_players
    }

    pub fn blinds_label(&self) -> String {
        format!("{}/{}", self.small_blind, self.big_blind)
    }

    pub fn seats_label(&self) -> String {
        format!("{}/{}", self.seated, self.max_players)
    }
}
