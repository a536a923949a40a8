// Read-only projections over `RootState`

pub mod auth;
pub mod game;
pub mod lobby;
pub mod memo;

pub use auth::{get_auth_error, get_username, is_authenticated};
pub use game::{get_own_seat, get_seat_views};
pub use lobby::{get_lobby_state, get_lobby_tables};
pub use memo::Memo;
