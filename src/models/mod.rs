pub mod action;
pub mod auth;
pub mod game;
pub mod lobby;
pub mod route;

pub use action::{Action, AuthAction, GameAction, LobbyAction, SeatRequest, ServerAction, SocketAction};
pub use auth::{Credentials, Session, SignInResponse, TokenData};
pub use game::{Chips, GameState, PlayerSeat, SeatViewModel, TableId};
pub use lobby::TableSummary;
pub use route::Route;
