// ============================================================================
// ACTIONS - closed set of intents and events folded by the reducers
// ============================================================================
// Tags prefixed with `server/` mark intents meant for the game server.
// ============================================================================

use serde::Serialize;

use super::auth::Session;
use super::game::{Chips, GameState, TableId};
use super::lobby::TableSummary;
use crate::utils::constants::SERVER_ACTION_PREFIX;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Socket(SocketAction),
    Lobby(LobbyAction),
    Game(GameAction),
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    Requested,
    Authenticated(Session),
    Unauthenticated,
    Error(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SocketAction {
    Connect,
    Connected,
    Disconnect,
    AuthSuccess,
    AuthError(String),
    ConnectionError(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum LobbyAction {
    GetLobby,
    TakeSeat(SeatRequest),
    NewLobby(Vec<TableSummary>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameAction {
    NewGameState(GameState),
    SatDown { position: usize },
    PostBigBlind(TableId),
    PostSmallBlind(TableId),
    Bet { table_id: TableId, amount: Chips },
    Raise { table_id: TableId, amount: Chips },
    Check(TableId),
    Fold(TableId),
    Call(TableId),
    LeaveSeat(TableId),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeatRequest {
    pub table_id: TableId,
    /// `None` lets the server pick a free seat.
    pub seat: Option<usize>,
    pub buy_in: Chips,
}

/// Wire form of a server-bound action: `{ "type": "server/...", "payload": ... }`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum ServerAction {
    #[serde(rename = "server/GET_LOBBY")]
    GetLobby,
    #[serde(rename = "server/TAKE_SEAT")]
    TakeSeat(SeatRequest),
    #[serde(rename = "server/POST_BIG_BLIND")]
    PostBigBlind { table_id: TableId },
    #[serde(rename = "server/POST_SMALL_BLIND")]
    PostSmallBlind { table_id: TableId },
    #[serde(rename = "server/BET")]
    Bet { table_id: TableId, amount: Chips },
    #[serde(rename = "server/RAISE")]
    Raise { table_id: TableId, amount: Chips },
    #[serde(rename = "server/CHECK")]
    Check { table_id: TableId },
    #[serde(rename = "server/FOLD")]
    Fold { table_id: TableId },
    #[serde(rename = "server/CALL")]
    Call { table_id: TableId },
    #[serde(rename = "server/LEAVE_SEAT")]
    LeaveSeat { table_id: TableId },
}

impl Action {
    pub fn tag(&self) -> &'static str {
        match self {
            Action::Auth(action) => match action {
                AuthAction::Requested => "AUTH_REQUESTED",
                AuthAction::Authenticated(_) => "AUTHENTICATED",
                AuthAction::Unauthenticated => "UNAUTHENTICATED",
                AuthAction::Error(_) => "AUTHENTICATION_ERROR",
            },
            Action::Socket(action) => match action {
                SocketAction::Connect => "CONNECT_SOCKET",
                SocketAction::Connected => "SOCKET_CONNECTED",
                SocketAction::Disconnect => "DISCONNECT_SOCKET",
                SocketAction::AuthSuccess => "SOCKET_AUTH_SUCCESS",
                SocketAction::AuthError(_) => "SOCKET_AUTH_ERR",
                SocketAction::ConnectionError(_) => "SOCKET_CONN_ERR",
            },
            Action::Lobby(action) => match action {
                LobbyAction::GetLobby => "server/GET_LOBBY",
                LobbyAction::TakeSeat(_) => "server/TAKE_SEAT",
                LobbyAction::NewLobby(_) => "NEW_LOBBY",
            },
            Action::Game(action) => match action {
                GameAction::NewGameState(_) => "NEW_GAME_STATE",
                GameAction::SatDown { .. } => "SUCCESSFULLY_SAT_DOWN",
                GameAction::PostBigBlind(_) => "server/POST_BIG_BLIND",
                GameAction::PostSmallBlind(_) => "server/POST_SMALL_BLIND",
                GameAction::Bet { .. } => "server/BET",
                GameAction::Raise { .. } => "server/RAISE",
                GameAction::Check(_) => "server/CHECK",
                GameAction::Fold(_) => "server/FOLD",
                GameAction::Call(_) => "server/CALL",
                GameAction::LeaveSeat(_) => "server/LEAVE_SEAT",
            },
        }
    }

    pub fn is_server_bound(&self) -> bool {
        self.tag().starts_with(SERVER_ACTION_PREFIX)
    }

    /// The message to forward to the game server, if this action is one.
    pub fn to_server(&self) -> Option<ServerAction> {
        let message = match self {
            Action::Lobby(LobbyAction::GetLobby) => ServerAction::GetLobby,
            Action::Lobby(LobbyAction::TakeSeat(request)) => ServerAction::TakeSeat(request.clone()),
            Action::Game(GameAction::PostBigBlind(table_id)) => ServerAction::PostBigBlind { table_id: *table_id },
            Action::Game(GameAction::PostSmallBlind(table_id)) => ServerAction::PostSmallBlind { table_id: *table_id },
            Action::Game(GameAction::Bet { table_id, amount }) => ServerAction::Bet {
                table_id: *table_id,
                amount: *amount,
            },
            Action::Game(GameAction::Raise { table_id, amount }) => ServerAction::Raise {
                table_id: *table_id,
                amount: *amount,
            },
            Action::Game(GameAction::Check(table_id)) => ServerAction::Check { table_id: *table_id },
            Action::Game(GameAction::Fold(table_id)) => ServerAction::Fold { table_id: *table_id },
            Action::Game(GameAction::Call(table_id)) => ServerAction::Call { table_id: *table_id },
            Action::Game(GameAction::LeaveSeat(table_id)) => ServerAction::LeaveSeat { table_id: *table_id },
            _ => return None,
        };
        Some(message)
    }
}
