// Connection lifecycle events. The UI only raises `connect_socket`; the rest
// are the contract for a websocket bridge.

use crate::models::{Action, SocketAction};

pub fn connect_socket() -> Action {
    Action::Socket(SocketAction::Connect)
}

pub fn socket_connected() -> Action {
    Action::Socket(SocketAction::Connected)
}

pub fn disconnect_socket() -> Action {
    Action::Socket(SocketAction::Disconnect)
}

pub fn socket_auth_success() -> Action {
    Action::Socket(SocketAction::AuthSuccess)
}

pub fn socket_auth_error(message: impl Into<String>) -> Action {
    Action::Socket(SocketAction::AuthError(message.into()))
}

pub fn socket_connection_error(message: impl Into<String>) -> Action {
    Action::Socket(SocketAction::ConnectionError(message.into()))
}
