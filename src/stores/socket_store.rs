// ============================================================================
// SOCKET STORE - connection status and queued server-bound actions
// ============================================================================
// No transport lives in this crate: server-bound actions wait in `outbox`.
// ============================================================================

use std::rc::Rc;

use super::settle;
use crate::models::{Action, ServerAction, SocketAction};

/// Oldest entries are dropped past this many queued messages.
pub const OUTBOX_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SocketStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Authenticated,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SocketStore {
    pub status: SocketStatus,
    pub outbox: Vec<ServerAction>,
}

pub fn reduce(state: &Rc<SocketStore>, action: &Action) -> Rc<SocketStore> {
    if let Some(message) = action.to_server() {
        let mut next = (**state).clone();
        if next.outbox.len() >= OUTBOX_CAPACITY {
            next.outbox.remove(0);
        }
        next.outbox.push(message);
        return Rc::new(next);
    }

    let Action::Socket(action) = action else {
        return Rc::clone(state);
    };
    let status = match action {
        SocketAction::Connect => SocketStatus::Connecting,
        SocketAction::Connected => SocketStatus::Connected,
        SocketAction::Disconnect => SocketStatus::Disconnected,
        SocketAction::AuthSuccess => SocketStatus::Authenticated,
        SocketAction::AuthError(message) | SocketAction::ConnectionError(message) => {
            SocketStatus::Failed(message.clone())
        }
    };
    settle(
        state,
        SocketStore {
            status,
            outbox: state.outbox.clone(),
        },
    )
}
