pub mod auth_store;
pub mod game_store;
pub mod lobby_store;
pub mod root_store;
pub mod socket_store;

pub use auth_store::AuthStore;
pub use game_store::GameStore;
pub use lobby_store::LobbyStore;
pub use root_store::RootState;
pub use socket_store::{SocketStatus, SocketStore};

use std::rc::Rc;

/// Keeps the existing `Rc` when `next` equals the current slice.
pub(crate) fn settle<T: PartialEq>(state: &Rc<T>, next: T) -> Rc<T> {
    if **state == next {
        Rc::clone(state)
    } else {
        Rc::new(next)
    }
}
