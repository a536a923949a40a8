pub mod auth;
pub mod socket;
pub mod table;

pub use auth::{logout_user, restore_session, sign_in_action};
