use crate::utils::constants::STORAGE_KEY_USER;
use crate::utils::storage::{load_raw, remove_from_storage, save_raw};

/// Where the session token is persisted between page loads.
pub trait TokenStorage {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str) -> Result<(), String>;
    fn clear_token(&self) -> Result<(), String>;
}

/// Browser localStorage under the `user` key.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalTokenStorage;

impl TokenStorage for LocalTokenStorage {
    fn token(&self) -> Option<String> {
        load_raw(STORAGE_KEY_USER).filter(|token| !token.is_empty())
    }

    fn set_token(&self, token: &str) -> Result<(), String> {
        save_raw(STORAGE_KEY_USER, token)
    }

    fn clear_token(&self) -> Result<(), String> {
        remove_from_storage(STORAGE_KEY_USER)
    }
}
