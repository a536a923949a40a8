pub mod auth_service;
pub mod navigation;
pub mod token_storage;

pub use auth_service::{AuthApi, HttpAuthApi};
pub use navigation::{current_route, HistoryNavigator, Navigator};
pub use token_storage::{LocalTokenStorage, TokenStorage};
