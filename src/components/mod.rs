pub mod action_panel;
pub mod app;
pub mod connection_indicator;
pub mod game_table;
pub mod lobby;
pub mod nav_bar;
pub mod seat;
pub mod sign_in_form;

pub use action_panel::ActionPanel;
pub use app::App;
pub use connection_indicator::ConnectionIndicator;
pub use game_table::GameTable;
pub use lobby::Lobby;
pub use nav_bar::NavBar;
pub use seat::Seat;
pub use sign_in_form::{validate_form, SignInFormContainer};
