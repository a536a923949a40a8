use super::game::TableId;

/// Client-side pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Lobby,
    Game(Option<TableId>),
    Profile,
    SignIn,
    SignUp,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Lobby => "/lobby".to_string(),
            Route::Game(None) => "/game".to_string(),
            Route::Game(Some(table)) => format!("/game/{}", table),
            Route::Profile => "/profile".to_string(),
            Route::SignIn => "/signin".to_string(),
            Route::SignUp => "/signup".to_string(),
        }
    }

    /// Unknown paths resolve to `Home`.
    pub fn from_path(path: &str) -> Route {
        let mut segments = path.trim_matches('/').split('/');
        match (segments.next().unwrap_or(""), segments.next()) {
            ("lobby", None) => Route::Lobby,
            ("game", None) => Route::Game(None),
            ("game", Some(table)) => Route::Game(table.parse().ok()),
            ("profile", None) => Route::Profile,
            ("signin", None) => Route::SignIn,
            ("signup", None) => Route::SignUp,
            _ => Route::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_route_carries_table_id() {
        assert_eq!(Route::Game(Some(42)).path(), "/game/42");
        assert_eq!(Route::from_path("/game/42"), Route::Game(Some(42)));
        assert_eq!(Route::from_path("/game"), Route::Game(None));
    }

    #[test]
    fn relative_and_unknown_paths() {
        assert_eq!(Route::from_path("lobby"), Route::Lobby);
        assert_eq!(Route::from_path("/lobby/"), Route::Lobby);
        assert_eq!(Route::from_path("/game/abc"), Route::Game(None));
        assert_eq!(Route::from_path("/cashier"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
    }
}
