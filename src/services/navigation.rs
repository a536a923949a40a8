use wasm_bindgen::JsValue;
use yew::Callback;

use crate::models::Route;

pub trait Navigator {
    fn push(&self, route: Route);
}

/// Pushes onto the browser history and tells the app shell about it.
#[derive(Clone, PartialEq)]
pub struct HistoryNavigator {
    on_change: Callback<Route>,
}

impl HistoryNavigator {
    pub fn new(on_change: Callback<Route>) -> Self {
        Self { on_change }
    }
}

impl Navigator for HistoryNavigator {
    fn push(&self, route: Route) {
        let path = route.path();
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&path)) {
                log::warn!("⚠️ Could not push {} to history: {:?}", path, e);
            }
        }
        log::debug!("navigate {}", path);
        self.on_change.emit(route);
    }
}

/// Route for the page the browser is currently showing.
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Home)
}
