use yew::prelude::*;

use crate::actions::socket::connect_socket;
use crate::hooks::use_store_context;
use crate::stores::SocketStatus;

/// Icon, text and CSS class for a connection status.
pub fn indicator_parts(status: &SocketStatus, queued: usize) -> (&'static str, String, &'static str) {
    match status {
        SocketStatus::Disconnected if queued > 0 => (
            "📴",
            format!("Offline - {} queued", queued),
            "connection-indicator offline",
        ),
        SocketStatus::Disconnected => ("📴", "Offline".to_string(), "connection-indicator offline"),
        SocketStatus::Connecting => ("⏳", "Connecting...".to_string(), "connection-indicator connecting"),
        SocketStatus::Connected => ("🔄", "Connected".to_string(), "connection-indicator connected"),
        SocketStatus::Authenticated => ("✅", "Online".to_string(), "connection-indicator online"),
        SocketStatus::Failed(message) => ("⚠️", format!("Error: {}", message), "connection-indicator error"),
    }
}

#[function_component(ConnectionIndicator)]
pub fn connection_indicator() -> Html {
    let store = use_store_context();
    let socket = &store.state.socket;
    let (icon, text, class) = indicator_parts(&socket.status, socket.outbox.len());

    let onclick = store.dispatch.reform(|_: MouseEvent| connect_socket());

    html! {
        <div {class} {onclick} title="Click to connect">
            <span class="connection-icon">{icon}</span>
            <span class="connection-text">{text}</span>
        </div>
    }
}
