use yew::prelude::*;

use crate::actions::table::get_lobby;
use crate::hooks::use_store_context;
use crate::models::{Route, TableSummary};
use crate::selectors::{get_lobby_state, get_lobby_tables};
use crate::services::{HistoryNavigator, Navigator};

#[derive(Properties, PartialEq)]
pub struct LobbyProps {
    pub navigator: HistoryNavigator,
}

#[function_component(Lobby)]
pub fn lobby(props: &LobbyProps) -> Html {
    let store = use_store_context();

    // ask the server for a fresh table list each time the lobby opens
    {
        let dispatch = store.dispatch.clone();
        use_effect_with((), move |_| {
            dispatch.emit(get_lobby());
            || ()
        });
    }

    let loading = get_lobby_state(&store.state).loading;
    let tables = get_lobby_tables(&store.state);

    html! {
        <section class="lobby section">
            <h1 class="title">{"Lobby"}</h1>
            if tables.is_empty() {
                <p class="lobby-empty">
                    { if loading { "Waiting for tables…" } else { "No open tables" } }
                </p>
            } else {
                <table class="table is-fullwidth lobby-tables">
                    <thead>
                        <tr>
                            <th>{"Table"}</th>
                            <th>{"Players"}</th>
                            <th>{"Blinds"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for tables.iter().map(|table| table_row(table, &props.navigator)) }
                    </tbody>
                </table>
            }
        </section>
    }
}

fn table_row(table: &TableSummary, navigator: &HistoryNavigator) -> Html {
    let onclick = {
        let navigator = navigator.clone();
        let table_id = table.id;
        Callback::from(move |_: MouseEvent| navigator.push(Route::Game(Some(table_id))))
    };

    html! {
        <tr key={table.id.to_string()}>
            <td>{table.name.clone()}</td>
            <td class="monospaced-font">{table.seats_label()}</td>
            <td class="monospaced-font">{table.blinds_label()}</td>
            <td>
                <button type="button" class="button is-small" {onclick}>
                    { if table.is_full() { "Watch" } else { "Join" } }
                </button>
            </td>
        </tr>
    }
}
