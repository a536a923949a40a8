use yew::prelude::*;

use crate::actions::table::{
    bet, call, check, fold, leave_seat, post_big_blind, post_small_blind, raise, take_seat,
};
use crate::components::action_panel::{parse_bet_value, ActionPanel};
use crate::components::seat::Seat;
use crate::hooks::use_store_context;
use crate::models::{Action, Chips, GameState, TableId};
use crate::selectors::{get_own_seat, get_seat_views};

#[derive(Properties, PartialEq)]
pub struct GameTableProps {
    /// Table picked in the lobby; falls back to the last pushed game.
    #[prop_or_default]
    pub table_id: Option<TableId>,
}

/// Seat notice for the shown table; nothing until that table's state arrives.
pub fn own_seat_notice(game: Option<&GameState>, own_seat: Option<usize>) -> Option<String> {
    game.and(own_seat).map(|position| format!("You are in seat {}", position + 1))
}

#[function_component(GameTable)]
pub fn game_table(props: &GameTableProps) -> Html {
    let store = use_store_context();
    let bet_value = use_state(String::new);

    let Some(table_id) = props.table_id.or(store.state.game.table_id()) else {
        return html! {
            <div class="notification">{"Pick a table in the lobby to start playing."}</div>
        };
    };

    let dispatch = store.dispatch.clone();
    let send = |make: fn(TableId) -> Action| dispatch.reform(move |_: ()| make(table_id));
    let send_amount =
        |make: fn(TableId, Chips) -> Action| dispatch.reform(move |amount: Chips| make(table_id, amount));

    let on_change = {
        let bet_value = bet_value.clone();
        Callback::from(move |value: String| bet_value.set(value))
    };
    let on_sit_down = dispatch.reform(move |buy_in: Chips| take_seat(table_id, None, buy_in));
    let on_take_seat = {
        let dispatch = dispatch.clone();
        let buy_in = parse_bet_value(&bet_value);
        Callback::from(move |position: usize| match buy_in {
            Some(buy_in) => dispatch.emit(take_seat(table_id, Some(position), buy_in)),
            None => log::warn!("⚠️ Enter a buy-in before taking seat {}", position),
        })
    };

    let game = store.state.game.state.as_ref().filter(|game| game.table_id == table_id);
    let seats = get_seat_views(&store.state);
    let notice = own_seat_notice(game, get_own_seat(&store.state));

    html! {
        <section class="game section">
            <h1 class="title">{format!("Table {}", table_id)}</h1>
            if let Some(game) = game {
                <div class="poker-table">
                    <div class="pot">{"Pot "}<span class="monospaced-font">{game.pot}</span></div>
                    { for seats.iter().cloned().map(|view| {
                        let position = view.position;
                        html! { <Seat key={position} {view} on_take_seat={on_take_seat.clone()} /> }
                    }) }
                </div>
            } else {
                <p class="game-waiting">{"Waiting for the table state…"}</p>
            }
            if let Some(notice) = notice {
                <p class="own-seat">{notice}</p>
            }
            <ActionPanel
                bet_value={(*bet_value).clone()}
                {on_change}
                on_post_big_blind={send(post_big_blind)}
                on_post_small_blind={send(post_small_blind)}
                on_check={send(check)}
                on_call={send(call)}
                on_bet={send_amount(bet)}
                on_raise={send_amount(raise)}
                on_fold={send(fold)}
                {on_sit_down}
                on_leave={send(leave_seat)}
            />
        </section>
    }
}
