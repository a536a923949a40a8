// ============================================================================
// APP - store provider, routing shell and page switch
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::{ConnectionIndicator, GameTable, Lobby, NavBar, SignInFormContainer};
use crate::actions::{logout_user, restore_session};
use crate::hooks::{use_store_context, StoreContextProvider};
use crate::models::Route;
use crate::selectors::{get_username, is_authenticated};
use crate::services::{current_route, HistoryNavigator, LocalTokenStorage, Navigator};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <StoreContextProvider>
            <Shell />
        </StoreContextProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let store = use_store_context();
    let route = use_state(current_route);

    let navigator = {
        let route = route.clone();
        HistoryNavigator::new(Callback::from(move |next: Route| route.set(next)))
    };

    // Pick up a token left by an earlier visit
    {
        let dispatch = store.dispatch.clone();
        use_effect_with((), move |_| {
            restore_session(&LocalTokenStorage, &dispatch);
            || ()
        });
    }

    // Browser back/forward
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|win| {
                let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    route.set(current_route());
                }) as Box<dyn FnMut(web_sys::Event)>);
                if let Err(e) = win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref()) {
                    log::warn!("⚠️ popstate listener not registered: {:?}", e);
                }
                (win, closure)
            });
            move || {
                if let Some((win, closure)) = listener {
                    let _ = win.remove_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
                }
            }
        });
    }

    let on_navigate = {
        let navigator = navigator.clone();
        Callback::from(move |next: Route| navigator.push(next))
    };

    let on_logout = {
        let dispatch = store.dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            logout_user(&LocalTokenStorage, &dispatch);
            navigator.push(Route::Home);
        })
    };

    let signed_in = is_authenticated(&store.state);
    let username = get_username(&store.state);

    let page = match *route {
        Route::Home => html! {
            <section class="hero">
                <div class="hero-body">
                    <h1 class="title">{"Poker"}</h1>
                    <p class="subtitle">{"No-limit hold'em with friends"}</p>
                    <button class="button is-primary" onclick={on_navigate.reform(|_: MouseEvent| Route::Lobby)}>
                        {"Go to lobby"}
                    </button>
                </div>
            </section>
        },
        Route::Lobby => html! { <Lobby navigator={navigator.clone()} /> },
        Route::Game(table_id) => html! { <GameTable {table_id} /> },
        Route::Profile if signed_in => html! {
            <section class="profile section">
                <h1 class="title">{username.clone().unwrap_or_default()}</h1>
                <p>{"Signed in"}</p>
            </section>
        },
        Route::Profile | Route::SignIn => html! { <SignInFormContainer navigator={navigator.clone()} /> },
        Route::SignUp => html! {
            <div class="notification">{"Registration is not available yet."}</div>
        },
    };

    html! {
        <>
            <NavBar
                is_authenticated={signed_in}
                username={username.map(AttrValue::from)}
                {on_navigate}
                {on_logout}
            />
            <ConnectionIndicator />
            <main class="container">{page}</main>
        </>
    }
}
