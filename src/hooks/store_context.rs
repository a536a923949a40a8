// ============================================================================
// STORE CONTEXT - share the store handle with every component
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_store::{use_store, UseStoreHandle};

#[derive(Properties, PartialEq)]
pub struct StoreContextProviderProps {
    pub children: Children,
}

/// Owns the store; everything below reads it with `use_store_context`.
#[function_component(StoreContextProvider)]
pub fn store_context_provider(props: &StoreContextProviderProps) -> Html {
    let store = use_store();

    html! {
        <ContextProvider<UseStoreHandle> context={store}>
            {props.children.clone()}
        </ContextProvider<UseStoreHandle>>
    }
}

#[hook]
pub fn use_store_context() -> UseStoreHandle {
    use_context::<UseStoreHandle>().expect("component rendered outside StoreContextProvider")
}
