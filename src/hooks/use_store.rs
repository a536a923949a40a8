// ============================================================================
// USE STORE HOOK - root reducer + explicit dispatch
// ============================================================================

use yew::prelude::*;

use crate::models::Action;
use crate::stores::RootState;

#[derive(Clone, PartialEq)]
pub struct UseStoreHandle {
    pub state: UseReducerHandle<RootState>,
    pub dispatch: Callback<Action>,
}

#[hook]
pub fn use_store() -> UseStoreHandle {
    let state = use_reducer(RootState::default);

    let dispatch = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: Action| {
            if action.is_server_bound() {
                log::info!("📤 Queued for server: {}", action.tag());
            }
            dispatcher.dispatch(action);
        })
    };

    UseStoreHandle { state, dispatch }
}
