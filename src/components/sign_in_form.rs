// ============================================================================
// SIGN IN FORM CONTAINER - holds the input values, runs the sign-in thunk
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::actions::auth::{auth_requested, sign_in_action};
use crate::hooks::use_store_context;
use crate::models::Credentials;
use crate::selectors::get_auth_error;
use crate::services::{HistoryNavigator, HttpAuthApi, LocalTokenStorage};

/// Valid only when both values are present and non-empty.
pub fn validate_form(email: Option<&str>, password: Option<&str>) -> bool {
    matches!((email, password), (Some(email), Some(password)) if !email.is_empty() && !password.is_empty())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignInFields {
    pub email: String,
    pub password: String,
}

impl SignInFields {
    /// Applies an input change addressed by the input's `name`.
    pub fn with_field(mut self, name: &str, value: String) -> Self {
        match name {
            "email" => self.email = value,
            "password" => self.password = value,
            other => log::warn!("⚠️ Ignoring change to unknown field '{}'", other),
        }
        self
    }

    pub fn validate_form(&self) -> bool {
        validate_form(Some(&self.email), Some(&self.password))
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

#[derive(Properties, PartialEq)]
pub struct SignInFormContainerProps {
    pub navigator: HistoryNavigator,
}

#[function_component(SignInFormContainer)]
pub fn sign_in_form_container(props: &SignInFormContainerProps) -> Html {
    let store = use_store_context();
    let fields = use_state(SignInFields::default);
    let attempted = use_state(|| false);

    let handle_change = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            fields.set((*fields).clone().with_field(&input.name(), input.value()));
        })
    };

    let handle_submit = {
        let fields = fields.clone();
        let attempted = attempted.clone();
        let dispatch = store.dispatch.clone();
        let navigator = props.navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            attempted.set(true);

            let current = (*fields).clone();
            if !current.validate_form() {
                return;
            }

            dispatch.emit(auth_requested());
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = HttpAuthApi::new();
                sign_in_action(current.credentials(), &api, &LocalTokenStorage, &navigator, &dispatch).await;
            });
        })
    };

    let auth_error = get_auth_error(&store.state);
    let show_missing = *attempted && !fields.validate_form();

    html! {
        <div class="sign-in">
            <form class="sign-in-form box" onsubmit={handle_submit}>
                <div class="field">
                    <label class="label" for="email">{"Email"}</label>
                    <input
                        class="input"
                        type="email"
                        id="email"
                        name="email"
                        placeholder="you@example.com"
                        value={fields.email.clone()}
                        oninput={handle_change.clone()}
                    />
                </div>
                <div class="field">
                    <label class="label" for="password">{"Password"}</label>
                    <input
                        class="input"
                        type="password"
                        id="password"
                        name="password"
                        value={fields.password.clone()}
                        oninput={handle_change}
                    />
                </div>
                if show_missing {
                    <p class="help is-danger">{"Email and password are required"}</p>
                }
                if let Some(message) = auth_error {
                    <p class="help is-danger auth-error">{message}</p>
                }
                <button type="submit" class="button is-primary">{"Sign in"}</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_required() {
        assert!(validate_form(Some("ann@example.com"), Some("secret")));
        assert!(!validate_form(Some(""), Some("secret")));
        assert!(!validate_form(Some("ann@example.com"), Some("")));
        assert!(!validate_form(None, Some("secret")));
        assert!(!validate_form(Some("ann@example.com"), None));
        assert!(!validate_form(None, None));
    }

    #[test]
    fn no_format_checks() {
        assert!(validate_form(Some("not-an-email"), Some("1")));
    }

    #[test]
    fn changes_are_routed_by_input_name() {
        let fields = SignInFields::default()
            .with_field("email", "ann@example.com".into())
            .with_field("remember", "on".into());
        assert!(!fields.validate_form());

        let fields = fields.with_field("password", "secret".into());
        assert!(fields.validate_form());
        assert_eq!(fields.credentials(), Credentials::new("ann@example.com", "secret"));
    }
}
