use crate::stores::RootState;

pub fn is_authenticated(state: &RootState) -> bool {
    state.auth.is_authenticated()
}

pub fn get_auth_error(state: &RootState) -> Option<String> {
    state.auth.error().map(str::to_string)
}

pub fn get_username(state: &RootState) -> Option<String> {
    state.auth.session().map(|session| session.display_name().to_string())
}
