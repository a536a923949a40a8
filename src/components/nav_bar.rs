use yew::prelude::*;

use crate::models::Route;

#[derive(Clone, Debug, PartialEq)]
pub enum NavTarget {
    Route(Route),
    Logout,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: String,
    pub target: NavTarget,
}

impl NavItem {
    fn to(label: &str, route: Route) -> Self {
        Self {
            label: label.to_string(),
            target: NavTarget::Route(route),
        }
    }

    /// List key; labels can collide with a username, targets cannot.
    pub fn key(&self) -> String {
        match &self.target {
            NavTarget::Route(route) => route.path(),
            NavTarget::Logout => "logout".to_string(),
        }
    }
}

pub fn nav_start_items() -> Vec<NavItem> {
    vec![NavItem::to("Lobby", Route::Lobby), NavItem::to("Game", Route::Game(None))]
}

/// Right-hand links: account and logout when signed in, login and register otherwise.
pub fn nav_end_items(is_authenticated: bool, username: Option<&str>) -> Vec<NavItem> {
    if is_authenticated {
        vec![
            NavItem::to(username.unwrap_or("Profile"), Route::Profile),
            NavItem {
                label: "Logout".to_string(),
                target: NavTarget::Logout,
            },
        ]
    } else {
        vec![NavItem::to("Login", Route::SignIn), NavItem::to("Register", Route::SignUp)]
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub is_authenticated: bool,
    #[prop_or_default]
    pub username: Option<AttrValue>,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

fn render_item(item: NavItem, on_navigate: &Callback<Route>, on_logout: &Callback<()>) -> Html {
    let onclick = match item.target {
        NavTarget::Route(route) => on_navigate.reform(move |_: MouseEvent| route),
        NavTarget::Logout => on_logout.reform(|_: MouseEvent| ()),
    };
    let key = item.key();
    html! {
        <a class="navbar-item" key={key} {onclick}>
            {item.label}
        </a>
    }
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let on_brand = props.on_navigate.reform(|_: MouseEvent| Route::Home);
    let end = nav_end_items(props.is_authenticated, props.username.as_deref());

    html! {
        <nav role="navigation" class="navbar">
            <div class="navbar-brand">
                <a class="navbar-item brand" onclick={on_brand}>
                    <strong>{"♠ Poker"}</strong>
                </a>
            </div>
            <div class="navbar-menu">
                <div class="navbar-start">
                    { for nav_start_items().into_iter().map(|item| render_item(item, &props.on_navigate, &props.on_logout)) }
                </div>
                <div class="navbar-end">
                    { for end.into_iter().map(|item| render_item(item, &props.on_navigate, &props.on_logout)) }
                </div>
            </div>
        </nav>
    }
}
