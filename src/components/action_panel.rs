use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::Chips;

/// Whole, positive chip amount typed into the bet box.
pub fn parse_bet_value(raw: &str) -> Option<Chips> {
    raw.trim().parse::<Chips>().ok().filter(|amount| *amount > 0)
}

#[derive(Properties, PartialEq)]
pub struct ActionPanelProps {
    pub bet_value: AttrValue,
    pub on_change: Callback<String>,
    pub on_post_big_blind: Callback<()>,
    pub on_post_small_blind: Callback<()>,
    pub on_check: Callback<()>,
    pub on_call: Callback<()>,
    pub on_bet: Callback<Chips>,
    pub on_raise: Callback<Chips>,
    pub on_fold: Callback<()>,
    pub on_sit_down: Callback<Chips>,
    pub on_leave: Callback<()>,
}

fn plain_button(label: &'static str, cb: &Callback<()>) -> Html {
    html! {
        <button type="button" class="button" onclick={cb.reform(|_: MouseEvent| ())}>
            {label}
        </button>
    }
}

fn amount_button(label: &str, raw: &str, amount: Option<Chips>, cb: &Callback<Chips>) -> Html {
    let cb = cb.clone();
    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(amount) = amount {
            cb.emit(amount);
        }
    });
    html! {
        <button type="button" class="button" disabled={amount.is_none()} {onclick}>
            {format!("{} {}", label, raw)}
        </button>
    }
}

#[function_component(ActionPanel)]
pub fn action_panel(props: &ActionPanelProps) -> Html {
    let raw = props.bet_value.as_str();
    let amount = parse_bet_value(raw);
    let oninput = props
        .on_change
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());

    html! {
        <div class="actionPanel">
            {plain_button("Post big blind", &props.on_post_big_blind)}
            {plain_button("Post small blind", &props.on_post_small_blind)}
            {plain_button("Check", &props.on_check)}
            {plain_button("Call", &props.on_call)}
            {amount_button("Bet", raw, amount, &props.on_bet)}
            {amount_button("Raise", raw, amount, &props.on_raise)}
            {plain_button("Fold", &props.on_fold)}
            <input
                type="text"
                class="input bet-value"
                inputmode="numeric"
                placeholder="Amount"
                value={props.bet_value.clone()}
                {oninput}
            />
            {amount_button("Sit down", raw, amount, &props.on_sit_down)}
            {plain_button("Leave game", &props.on_leave)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_value_must_be_whole_positive_chips() {
        assert_eq!(parse_bet_value("250"), Some(250));
        assert_eq!(parse_bet_value(" 40 "), Some(40));
        assert_eq!(parse_bet_value("0"), None);
        assert_eq!(parse_bet_value("-5"), None);
        assert_eq!(parse_bet_value("12.5"), None);
        assert_eq!(parse_bet_value(""), None);
        assert_eq!(parse_bet_value("all in"), None);
    }
}
