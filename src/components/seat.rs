use yew::prelude::*;

use crate::models::SeatViewModel;

pub fn container_class(view: &SeatViewModel) -> String {
    let mut class = format!("seat-{}-container", view.position);
    if view.is_turn_to_act {
        class.push_str(" active-player");
    }
    class
}

pub fn seat_class(view: &SeatViewModel) -> String {
    let mut class = format!("seat-{}", view.position);
    if view.is_empty() {
        class.push_str(" empty-seat");
    }
    class
}

pub fn seat_label(view: &SeatViewModel) -> &str {
    view.player_name.as_deref().unwrap_or("Take Seat")
}

#[derive(Properties, PartialEq)]
pub struct SeatProps {
    pub view: SeatViewModel,
    /// Raised with the seat position when an empty seat is clicked.
    #[prop_or_default]
    pub on_take_seat: Option<Callback<usize>>,
}

#[function_component(Seat)]
pub fn seat(props: &SeatProps) -> Html {
    let view = &props.view;

    let onclick = {
        let on_take_seat = props.on_take_seat.clone();
        let position = view.position;
        let empty = view.is_empty();
        Callback::from(move |_: MouseEvent| {
            if let (true, Some(cb)) = (empty, &on_take_seat) {
                cb.emit(position);
            }
        })
    };

    html! {
        <div class={container_class(view)}>
            if view.has_pocket_cards {
                <div class="hidden-pocket-cards">
                    <div class="hidden-pocket-cards-container">
                        <div class="card pocket-one"></div>
                        <div class="card pocket-two"></div>
                    </div>
                </div>
            }
            <div class={seat_class(view)} {onclick}>
                <h5 class={classes!((!view.is_empty()).then_some("player-name"))}>{seat_label(view)}</h5>
                if !view.is_empty() {
                    <h5 class="player-chip-count">
                        <span class="monospaced-font">{view.chips}</span>
                    </h5>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(position: usize, turn: bool) -> SeatViewModel {
        SeatViewModel {
            position,
            player_name: Some("ann".into()),
            chips: 1200,
            is_turn_to_act: turn,
            has_pocket_cards: true,
        }
    }

    fn empty(position: usize) -> SeatViewModel {
        SeatViewModel {
            position,
            player_name: None,
            chips: 0,
            is_turn_to_act: false,
            has_pocket_cards: false,
        }
    }

    #[test]
    fn active_player_is_highlighted() {
        assert_eq!(container_class(&occupied(3, true)), "seat-3-container active-player");
        assert_eq!(container_class(&occupied(3, false)), "seat-3-container");
    }

    #[test]
    fn empty_seat_invites_taking_it() {
        assert_eq!(seat_label(&empty(1)), "Take Seat");
        assert_eq!(seat_class(&empty(1)), "seat-1 empty-seat");
        assert_eq!(seat_label(&occupied(1, false)), "ann");
        assert_eq!(seat_class(&occupied(1, false)), "seat-1");
    }
}
