use std::rc::Rc;

use super::memo::Memo;
use crate::models::SeatViewModel;
use crate::stores::{GameStore, RootState};

thread_local! {
    static SEAT_VIEWS: Memo<GameStore, Vec<SeatViewModel>> = const { Memo::new() };
}

/// Seat view-models for the current table; empty before the first push.
pub fn get_seat_views(state: &RootState) -> Rc<Vec<SeatViewModel>> {
    SEAT_VIEWS.with(|memo| {
        memo.get_or_compute(&state.game, |game| {
            game.state.as_ref().map(|g| g.seat_views()).unwrap_or_default()
        })
    })
}

pub fn get_own_seat(state: &RootState) -> Option<usize> {
    state.game.own_seat
}
