//! Actions derived from button presses

use heapless::Vec;
use tvmode_input::{Button, ButtonSet};

use crate::types::Direction;

/// Maximum actions produced by one tick's buttons
pub const MAX_ACTIONS_PER_TICK: usize = 5;

/// Operations the state machine performs in response to input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Change the value under the cursor
    Edit(Direction),
    /// Move the cursor to another field
    MoveCursor(Direction),
    /// Commit pending values to the device
    RequestApply,
}

/// Button bindings, in the order they are handled within a tick
const BINDINGS: [(Button, Action); MAX_ACTIONS_PER_TICK] = [
    (Button::Right, Action::Edit(Direction::Forward)),
    (Button::Left, Action::Edit(Direction::Backward)),
    (Button::Down, Action::MoveCursor(Direction::Forward)),
    (Button::Up, Action::MoveCursor(Direction::Backward)),
    (Button::Confirm, Action::RequestApply),
];

impl Action {
    /// Actions for one tick's newly pressed buttons
    ///
    /// Edits are handled before cursor moves, so pressing right and down
    /// together edits the field the cursor started on.
    pub fn from_buttons(buttons: ButtonSet) -> Vec<Action, MAX_ACTIONS_PER_TICK> {
        BINDINGS
            .iter()
            .filter(|(button, _)| buttons.contains(*button))
            .map(|(_, action)| *action)
            .collect()
    }
}
