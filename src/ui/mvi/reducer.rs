use super::intent::Intent;
use super::state::UiState;

/// The single place where a dialog changes state.
///
/// `reduce` must not touch the terminal, logs aside.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
