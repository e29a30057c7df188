//! Project picker dialog.
//!
//! - `state.rs` - open/confirmed/cancelled states
//! - `intent.rs` - user actions
//! - `reducer.rs` - transitions, including confirm validation
//! - `dialog.rs` - rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_picker;
pub use intent::PickerIntent;
pub use reducer::PickerReducer;
pub use state::PickerState;
