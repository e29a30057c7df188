pub mod input;
pub mod layout;
pub mod mvi;
pub mod picker;
pub mod terminal_guard;
pub mod terminal_view;
pub mod theme;

pub use terminal_view::TerminalView;
