use crossterm::event::{self, Event};
use std::time::Duration;

use crate::config::DialogConfig;
use crate::dialog::{ModalView, SelectionDialog};
use crate::error::DialogError;
use crate::ui::input::intent_for_key;
use crate::ui::picker::{render_picker, PickerIntent};
use crate::ui::terminal_guard::{setup_terminal, TerminalGuard};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Hosts the picker full-screen on the controlling terminal.
pub struct TerminalView {
    config: DialogConfig,
    guard: Option<TerminalGuard>,
}

impl TerminalView {
    pub fn new(config: DialogConfig) -> Self {
        Self {
            config,
            guard: None,
        }
    }
}

impl ModalView for TerminalView {
    fn show(&mut self, dialog: &mut SelectionDialog) -> Result<(), DialogError> {
        let (mut terminal, guard) = setup_terminal()?;
        self.guard = Some(guard);
        let config = &self.config;

        while dialog.is_open() {
            terminal.draw(|frame| render_picker(frame, dialog.state(), config))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if let Some(intent) = intent_for_key(key) {
                        dialog.dispatch(intent);
                    }
                }
                Event::Paste(text) => dialog.dispatch(PickerIntent::Paste(text)),
                // Resize is picked up by the next draw.
                _ => {}
            }
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), DialogError> {
        if let Some(guard) = self.guard.take() {
            guard.restore();
        }
        Ok(())
    }
}
