//! Shared test utilities.

#![allow(dead_code)]

use projpick::ui::picker::PickerIntent;
use projpick::{Candidate, DialogError, ModalView, SelectionDialog};
use std::collections::VecDeque;

/// A view that replays a fixed list of user actions instead of reading a terminal.
pub struct ScriptedView {
    script: VecDeque<PickerIntent>,
    pub shown: bool,
    pub close_calls: usize,
    /// Intents left over once the dialog closed.
    pub unused: usize,
    fail_show: bool,
}

impl ScriptedView {
    pub fn new(script: impl IntoIterator<Item = PickerIntent>) -> Self {
        Self {
            script: script.into_iter().collect(),
            shown: false,
            close_calls: 0,
            unused: 0,
            fail_show: false,
        }
    }

    /// A view whose `show` fails after replaying its script.
    pub fn failing(script: impl IntoIterator<Item = PickerIntent>) -> Self {
        Self {
            fail_show: true,
            ..Self::new(script)
        }
    }
}

impl ModalView for ScriptedView {
    fn show(&mut self, dialog: &mut SelectionDialog) -> Result<(), DialogError> {
        self.shown = true;
        while dialog.is_open() {
            match self.script.pop_front() {
                Some(intent) => dialog.dispatch(intent),
                None => break,
            }
        }
        self.unused = self.script.len();
        if self.fail_show {
            return Err(DialogError::Terminal(std::io::Error::other("tty went away")));
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), DialogError> {
        self.close_calls += 1;
        Ok(())
    }
}

pub fn projects() -> Vec<Candidate> {
    vec![
        Candidate::new(101, "Momentum"),
        Candidate::new(102, "MeanReversion"),
        Candidate::new(103, "PairsTrading"),
    ]
}

pub fn typed(text: &str) -> Vec<PickerIntent> {
    text.chars().map(PickerIntent::InsertChar).collect()
}
