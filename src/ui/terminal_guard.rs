use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stderr};
use std::sync::{Arc, Mutex};

pub type PickerTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Puts the terminal back the way it was, on drop or on panic.
pub struct TerminalGuard {
    restore: Arc<Mutex<Option<Box<dyn FnOnce() + Send + 'static>>>>,
}

impl TerminalGuard {
    fn new<F: FnOnce() + Send + 'static>(restore: F) -> Self {
        let guard = Self {
            restore: Arc::new(Mutex::new(Some(Box::new(restore)))),
        };
        guard.install_panic_hook();
        guard
    }

    fn install_panic_hook(&self) {
        let restore = Arc::clone(&self.restore);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if let Some(restore) = restore.lock().ok().and_then(|mut slot| slot.take()) {
                restore();
            }
            default_hook(info);
        }));
    }

    /// Restores the terminal now. Later calls are no-ops.
    pub fn restore(&self) {
        if let Some(restore) = self.restore.lock().ok().and_then(|mut slot| slot.take()) {
            restore();
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Enters raw mode and the alternate screen on stderr. Stdout is left alone
/// so the caller can capture the picked project.
pub fn setup_terminal() -> io::Result<(PickerTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    stderr.execute(EnterAlternateScreen)?;
    stderr.execute(EnableBracketedPaste)?;

    let guard = TerminalGuard::new(|| {
        let _ = disable_raw_mode();
        let mut stderr = io::stderr();
        let _ = stderr.execute(DisableBracketedPaste);
        let _ = stderr.execute(LeaveAlternateScreen);
    });

    let terminal = Terminal::new(CrosstermBackend::new(stderr))?;
    Ok((terminal, guard))
}
