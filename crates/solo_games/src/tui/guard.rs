//! Terminal mode handling that survives errors and panics.

use std::io;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use tracing::{debug, warn};

/// Runs a cleanup action when dropped, including while unwinding.
pub struct RestoreGuard<F: FnMut()> {
    cleanup: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    /// Arms the guard.
    pub fn new(cleanup: F) -> Self {
        Self { cleanup }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        (self.cleanup)();
    }
}

/// Switches to raw mode and the alternate screen.
pub fn enter() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)
}

/// Leaves raw mode and the alternate screen. Safe to call more than once.
pub fn restore() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Restores the terminal before the panic report is printed.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}
