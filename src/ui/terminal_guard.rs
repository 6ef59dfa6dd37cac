//! Raw-mode and alternate-screen guard for the registration TUI.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

/// Restores the terminal when dropped, whether the wizard exits normally,
/// returns early through `?`, or unwinds from a panic.
pub struct TerminalGuard {
    active: AtomicBool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err).context("Failed to enter alternate screen");
        }
        Ok(Self {
            active: AtomicBool::new(true),
        })
    }

    /// Best-effort restore; every step ignores its own failure.
    pub fn cleanup() {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        let _ = io::stdout().flush();
    }

    fn release(&self) -> bool {
        self.active.swap(false, Ordering::SeqCst)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.release() {
            Self::cleanup();
        }
    }
}

/// Restore the terminal before the default hook prints the panic message.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        TerminalGuard::cleanup();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard(active: bool) -> TerminalGuard {
        TerminalGuard {
            active: AtomicBool::new(active),
        }
    }

    #[test]
    fn test_release_only_succeeds_once() {
        let guard = guard(true);
        assert!(guard.release());
        assert!(!guard.release());
        drop(guard);
    }

    #[test]
    fn test_inactive_guard_skips_cleanup() {
        let guard = guard(false);
        assert!(!guard.release());
        drop(guard);
    }

    #[test]
    fn test_cleanup_tolerates_missing_terminal() {
        TerminalGuard::cleanup();
        TerminalGuard::cleanup();
    }
}
