//! Terminal clearing.

use std::io;

use console::Term;
use tracing::debug;

/// Capability to clear the screen before the session starts.
pub trait ScreenClearer {
    fn clear(&self) -> io::Result<()>;
}

/// Clears the real terminal through `console`, which picks the right
/// mechanism for the platform. Does nothing when stdout is not a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermClearer;

impl ScreenClearer for TermClearer {
    fn clear(&self) -> io::Result<()> {
        let term = Term::stdout();
        if term.is_term() {
            term.clear_screen()
        } else {
            debug!("stdout is not a terminal, skipping clear");
            Ok(())
        }
    }
}

/// Leaves the screen untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClear;

impl ScreenClearer for NoClear {
    fn clear(&self) -> io::Result<()> {
        Ok(())
    }
}
