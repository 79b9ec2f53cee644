//! Panic hook for terminal restoration.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal, then defers to the
/// previously installed hook (color-eyre's, when installed first).
///
/// # Example
///
/// ```no_run
/// use chatdeck::terminal::setup_panic_hook;
///
/// color_eyre::install().ok();
/// setup_panic_hook();
/// ```
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
