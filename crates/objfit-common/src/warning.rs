//! Diagnostic warnings with colored terminal output.
//!
//! objfit never rejects malformed author input: unknown fit modes, invalid
//! CSS values and unsupported units all degrade to a fallback. Each of those
//! fallbacks is reported here, once per unique message, so a page that is
//! re-fitted on every resize does not flood stderr.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// A poisoned lock only means another thread panicked mid-insert; the set
/// itself is still usable.
fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about degraded input (prints once per unique message)
///
/// # Example
/// ```
/// use objfit_common::warning::{warn_once, was_warned};
///
/// warn_once("Fit", "unknown object-fit 'stretch', using cover");
/// assert!(was_warned("Fit", "unknown object-fit 'stretch', using cover"));
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{YELLOW}[objfit {component}] ⚠ {message}{RESET}");
    }
}

/// Whether `warn_once` has already reported this exact message.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call when starting on a new document)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
