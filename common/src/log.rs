//! Logging helpers shared by the library crates and the CLI.
//!
//! Everything forwards to [`tracing`] so the subscriber installed by the binary
//! decides how (and whether) anything is rendered.

/// Logs a positive outcome. Rendered with a distinct glyph by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::tracing::info!(success = true, $($arg)+)
    };
}
