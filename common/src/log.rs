//! Status logging macros.
//!
//! Thin wrappers around [`tracing`] so every crate reports progress with the
//! same targets. The terminal formatter in the CLI renders each target with
//! its own prefix.

/// Target used by [`success!`](crate::success) so formatters can tell a
/// completed step from plain information.
pub const SUCCESS_TARGET: &str = "kiva::success";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!($($arg)*)
    };
}
