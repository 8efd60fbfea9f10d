//! rubylaunch: bootstrap launcher for an embedded Ruby runtime.
//!
//! Locates the installed artifact that supplied the running code, derives the
//! installation root two directory levels above it, publishes the root and
//! its `lib` subdirectory to the runtime, and hands off control with a fixed
//! initialization directive prepended to the caller's arguments.

pub mod error;
pub mod launcher;
pub mod locator;

use std::ffi::OsString;

pub use error::AppError;
pub use launcher::{HOME_ENV, LIB_ENV, Launch, RUBY_ENV};
pub use locator::ORIGIN_ENV;

/// Resolve the installation root and hand control to the embedded runtime.
///
/// Returns only on failure, or (on non-Unix platforms) with the runtime's
/// exit status once it terminates.
pub fn launch(args: &[OsString]) -> Result<i32, AppError> {
    launcher::prepare(args)?.run()
}
