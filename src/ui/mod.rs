//! User-facing output.
//!
//! - `formatter` - Pure line builders
//! - This module - Coloring and printing

use console::style;

use crate::error::GateError;
use crate::messages::Messages;
use crate::version::RuntimeVersion;

pub mod formatter;

pub use formatter::{
    config_failure_lines, detection_failure_lines, failure_lines, unsupported_lines,
};

/// Turns colored output off for both streams.
pub fn disable_colors() {
    console::set_colors_enabled(false);
    console::set_colors_enabled_stderr(false);
}

/// Print the single success line to stdout in green.
pub fn display_success(messages: &Messages, version: &RuntimeVersion) {
    println!("{}", style(messages.success(version.raw())).green());
}

/// Print a failure block to stderr, with the headline in red.
pub fn display_failure(messages: &Messages, error: &GateError) {
    for line in failure_lines(messages, error) {
        if line.starts_with('❌') {
            eprintln!("{}", style(line).red().for_stderr());
        } else {
            eprintln!("{}", line);
        }
    }
}

/// Print the outcome of a gate check to the stream it belongs on.
pub fn report(messages: &Messages, result: &crate::Result<RuntimeVersion>) {
    match result {
        Ok(version) => display_success(messages, version),
        Err(e) => display_failure(messages, e),
    }
}
