//! Output system for the pull request commands.
//!
//! Summaries render to a fixed text layout; styling is applied only when the
//! output stream is a terminal that accepts colors.

mod format;

pub use format::{
    CREATED_BANNER, OutputWriter, RECENT_DAYS, detail_lines, render_summary,
};

use std::io::IsTerminal;

/// Decides whether output should be styled.
///
/// Styling is off when `--no-color` was given, when `NO_COLOR` is set to a
/// non-empty value, or when stdout is not a terminal.
pub fn should_style(no_color_flag: bool) -> bool {
    should_style_with(
        no_color_flag,
        std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        std::io::stdout().is_terminal(),
    )
}

fn should_style_with(no_color_flag: bool, no_color_env: bool, is_terminal: bool) -> bool {
    !no_color_flag && !no_color_env && is_terminal
}
