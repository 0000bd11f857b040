/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

use crate::models::WorkKind;

/// Colour tag for a record's kind in listings:
/// individual → blue, daily area → magenta.
pub fn color_for_kind(kind: &WorkKind) -> &'static str {
    match kind {
        WorkKind::Individual(_) => BLUE,
        WorkKind::Area(_) => MAGENTA,
    }
}
