//! Role-field repair.
//!
//! The bad sed pass wrapped enumerated role values in backticks:
//! `role: '`input`'`. Only the two known enum literals are unwrapped;
//! anything else wrapped in backticks is left alone.

use regex::Regex;
use std::sync::LazyLock;

static RE_ROLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"role: '`(input|output)`'").unwrap());

/// Strip backticks from a wrapped enumerated role value.
pub fn unwrap_role(line: &str) -> String {
    RE_ROLE.replace_all(line, "role: '${1}'").into_owned()
}
