//! Description-field repair.
//!
//! Descriptions are single-quoted prose and never legitimately contain a
//! backtick, so every backtick inside the quoted value is stray corruption
//! and is removed. Text outside the quotes is never touched.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Matches a quoted description value containing at least one backtick.
static RE_DESC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(description:\s*)'([^']*`[^']*)'").unwrap());

/// Remove all backticks inside a quoted description value.
pub fn strip_backticks(line: &str) -> String {
    RE_DESC
        .replace(line, |caps: &Captures| {
            format!("{}'{}'", &caps[1], caps[2].replace('`', ""))
        })
        .into_owned()
}
