//! Content-field template-literal repair.
//!
//! Two damage shapes, both confined to a single line:
//!
//! - [`wrap_bare_value`] — the sed pass stripped the template literal
//!   entirely, leaving `content: Hello world`. The whole value is
//!   re-wrapped in backticks.
//! - [`escape_inline_backticks`] — the value kept its delimiters but
//!   contains unescaped interior backticks. The first backtick after
//!   `content:` is the opener, a trailing `` ` `` (or `` `, ``) is the
//!   closer, and everything between is escaped.
//!
//! Values spanning multiple lines are assumed well-formed and are handled
//! upstream by the literal-state gate, not here.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a content field at the start of a line, capturing its value.
static RE_BARE_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*content:\s*)(.+)$").unwrap());

/// Locates the opening delimiter of a content template literal.
static RE_OPENER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"content:\s*`").unwrap());

/// Re-wrap a bare content value in template-literal delimiters.
///
/// Whitespace before `content:` and after the colon is preserved verbatim.
/// Values already starting with a quote or delimiter are left alone, as is
/// anything where `content:` is not the first token on the line.
pub fn wrap_bare_value(line: &str) -> String {
    if let Some(caps) = RE_BARE_VALUE.captures(line) {
        let text = caps[2].trim();
        if !text.is_empty()
            && !text.starts_with('`')
            && !text.starts_with('\'')
            && !text.starts_with('"')
            && !text.ends_with('`')
        {
            return format!("{}`{text}`", &caps[1]);
        }
    }
    line.to_string()
}

/// Escape unescaped backticks between the opener and closer of a
/// single-line content template literal.
///
/// Fires only when the line holds more backticks than a plain delimited
/// value would (more than two) and visibly closes on this line, ending in
/// `` ` `` or `` `, ``. Already-escaped occurrences are left as they are.
pub fn escape_inline_backticks(line: &str) -> String {
    let Some(opener) = RE_OPENER.find(line) else {
        return line.to_string();
    };
    if line.matches('`').count() <= 2 {
        return line.to_string();
    }
    let (prefix, rest) = line.split_at(opener.end());
    let (inner, suffix) = if let Some(inner) = rest.strip_suffix("`,") {
        (inner, "`,")
    } else if let Some(inner) = rest.strip_suffix('`') {
        (inner, "`")
    } else {
        // No closer on this line; leave it for the literal-state gate.
        return line.to_string();
    };
    format!("{prefix}{}{suffix}", escape_interior(inner))
}

/// Prefix each unescaped backtick with a backslash.
///
/// A backtick preceded by an odd run of backslashes is already escaped
/// and must not gain a second prefix.
fn escape_interior(inner: &str) -> String {
    let chars: Vec<char> = inner.chars().collect();
    let mut out = String::with_capacity(inner.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '`' {
            let mut backslashes = 0;
            let mut j = i;
            while j > 0 && chars[j - 1] == '\\' {
                backslashes += 1;
                j -= 1;
            }
            if backslashes % 2 == 0 {
                out.push('\\');
            }
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_bare_value() {
        assert_eq!(
            wrap_bare_value("  content: Hello world"),
            "  content: `Hello world`"
        );
    }

    #[test]
    fn wrap_preserves_indentation() {
        assert_eq!(
            wrap_bare_value("      content: Deeply nested text,"),
            "      content: `Deeply nested text,`"
        );
    }

    #[test]
    fn wrap_keeps_delimited_value() {
        let line = "  content: `already fine`,";
        assert_eq!(wrap_bare_value(line), line);
    }

    #[test]
    fn wrap_keeps_quoted_value() {
        let line = "  content: 'single quoted',";
        assert_eq!(wrap_bare_value(line), line);
        let line = "  content: \"double quoted\",";
        assert_eq!(wrap_bare_value(line), line);
    }

    #[test]
    fn wrap_ignores_midline_content_token() {
        let line = "const content: string = x;";
        assert_eq!(wrap_bare_value(line), line);
    }

    #[test]
    fn escapes_interior_backticks() {
        assert_eq!(
            escape_inline_backticks(r"  content: `Use `code` here`,"),
            r"  content: `Use \`code\` here`,"
        );
    }

    #[test]
    fn escape_preserves_bare_closer() {
        assert_eq!(
            escape_inline_backticks(r"  content: `Use `code` here`"),
            r"  content: `Use \`code\` here`"
        );
    }

    #[test]
    fn escape_skips_already_escaped() {
        let line = r"  content: `Use \`code\` here`,";
        assert_eq!(escape_inline_backticks(line), line);
    }

    #[test]
    fn escape_handles_mixed_escaping() {
        assert_eq!(
            escape_inline_backticks(r"  content: `Use \`a\` and `b` here`,"),
            r"  content: `Use \`a\` and \`b\` here`,"
        );
    }

    #[test]
    fn escape_keeps_plain_value() {
        let line = "  content: `nothing inside`,";
        assert_eq!(escape_inline_backticks(line), line);
    }

    #[test]
    fn escape_keeps_open_multiline_value() {
        // Opener with no closer on the same line — multi-line value
        let line = "  content: `Once upon a time";
        assert_eq!(escape_inline_backticks(line), line);
    }

    #[test]
    fn escape_keeps_code_fence_value() {
        assert_eq!(
            escape_inline_backticks(r"  content: `a ```js fence``` b`,"),
            r"  content: `a \`\`\`js fence\`\`\` b`,"
        );
    }
}
