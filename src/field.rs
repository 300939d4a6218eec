//! Per-line field classification.
//!
//! Each line carries at most one field of interest. Classifying once up
//! front lets the repair pass dispatch to exactly one fixer instead of
//! probing every pattern against every line.

/// Field kinds the repairer knows how to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `role:` — enumerated value, either `'input'` or `'output'`.
    Role,
    /// `description:` — single-quoted prose, never contains backticks.
    Description,
    /// `content:` — template-literal value.
    Content,
}

/// Classify which recognized field a line carries, if any.
pub fn classify(line: &str) -> Option<FieldKind> {
    if line.contains("role:") {
        Some(FieldKind::Role)
    } else if line.contains("description:") {
        Some(FieldKind::Description)
    } else if line.contains("content:") {
        Some(FieldKind::Content)
    } else {
        None
    }
}
