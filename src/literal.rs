//! Template-literal state tracking.
//!
//! Decides whether a line flips the "inside an open template literal"
//! state, so the repair pass can leave the interior of well-formed
//! multi-line values untouched. Escaped delimiters (odd run of preceding
//! backslashes) do not count.

/// Count backticks on a line that are not escaped by a backslash run.
pub fn unescaped_backticks(line: &str) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let mut count = 0;
    for (i, &ch) in chars.iter().enumerate() {
        if ch != '`' {
            continue;
        }
        // Count consecutive preceding backslashes. Odd = escaped.
        let mut backslashes = 0;
        let mut j = i;
        while j > 0 && chars[j - 1] == '\\' {
            backslashes += 1;
            j -= 1;
        }
        if backslashes % 2 == 0 {
            count += 1;
        }
    }
    count
}

/// True if the line flips the open/closed template-literal state.
pub fn toggles_state(line: &str) -> bool {
    unescaped_backticks(line) % 2 == 1
}
