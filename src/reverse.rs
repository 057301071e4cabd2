//! The codepoint reversal transform.

/// Reverse `input` codepoint by codepoint.
///
/// The unit of reversal is the Unicode scalar value, never the byte, so
/// multi-byte UTF-8 sequences move as whole units and the result is always
/// valid text. `str::chars` is double-ended, so this is a single O(n) pass
/// that decodes each codepoint exactly once from the tail.
///
/// Combining marks are codepoints like any other and detach from their base
/// character; grapheme clusters are not preserved.
///
/// # Examples
///
/// ```
/// use charrev::reverse;
///
/// assert_eq!(reverse("Hello, 世界"), "界世 ,olleH");
/// assert_eq!(reverse(""), "");
/// ```
#[must_use]
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}
