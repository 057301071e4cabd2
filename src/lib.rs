//! Codepoint-order string reversal.
//!
//! Reversing a UTF-8 string byte by byte tears multi-byte sequences apart
//! and yields invalid text. [`reverse`] instead treats the Unicode scalar
//! value as the unit of reversal: the input is decoded into codepoints, the
//! order is flipped, and the result is re-encoded.
//!
//! # Examples
//!
//! ```
//! assert_eq!(charrev::reverse("Hello, world"), "dlrow ,olleH");
//! assert_eq!(charrev::reverse("Hello, 世界"), "界世 ,olleH");
//! ```
//!
//! The reversal unit is strictly the codepoint. Grapheme clusters are not
//! kept together: a combining mark detaches from its base character and ZWJ
//! emoji sequences come apart. Callers who need cluster-preserving reversal
//! should segment the text first.

pub mod reverse;

// Re-export the one public operation at the crate root
pub use reverse::reverse;
