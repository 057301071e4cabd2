//! Fuzz target for codepoint reversal.
//!
//! Feeds arbitrary strings through reverse and checks that it never panics
//! and that the core invariants hold.

#![no_main]

use charrev::reverse;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let reversed = reverse(data);

    // Same codepoints, same encoded length, and the round trip restores
    // the input exactly
    assert_eq!(reversed.chars().count(), data.chars().count());
    assert_eq!(reversed.len(), data.len());
    assert_eq!(reverse(&reversed), data);
});
