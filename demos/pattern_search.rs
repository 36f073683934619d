//! Multi-Pattern Matching Example
//!
//! Demonstrates exact multi-pattern search and single-wildcard search,
//! each in one pass over the text.
//!
//! ```bash
//! cargo run --example pattern_search
//! ```

use alice_match::{AliceMatcher, JokerPattern};

fn main() {
    println!("=== ALICE-Match Demo ===\n");

    let text = b"the quick brown fox jumps over the lazy dog. \
                 the fox was quick and the dog was lazy. \
                 a quick brown dog outfoxed a lazy fox.";

    println!("Text ({} bytes):", text.len());
    println!("  \"{}\"", std::str::from_utf8(text).unwrap());

    // Exact multi-pattern search
    let patterns = ["fox", "dog", "quick", "lazy"];
    let matcher = AliceMatcher::build(patterns).unwrap();

    println!(
        "\n--- Multi-Pattern Search ({} patterns, {} states) ---\n",
        matcher.pattern_count(),
        matcher.state_count()
    );

    for m in matcher.find_overlapping_iter(text) {
        println!(
            "  \"{}\" at {}..{}",
            patterns[m.pattern()],
            m.start(),
            m.end()
        );
    }

    println!("\n  occurrence set (1-based): {:?}", matcher.occurrence_set(text));

    // Single-wildcard search
    println!("\n--- Wildcard Search ---\n");

    let pattern = JokerPattern::build(b"qu?ck", b'?').unwrap();
    println!(
        "  mask \"qu?ck\" ({} runs) -> starts {:?}",
        pattern.run_count(),
        pattern.find_starts(text)
    );

    let overlapping = JokerPattern::build(b"?a", b'?').unwrap();
    println!(
        "  mask \"?a\" all starts      -> {:?}",
        overlapping.find_starts(text)
    );
    println!(
        "  mask \"?a\" non-overlapping -> {:?}",
        overlapping.find_starts_disjoint(text)
    );
}
