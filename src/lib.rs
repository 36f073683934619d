//! # ALICE-Match
//!
//! **Multi-pattern matching on the Aho-Corasick automaton**
//!
//! > "One pass over the text. Every pattern, every position."
//!
//! ## Architecture
//!
//! - **Arena Trie**: all nodes in one `Vec`, linked by `u32` indices
//! - **Failure Links**: assigned in one breadth-first pass, chased lazily
//!   at scan time instead of materializing default transitions
//! - **Caller-Owned Cursors**: scans over a shared automaton are
//!   independent and restartable
//! - **Iterator Matching**: zero-allocation result enumeration
//!
//! ## Performance
//!
//! | Operation | Time | Space |
//! |-----------|------|-------|
//! | Build | **O(K)** total pattern bytes | O(K) states |
//! | Scan | **O(N)** amortized | O(1) per cursor |
//! | Wildcard scan | **O(N)** amortized | O(N - M) vote counters |
//!
//! ## Example
//!
//! ```
//! use alice_match::{AliceMatcher, JokerPattern};
//!
//! // Exact multi-pattern search
//! let matcher = AliceMatcher::build(["he", "she", "hers"]).unwrap();
//! let hits: Vec<_> = matcher
//!     .find_overlapping_iter(b"ushers")
//!     .map(|m| (m.start(), m.pattern()))
//!     .collect();
//! assert_eq!(hits, vec![(1, 1), (2, 0), (2, 2)]);
//!
//! // Single-wildcard search: "?" stands for any one byte
//! let pattern = JokerPattern::build(b"a?c", b'?').unwrap();
//! assert_eq!(pattern.find_starts(b"abcaxc"), vec![0, 3]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod automaton;
pub mod error;
pub mod joker;
pub mod matcher;
pub mod scan;
pub mod trie;

pub use automaton::{Automaton, Cursor, MatchKind};
pub use error::BuildError;
pub use joker::JokerPattern;
pub use matcher::{AliceMatcher, Match};
pub use trie::Trie;

/// Version
pub const VERSION: &str = "0.1.2-joker";
