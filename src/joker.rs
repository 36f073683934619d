//! Single-wildcard driver
//!
//! A mask with a joker byte that matches any symbol is reduced to the
//! multi-pattern problem: the wildcard-free runs of the mask are matched
//! simultaneously, and every run occurrence votes for the mask start it
//! implies. A position collecting one vote per run is a full match.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::automaton::{Automaton, MatchKind};
use crate::error::BuildError;
use crate::trie::Trie;

/// One maximal wildcard-free run of the mask: its byte offset within the
/// mask and its length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Run {
    offset: usize,
    len: usize,
}

/// Split `mask` into maximal runs of non-joker bytes.
///
/// The loop runs one step past the end so a run touching the mask's end is
/// closed by the same boundary rule as one followed by a joker.
fn decompose(mask: &[u8], joker: u8) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut len = 0;
    for i in 0..=mask.len() {
        let boundary = i == mask.len() || mask[i] == joker;
        if boundary {
            if len > 0 {
                runs.push(Run { offset: i - len, len });
                len = 0;
            }
        } else {
            len += 1;
        }
    }
    runs
}

/// Single-pattern wildcard matcher.
///
/// The mask may contain any number of joker bytes; every joker matches
/// exactly one arbitrary byte.
///
/// # Example
/// ```
/// use alice_match::JokerPattern;
///
/// let pattern = JokerPattern::build(b"a?c", b'?').unwrap();
/// assert_eq!(pattern.find_starts(b"abcaxc"), vec![0, 3]);
/// assert_eq!(pattern.occurrence_list(b"abcaxc"), vec![1, 4]);
/// ```
#[derive(Debug)]
pub struct JokerPattern {
    automaton: Automaton<Run>,
    mask_len: usize,
    run_count: usize,
}

impl JokerPattern {
    /// Build a matcher for `mask`, treating every occurrence of `joker` as
    /// a wildcard.
    ///
    /// # Errors
    /// [`BuildError::EmptyMask`] if `mask` is empty.
    pub fn build(mask: &[u8], joker: u8) -> Result<Self, BuildError> {
        if mask.is_empty() {
            return Err(BuildError::EmptyMask);
        }

        let runs = decompose(mask, joker);
        debug!(
            "wildcard mask decomposed: {} runs over {} bytes",
            runs.len(),
            mask.len()
        );

        let mut trie = Trie::new();
        for &run in &runs {
            trie.insert(&mask[run.offset..run.offset + run.len], run);
        }

        Ok(JokerPattern {
            automaton: Automaton::build(trie),
            mask_len: mask.len(),
            run_count: runs.len(),
        })
    }

    /// 0-based start positions of every full mask match, ascending.
    pub fn find_starts(&self, text: &[u8]) -> Vec<usize> {
        self.collect_starts(text, false)
    }

    /// 0-based starts under the non-overlap policy: after each reported
    /// match the next `mask_len - 1` candidate starts are skipped.
    pub fn find_starts_disjoint(&self, text: &[u8]) -> Vec<usize> {
        self.collect_starts(text, true)
    }

    /// 1-based start positions of every full mask match, ascending.
    pub fn occurrence_list(&self, text: &[u8]) -> Vec<usize> {
        self.collect_starts(text, false)
            .into_iter()
            .map(|start| start + 1)
            .collect()
    }

    /// 1-based starts under the non-overlap policy.
    pub fn occurrence_list_disjoint(&self, text: &[u8]) -> Vec<usize> {
        self.collect_starts(text, true)
            .into_iter()
            .map(|start| start + 1)
            .collect()
    }

    /// Length of the mask in bytes, jokers included.
    #[inline]
    pub fn mask_len(&self) -> usize {
        self.mask_len
    }

    /// Number of wildcard-free runs in the mask.
    #[inline]
    pub fn run_count(&self) -> usize {
        self.run_count
    }

    fn collect_starts(&self, text: &[u8], disjoint: bool) -> Vec<usize> {
        let n = text.len();
        let m = self.mask_len;
        if m > n {
            return Vec::new();
        }

        // An all-joker mask matches every window outright; the vote test
        // would be vacuously true even past the last window.
        if self.run_count == 0 {
            if disjoint {
                return (0..=n - m).step_by(m).collect();
            }
            return (0..=n - m).collect();
        }

        let width = n - m + 1;
        let mut tally = vec![0u32; width];

        for step in self.automaton.scan(text, MatchKind::Standard) {
            let end = step.pos + 1;
            for run in step.hits {
                // A run ending at `end` puts the mask start at
                // end - offset - len; discard starts outside the window.
                if let Some(candidate) = end.checked_sub(run.offset + run.len) {
                    if candidate < width {
                        tally[candidate] += 1;
                    }
                }
            }
        }

        let votes = self.run_count as u32;
        let mut starts = Vec::new();
        let mut i = 0;
        while i < width {
            if tally[i] == votes {
                starts.push(i);
                if disjoint {
                    i += m;
                    continue;
                }
            }
            i += 1;
        }
        starts
    }
}
