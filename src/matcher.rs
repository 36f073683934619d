//! Exact multi-pattern driver
//!
//! A fixed pattern set, one automaton, one pass per text. Reports every
//! occurrence of every pattern, or only the longest per position under the
//! first-match policy.

extern crate alloc;
use alloc::collections::BTreeSet;

use crate::automaton::{Automaton, MatchKind};
use crate::error::BuildError;
use crate::scan::{Hits, Scan};
use crate::trie::Trie;

/// Identity of one inserted pattern: its index in build order and its
/// length in bytes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PatternEntry {
    id: usize,
    len: usize,
}

/// A single pattern occurrence in the scanned text.
///
/// Positions are 0-based byte offsets; `end` is exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    pattern: usize,
    start: usize,
    end: usize,
}

impl Match {
    /// Index of the matched pattern, in the order the patterns were given
    /// to [`AliceMatcher::build`].
    #[inline(always)]
    pub const fn pattern(&self) -> usize {
        self.pattern
    }

    /// Starting byte position of the match.
    #[inline(always)]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Ending byte position of the match (exclusive).
    #[inline(always)]
    pub const fn end(&self) -> usize {
        self.end
    }
}

/// Multi-pattern exact matcher.
///
/// Builds one automaton over a fixed pattern set; a scan reports every
/// occurrence of every pattern in a single left-to-right pass.
///
/// # Example
/// ```
/// use alice_match::AliceMatcher;
///
/// let matcher = AliceMatcher::build(["he", "she", "his", "hers"]).unwrap();
///
/// let matches: Vec<_> = matcher
///     .find_overlapping_iter(b"ahishers")
///     .map(|m| (m.start(), m.pattern()))
///     .collect();
/// assert_eq!(matches, vec![(1, 2), (3, 1), (4, 0), (4, 3)]);
/// ```
#[derive(Debug)]
pub struct AliceMatcher {
    automaton: Automaton<PatternEntry>,
    pattern_count: usize,
}

impl AliceMatcher {
    /// Build a matcher over `patterns`.
    ///
    /// Reported pattern indices follow the iteration order. Duplicate
    /// patterns are allowed and reported under each of their indices.
    ///
    /// # Errors
    /// [`BuildError::EmptyPattern`] if any pattern is empty.
    pub fn build<I, S>(patterns: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut trie = Trie::new();
        let mut pattern_count = 0;

        for (id, pattern) in patterns.into_iter().enumerate() {
            let bytes = pattern.as_ref();
            if bytes.is_empty() {
                return Err(BuildError::EmptyPattern { index: id });
            }
            trie.insert(
                bytes,
                PatternEntry {
                    id,
                    len: bytes.len(),
                },
            );
            pattern_count += 1;
        }

        Ok(AliceMatcher {
            automaton: Automaton::build(trie),
            pattern_count,
        })
    }

    /// Iterate every occurrence of every pattern in `text`.
    ///
    /// Matches arrive in end-position order; matches ending at the same
    /// position arrive longest first.
    #[inline]
    pub fn find_overlapping_iter<'a, 't>(&'a self, text: &'t [u8]) -> FindIter<'a, 't> {
        FindIter {
            scan: self.automaton.scan(text, MatchKind::Standard),
            pos: 0,
            hits: None,
        }
    }

    /// Iterate matches under the first-match policy: at each position where
    /// anything ends, only the longest match is reported and the scan
    /// restarts from the root. Reported spans never overlap.
    #[inline]
    pub fn find_iter<'a, 't>(&'a self, text: &'t [u8]) -> FindIter<'a, 't> {
        FindIter {
            scan: self.automaton.scan(text, MatchKind::FirstMatch),
            pos: 0,
            hits: None,
        }
    }

    /// Collect every occurrence as 1-based `(start, pattern index)` pairs,
    /// ordered and deduplicated.
    ///
    /// The classic report shape: text positions count from 1 and pattern
    /// indices count from 1 in build order.
    pub fn occurrence_set(&self, text: &[u8]) -> BTreeSet<(usize, usize)> {
        self.find_overlapping_iter(text)
            .map(|m| (m.start() + 1, m.pattern() + 1))
            .collect()
    }

    /// Whether any pattern occurs anywhere in `text`. Stops at the first
    /// hit.
    #[inline]
    pub fn is_match(&self, text: &[u8]) -> bool {
        self.find_overlapping_iter(text).next().is_some()
    }

    /// Number of patterns the matcher was built over.
    #[inline]
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Number of automaton states backing the matcher.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.automaton.state_count()
    }
}

/// Lazy iterator over [`Match`]es, returned by
/// [`AliceMatcher::find_overlapping_iter`] and [`AliceMatcher::find_iter`].
pub struct FindIter<'a, 't> {
    scan: Scan<'a, 't, PatternEntry>,
    pos: usize,
    hits: Option<Hits<'a, PatternEntry>>,
}

impl<'a, 't> Iterator for FindIter<'a, 't> {
    type Item = Match;

    #[inline]
    fn next(&mut self) -> Option<Match> {
        loop {
            if let Some(hits) = &mut self.hits {
                if let Some(entry) = hits.next() {
                    let end = self.pos + 1;
                    return Some(Match {
                        pattern: entry.id,
                        start: end - entry.len,
                        end,
                    });
                }
            }
            let step = self.scan.next()?;
            self.pos = step.pos;
            self.hits = Some(step.hits);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every (start, pattern) occurrence by direct slice comparison.
    fn brute_force(patterns: &[&[u8]], text: &[u8]) -> Vec<(usize, usize)> {
        let mut expected = Vec::new();
        for start in 0..text.len() {
            for (id, pattern) in patterns.iter().enumerate() {
                if text[start..].starts_with(pattern) {
                    expected.push((start, id));
                }
            }
        }
        expected
    }

    #[test]
    fn test_matches_brute_force() {
        let patterns: &[&[u8]] = &[b"he", b"she", b"his", b"hers"];
        let matcher = AliceMatcher::build(patterns).unwrap();

        let mut found: Vec<(usize, usize)> = matcher
            .find_overlapping_iter(b"ahishers")
            .map(|m| (m.start(), m.pattern()))
            .collect();
        found.sort();

        assert_eq!(found, brute_force(patterns, b"ahishers"));
    }

    #[test]
    fn test_exhaustive_small_alphabet() {
        let patterns: &[&[u8]] = &[b"a", b"ab", b"bab", b"bb"];
        let matcher = AliceMatcher::build(patterns).unwrap();

        // Every {a, b} text up to length 6.
        for len in 0..=6u32 {
            for bits in 0u32..(1 << len) {
                let text: Vec<u8> = (0..len)
                    .map(|i| if bits >> i & 1 == 0 { b'a' } else { b'b' })
                    .collect();

                let mut found: Vec<(usize, usize)> = matcher
                    .find_overlapping_iter(&text)
                    .map(|m| (m.start(), m.pattern()))
                    .collect();
                found.sort();

                assert_eq!(found, brute_force(patterns, &text), "text {:?}", text);
            }
        }
    }

    #[test]
    fn test_occurrence_set_one_based() {
        let matcher = AliceMatcher::build(["a"]).unwrap();
        let set = matcher.occurrence_set(b"aaa");

        let expected: BTreeSet<(usize, usize)> =
            [(1, 1), (2, 1), (3, 1)].into_iter().collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let err = AliceMatcher::build(["he", "", "his"]).unwrap_err();
        assert_eq!(err, BuildError::EmptyPattern { index: 1 });
    }

    #[test]
    fn test_empty_pattern_set_matches_nothing() {
        let patterns: [&[u8]; 0] = [];
        let matcher = AliceMatcher::build(patterns).unwrap();

        assert_eq!(matcher.pattern_count(), 0);
        assert_eq!(matcher.state_count(), 1);
        assert!(!matcher.is_match(b"anything"));
        assert!(matcher.occurrence_set(b"anything").is_empty());
    }

    #[test]
    fn test_duplicate_patterns_both_report() {
        let matcher = AliceMatcher::build(["ab", "ab"]).unwrap();

        let found: Vec<(usize, usize)> = matcher
            .find_overlapping_iter(b"abab")
            .map(|m| (m.start(), m.pattern()))
            .collect();
        assert_eq!(found, vec![(0, 0), (0, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_find_iter_never_overlaps() {
        let matcher = AliceMatcher::build(["aa"]).unwrap();

        let spans: Vec<(usize, usize)> = matcher
            .find_iter(b"aaaa")
            .map(|m| (m.start(), m.end()))
            .collect();
        assert_eq!(spans, vec![(0, 2), (2, 4)]);

        // The standard mode sees the middle occurrence as well.
        assert_eq!(matcher.find_overlapping_iter(b"aaaa").count(), 3);
    }

    #[test]
    fn test_first_match_takes_longest() {
        let matcher = AliceMatcher::build(["she", "he"]).unwrap();

        let all: Vec<usize> = matcher
            .find_overlapping_iter(b"she")
            .map(|m| m.pattern())
            .collect();
        assert_eq!(all, vec![0, 1]);

        let first: Vec<usize> = matcher.find_iter(b"she").map(|m| m.pattern()).collect();
        assert_eq!(first, vec![0]);
    }

    #[test]
    fn test_is_match_early_return() {
        let matcher = AliceMatcher::build(["needle"]).unwrap();
        assert!(matcher.is_match(b"a needle in a haystack"));
        assert!(!matcher.is_match(b"nothing here"));
        assert!(!matcher.is_match(b""));
    }

    #[test]
    fn test_match_accessors() {
        let matcher = AliceMatcher::build(["bc"]).unwrap();
        let m = matcher.find_overlapping_iter(b"abcd").next().unwrap();

        assert_eq!(m.pattern(), 0);
        assert_eq!(m.start(), 1);
        assert_eq!(m.end(), 3);
    }
}
