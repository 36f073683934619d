//! Failure-link construction and the matching cursor
//!
//! **Construction**: one breadth-first pass assigns every node the state of
//! its longest proper path-suffix. BFS order guarantees a parent's link is
//! final before its children are processed.
//!
//! **Lookup**: no default transitions are materialized. `step` chases
//! failure links on demand, trading a small constant factor per byte for an
//! automaton no larger than the trie itself.

extern crate alloc;
use alloc::collections::VecDeque;

use crate::scan::{Hits, Scan};
use crate::trie::{NodeId, Trie};

/// Match-reporting policy for [`Automaton::step`] and [`Automaton::scan`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchKind {
    /// Report every pattern ending at each position, including patterns
    /// that are suffixes of a longer match at the same position.
    Standard,
    /// Report only the longest match ending at a position, then restart
    /// from the root. Suppresses suffix matches and overlaps.
    FirstMatch,
}

/// Caller-owned scan state: the automaton node reached so far.
///
/// Obtained from [`Automaton::cursor`], advanced by [`Automaton::step`].
/// Cursors are cheap copies; concurrent scans each own one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor(NodeId);

/// Aho-Corasick automaton over payloads of type `P`.
///
/// Built once from a [`Trie`], immutable afterwards; any number of scans
/// may share it.
///
/// # Example
/// ```
/// use alice_match::{Automaton, MatchKind, Trie};
///
/// let mut trie = Trie::new();
/// trie.insert(b"ab", 0usize);
/// trie.insert(b"b", 1usize);
/// let automaton = Automaton::build(trie);
///
/// let mut cursor = automaton.cursor();
/// assert!(automaton.step(&mut cursor, b'a', MatchKind::Standard).next().is_none());
///
/// // "ab" ends here, and so does its suffix "b".
/// let ids: Vec<usize> = automaton
///     .step(&mut cursor, b'b', MatchKind::Standard)
///     .copied()
///     .collect();
/// assert_eq!(ids, vec![0, 1]);
/// ```
#[derive(Debug)]
pub struct Automaton<P> {
    trie: Trie<P>,
}

impl<P> Automaton<P> {
    /// Assign failure links to every node of `trie`, breadth first.
    ///
    /// Consumes the trie: after construction the node graph never changes.
    /// For a node reached from parent `p` on byte `x`, the link target is
    /// found by walking `p`'s failure chain to the first state with an `x`
    /// edge; depth-1 nodes fall back to the root.
    pub fn build(mut trie: Trie<P>) -> Self {
        let mut queue = VecDeque::new();
        queue.extend(trie.children_of(NodeId::ROOT));

        while let Some(node) = queue.pop_front() {
            queue.extend(trie.children_of(node));

            let symbol = trie.symbol(node);
            let mut f = trie.fail(trie.parent(node));
            while f != NodeId::ROOT && trie.child(f, symbol).is_none() {
                f = trie.fail(f);
            }
            let link = match trie.child(f, symbol) {
                // A depth-1 node finds itself under the root; that would be
                // a self-loop, not a proper suffix.
                Some(target) if target != node => target,
                _ => NodeId::ROOT,
            };
            trie.set_fail(node, link);
        }

        debug!("failure links assigned: {} states", trie.node_count());

        Automaton { trie }
    }

    /// A fresh cursor positioned at the root.
    #[inline(always)]
    pub fn cursor(&self) -> Cursor {
        Cursor(NodeId::ROOT)
    }

    /// Advance `cursor` by one input byte and report the patterns ending
    /// there.
    ///
    /// The transition searches from the current state along failure links
    /// for the first state with a child on `symbol`; with no such state the
    /// cursor falls back to the root and nothing is reported.
    #[inline]
    pub fn step<'a>(&'a self, cursor: &mut Cursor, symbol: u8, kind: MatchKind) -> Hits<'a, P> {
        let mut state = cursor.0;
        let next = loop {
            if let Some(child) = self.trie.child(state, symbol) {
                break child;
            }
            if state == NodeId::ROOT {
                break NodeId::ROOT;
            }
            state = self.trie.fail(state);
        };

        match kind {
            MatchKind::Standard => {
                cursor.0 = next;
                Hits::chain(&self.trie, next)
            }
            MatchKind::FirstMatch => {
                // The first terminal on the failure chain is the longest
                // match ending here; report it alone and restart.
                let mut probe = next;
                loop {
                    if self.trie.is_terminal(probe) {
                        cursor.0 = NodeId::ROOT;
                        break Hits::single(&self.trie, probe);
                    }
                    if probe == NodeId::ROOT {
                        cursor.0 = next;
                        break Hits::empty(&self.trie);
                    }
                    probe = self.trie.fail(probe);
                }
            }
        }
    }

    /// Scan `text` left to right with a fresh cursor, one event per byte.
    ///
    /// # Example
    /// ```
    /// use alice_match::{Automaton, MatchKind, Trie};
    ///
    /// let mut trie = Trie::new();
    /// trie.insert(b"ss", ());
    /// let automaton = Automaton::build(trie);
    ///
    /// let mut ends = Vec::new();
    /// for mut step in automaton.scan(b"mississippi", MatchKind::Standard) {
    ///     if step.hits.next().is_some() {
    ///         ends.push(step.pos);
    ///     }
    /// }
    /// assert_eq!(ends, vec![3, 6]);
    /// ```
    #[inline]
    pub fn scan<'a, 't>(&'a self, text: &'t [u8], kind: MatchKind) -> Scan<'a, 't, P> {
        Scan::new(self, text, kind)
    }

    /// Number of automaton states, the root included.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.trie.node_count()
    }

    #[cfg(test)]
    pub(crate) fn trie(&self) -> &Trie<P> {
        &self.trie
    }
}
