//! Lazy match delivery
//!
//! **Zero Allocation**: [`Hits`] reads payloads straight off the failure
//! chain, [`Scan`] holds one cursor and yields one event per input byte.

use crate::automaton::{Automaton, Cursor, MatchKind};
use crate::trie::{NodeId, Trie};

/// Iterator over the payloads of patterns ending at one scan position.
///
/// Yields payload references in failure-chain order, longest pattern
/// first. Borrows the automaton; nothing is copied or allocated.
pub struct Hits<'a, P> {
    trie: &'a Trie<P>,
    node: NodeId,
    offset: usize,
    follow: bool,
}

impl<'a, P> Hits<'a, P> {
    /// All payloads along `node`'s failure chain, the node included.
    #[inline(always)]
    pub(crate) fn chain(trie: &'a Trie<P>, node: NodeId) -> Self {
        Hits {
            trie,
            node,
            offset: 0,
            follow: true,
        }
    }

    /// The payloads of `node` alone.
    #[inline(always)]
    pub(crate) fn single(trie: &'a Trie<P>, node: NodeId) -> Self {
        Hits {
            trie,
            node,
            offset: 0,
            follow: false,
        }
    }

    /// No payloads at all.
    #[inline(always)]
    pub(crate) fn empty(trie: &'a Trie<P>) -> Self {
        Hits {
            trie,
            node: NodeId::ROOT,
            offset: 0,
            follow: false,
        }
    }
}

impl<'a, P> Iterator for Hits<'a, P> {
    type Item = &'a P;

    #[inline]
    fn next(&mut self) -> Option<&'a P> {
        loop {
            let payloads = self.trie.payloads(self.node);
            if self.offset < payloads.len() {
                self.offset += 1;
                return Some(&payloads[self.offset - 1]);
            }
            // The chain ends at the root, which is never terminal.
            if !self.follow || self.node == NodeId::ROOT {
                return None;
            }
            self.node = self.trie.fail(self.node);
            self.offset = 0;
        }
    }
}

/// One scan event: a text position and the patterns ending there.
pub struct Step<'a, P> {
    /// 0-based position of the byte that produced this event.
    pub pos: usize,
    /// Payloads of every pattern ending at `pos`.
    pub hits: Hits<'a, P>,
}

/// Whole-text pass: advances a private cursor across `text`, yielding one
/// [`Step`] per byte, left to right.
///
/// Each `Scan` owns its cursor, so scans over a shared automaton never
/// interfere.
pub struct Scan<'a, 't, P> {
    automaton: &'a Automaton<P>,
    text: &'t [u8],
    pos: usize,
    cursor: Cursor,
    kind: MatchKind,
}

impl<'a, 't, P> Scan<'a, 't, P> {
    #[inline]
    pub(crate) fn new(automaton: &'a Automaton<P>, text: &'t [u8], kind: MatchKind) -> Self {
        Scan {
            automaton,
            text,
            pos: 0,
            cursor: automaton.cursor(),
            kind,
        }
    }
}

impl<'a, 't, P> Iterator for Scan<'a, 't, P> {
    type Item = Step<'a, P>;

    #[inline]
    fn next(&mut self) -> Option<Step<'a, P>> {
        let &symbol = self.text.get(self.pos)?;
        let hits = self.automaton.step(&mut self.cursor, symbol, self.kind);
        let pos = self.pos;
        self.pos += 1;
        Some(Step { pos, hits })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.text.len() - self.pos;
        (len, Some(len))
    }
}

impl<'a, 't, P> ExactSizeIterator for Scan<'a, 't, P> {}
