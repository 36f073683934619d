//! Pattern trie over byte edges (Arena Layout)
//!
//! **One `Vec`, zero pointers**: every node lives in the arena, linked by
//! `u32` indices. Parent and failure links are plain indices into the same
//! arena, so the tree has no ownership cycles and no unsafe.
//!
//! Children are kept sorted per node; lookup is a binary search over the
//! node's actual fanout.

extern crate alloc;
use alloc::vec::Vec;

use smallvec::SmallVec;

/// Index of a node in the arena. Node 0 is always the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeId(u32);

impl NodeId {
    /// The root node.
    pub(crate) const ROOT: NodeId = NodeId(0);

    #[inline(always)]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One automaton state.
#[derive(Debug)]
struct Node<P> {
    /// Byte on the edge from the parent (0 for the root, never read).
    symbol: u8,
    /// Back-reference used during failure-link construction.
    parent: NodeId,
    /// Longest proper suffix of this node's path present in the trie.
    /// Initialized to the root; the root keeps itself as its target.
    fail: NodeId,
    /// Sorted (symbol, child) pairs; fanout is small in practice.
    children: SmallVec<[(u8, NodeId); 4]>,
    /// Payloads of patterns ending here; non-empty means terminal.
    payloads: SmallVec<[P; 1]>,
}

impl<P> Node<P> {
    fn new(symbol: u8, parent: NodeId) -> Self {
        Node {
            symbol,
            parent,
            fail: NodeId::ROOT,
            children: SmallVec::new(),
            payloads: SmallVec::new(),
        }
    }
}

/// Prefix tree of patterns, generic over the payload attached to each one.
///
/// Insertion is strictly additive. Once every pattern is in, hand the trie
/// to [`Automaton::build`](crate::Automaton::build); the automaton takes
/// ownership and freezes the structure.
///
/// # Example
/// ```
/// use alice_match::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert(b"rust", 1);
/// trie.insert(b"rune", 2);
///
/// // root + r,u,s,t + n,e
/// assert_eq!(trie.node_count(), 7);
/// ```
#[derive(Debug)]
pub struct Trie<P> {
    nodes: Vec<Node<P>>,
}

impl<P> Trie<P> {
    /// An empty trie: just the root.
    pub fn new() -> Self {
        let mut nodes = Vec::new();
        nodes.push(Node::new(0, NodeId::ROOT));
        Trie { nodes }
    }

    /// Insert `sequence` and attach `payload` to its terminal node.
    ///
    /// Payloads accumulate: inserting the same sequence twice leaves one
    /// path carrying both payloads. Empty sequences are ignored, so the
    /// root never becomes terminal.
    pub fn insert(&mut self, sequence: &[u8], payload: P) {
        if sequence.is_empty() {
            return;
        }
        let mut node = NodeId::ROOT;
        for &symbol in sequence {
            node = match self.child(node, symbol) {
                Some(next) => next,
                None => self.add_child(node, symbol),
            };
        }
        self.nodes[node.index()].payloads.push(payload);
    }

    /// Number of nodes in the arena, the root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether any sequence has been inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    fn add_child(&mut self, parent: NodeId, symbol: u8) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(symbol, parent));

        let children = &mut self.nodes[parent.index()].children;
        let at = children.partition_point(|&(s, _)| s < symbol);
        children.insert(at, (symbol, id));
        id
    }

    /// Child of `node` on edge `symbol`, if present.
    #[inline(always)]
    pub(crate) fn child(&self, node: NodeId, symbol: u8) -> Option<NodeId> {
        let children = &self.nodes[node.index()].children;
        children
            .binary_search_by_key(&symbol, |&(s, _)| s)
            .ok()
            .map(|at| children[at].1)
    }

    #[inline(always)]
    pub(crate) fn fail(&self, node: NodeId) -> NodeId {
        self.nodes[node.index()].fail
    }

    #[inline]
    pub(crate) fn set_fail(&mut self, node: NodeId, to: NodeId) {
        self.nodes[node.index()].fail = to;
    }

    #[inline]
    pub(crate) fn parent(&self, node: NodeId) -> NodeId {
        self.nodes[node.index()].parent
    }

    #[inline]
    pub(crate) fn symbol(&self, node: NodeId) -> u8 {
        self.nodes[node.index()].symbol
    }

    #[inline(always)]
    pub(crate) fn payloads(&self, node: NodeId) -> &[P] {
        &self.nodes[node.index()].payloads
    }

    #[inline(always)]
    pub(crate) fn is_terminal(&self, node: NodeId) -> bool {
        !self.nodes[node.index()].payloads.is_empty()
    }

    pub(crate) fn children_of(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[node.index()].children.iter().map(|&(_, id)| id)
    }

    /// Reconstruct the byte path from the root down to `node`.
    #[cfg(test)]
    pub(crate) fn path_of(&self, node: NodeId) -> Vec<u8> {
        let mut path = Vec::new();
        let mut cur = node;
        while cur != NodeId::ROOT {
            path.push(self.symbol(cur));
            cur = self.parent(cur);
        }
        path.reverse();
        path
    }

    #[cfg(test)]
    pub(crate) fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }
}

impl<P> Default for Trie<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_sharing() {
        let mut trie = Trie::new();
        trie.insert(b"he", 0);
        trie.insert(b"hers", 1);
        trie.insert(b"his", 2);

        // root + h,e + r,s + i,s
        assert_eq!(trie.node_count(), 7);
        assert!(!trie.is_empty());
    }

    #[test]
    fn test_payloads_accumulate() {
        let mut trie = Trie::new();
        trie.insert(b"abc", 7);
        trie.insert(b"abc", 8);

        let mut node = NodeId::ROOT;
        for &symbol in b"abc" {
            node = trie.child(node, symbol).unwrap();
        }
        assert!(trie.is_terminal(node));
        assert_eq!(trie.payloads(node), &[7, 8]);
    }

    #[test]
    fn test_empty_insert_is_noop() {
        let mut trie = Trie::new();
        trie.insert(b"", 1);

        assert_eq!(trie.node_count(), 1);
        assert!(trie.is_empty());
        assert!(!trie.is_terminal(NodeId::ROOT));
    }

    #[test]
    fn test_child_lookup() {
        let mut trie = Trie::new();
        trie.insert(b"cab", 0);

        let c = trie.child(NodeId::ROOT, b'c').unwrap();
        assert_eq!(trie.symbol(c), b'c');
        assert_eq!(trie.parent(c), NodeId::ROOT);
        assert!(trie.child(NodeId::ROOT, b'x').is_none());
        assert!(trie.child(c, b'a').is_some());
    }

    #[test]
    fn test_children_stay_sorted() {
        let mut trie = Trie::new();
        for &symbol in b"dbeac" {
            trie.insert(&[symbol], symbol);
        }

        let symbols: Vec<u8> = trie
            .children_of(NodeId::ROOT)
            .map(|child| trie.symbol(child))
            .collect();
        assert_eq!(symbols, b"abcde".to_vec());
    }

    #[test]
    fn test_path_reconstruction() {
        let mut trie = Trie::new();
        trie.insert(b"she", 0);

        let mut node = NodeId::ROOT;
        for &symbol in b"she" {
            node = trie.child(node, symbol).unwrap();
        }
        assert_eq!(trie.path_of(node), b"she".to_vec());
        assert_eq!(trie.path_of(NodeId::ROOT), Vec::<u8>::new());
    }
}
