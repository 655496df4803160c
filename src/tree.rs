//! Huffman tree construction and code-table extraction.
//!
//! Leaves are merged lowest-frequency-first into a strict binary tree;
//! each leaf's code is its root-to-leaf path (left = 0, right = 1).

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use crate::freq::FrequencyTable;

/// A node of the Huffman tree. Internal nodes own their children; the
/// whole tree is released when the root goes out of scope.
#[derive(Debug)]
pub enum Node {
    Leaf {
        byte: u8,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// Min-heap entry. `seq` totalizes the frequency ordering: leaves carry
/// their byte value (0..=255), merge nodes carry 256 plus a creation
/// counter, so equal-frequency ties break by byte value for leaves and
/// by creation order for merges, deterministically across runs.
struct HeapEntry {
    freq: u64,
    seq: u16,
    node: Node,
}

impl Eq for HeapEntry {}
impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}
impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap, we need the minimum first
        (other.freq, other.seq).cmp(&(self.freq, self.seq))
    }
}

impl Node {
    /// Build the Huffman tree for a frequency table. Returns `None` for
    /// an empty table; a single-symbol table yields a lone leaf root.
    pub fn build(table: &FrequencyTable) -> Option<Node> {
        let mut heap = BinaryHeap::new();
        for (byte, freq) in table.iter() {
            heap.push(HeapEntry {
                freq,
                seq: byte as u16,
                node: Node::Leaf { byte, freq },
            });
        }

        let mut next_seq = 256u16;
        while heap.len() > 1 {
            let first = heap.pop().unwrap();
            let second = heap.pop().unwrap();
            let freq = first.freq + second.freq;
            heap.push(HeapEntry {
                freq,
                seq: next_seq,
                node: Node::Internal {
                    freq,
                    left: Box::new(first.node),
                    right: Box::new(second.node),
                },
            });
            next_seq += 1;
        }

        heap.pop().map(|entry| entry.node)
    }

    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }
}

/// Prefix-free mapping from byte value to code bits, in ascending byte
/// order. The ordering makes header emission deterministic.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    codes: BTreeMap<u8, Vec<bool>>,
}

impl CodeTable {
    /// Extract codes by depth-first walk from the root. A lone leaf root
    /// gets the one-bit code `0`: an empty code would be unparseable by
    /// the greedy decoder.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = BTreeMap::new();
        match root {
            Node::Leaf { byte, .. } => {
                codes.insert(*byte, vec![false]);
            }
            Node::Internal { .. } => {
                walk(root, &mut Vec::new(), &mut codes);
            }
        }
        Self { codes }
    }

    /// Table for the empty alphabet (empty-input container).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, byte: u8) -> Option<&[bool]> {
        self.codes.get(&byte).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(byte, code)` pairs in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[bool])> {
        self.codes.iter().map(|(&b, code)| (b, code.as_slice()))
    }
}

fn walk(node: &Node, path: &mut Vec<bool>, codes: &mut BTreeMap<u8, Vec<bool>>) {
    match node {
        Node::Leaf { byte, .. } => {
            codes.insert(*byte, path.clone());
        }
        Node::Internal { left, right, .. } => {
            path.push(false);
            walk(left, path, codes);
            path.pop();
            path.push(true);
            walk(right, path, codes);
            path.pop();
        }
    }
}
