use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::codes::CodeTable;
use crate::error::{HuffError, Result};
use crate::tools::freq_count::FrequencyTable;

/// One node of a Huffman tree. Internal nodes own their children.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Node {
    /// A real symbol and its frequency.
    Leaf { symbol: u8, weight: u64 },
    /// Zero weight sibling for an input with only one distinct symbol. It never gets a code.
    Padding,
    /// Two children and the sum of their weights.
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
            Node::Padding => 0,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, Node::Internal { .. })
    }
}

/// A node waiting in the merge queue.
#[derive(Debug)]
struct Pending {
    weight: u64,
    /// Order of entry into the queue. Breaks ties between equal weights.
    seq: usize,
    node: Node,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}
impl Eq for Pending {}

impl Ord for Pending {
    /// Reversed on both keys so the max-heap pops the lightest node, and the oldest of equal weights.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Prefix code tree built from a frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree by repeatedly merging the two lightest nodes.
    ///
    /// Leaves enter the queue in ascending symbol order and every merged node is queued behind all
    /// nodes issued before it, so equal weights always merge in the same order. The first node
    /// popped becomes the left child.
    pub fn build(freqs: &FrequencyTable) -> Result<Self> {
        let mut queue: BinaryHeap<Pending> = freqs
            .iter()
            .enumerate()
            .map(|(seq, (symbol, weight))| Pending {
                weight,
                seq,
                node: Node::Leaf { symbol, weight },
            })
            .collect();
        let mut seq = queue.len();

        // A lone symbol still needs a one bit code, so give it a padding sibling.
        if queue.len() == 1 {
            if let Some(only) = queue.pop() {
                return Ok(Self {
                    root: Node::Internal {
                        weight: only.weight,
                        left: Box::new(only.node),
                        right: Box::new(Node::Padding),
                    },
                });
            }
        }

        while queue.len() > 1 {
            if let (Some(left), Some(right)) = (queue.pop(), queue.pop()) {
                let weight = left.weight + right.weight;
                queue.push(Pending {
                    weight,
                    seq,
                    node: Node::Internal {
                        weight,
                        left: Box::new(left.node),
                        right: Box::new(right.node),
                    },
                });
                seq += 1;
            }
        }

        queue
            .pop()
            .map(|last| Self { root: last.node })
            .ok_or(HuffError::EmptyInput)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total weight, i.e. the number of bytes the tree was built from.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Internal { left, right, .. } => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
                _ => deepest = deepest.max(depth),
            }
        }
        deepest
    }

    /// Number of real symbols in the tree (padding excluded).
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => count += 1,
                Node::Padding => {}
                Node::Internal { left, right, .. } => {
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
        count
    }

    /// Code table for every real symbol in the tree.
    pub fn codes(&self) -> CodeTable {
        CodeTable::generate(&self.root)
    }
}
