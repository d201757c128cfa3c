use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::huffman::Node;
use crate::tools::freq_count::FrequencyTable;

/// The bit path from the root to a leaf. `false` is a left turn, `true` a right turn.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// True if `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

    /// This path extended by one more turn.
    fn child(&self, bit: bool) -> Code {
        let mut code = self.clone();
        code.push(bit);
        code
    }
}

impl From<Vec<bool>> for Code {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = String;

    /// Parse a string of `0` and `1` characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("empty bitstring".to_string());
        }
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(format!("unexpected character {:?} in bitstring", other)),
            })
            .collect::<Result<Vec<bool>, String>>()
            .map(Code::from)
    }
}

/// Symbol to code mapping. Iterates in ascending symbol order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the tree depth first (left before right) and record the path to every real leaf.
    pub fn generate(root: &Node) -> Self {
        let mut table = Self::new();
        let mut stack: Vec<(&Node, Code)> = vec![(root, Code::new())];

        while let Some((node, path)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    // Only a bare leaf root has an empty path.
                    let code = if path.is_empty() {
                        Code::from(vec![false])
                    } else {
                        path
                    };
                    table.codes.insert(*symbol, code);
                }
                Node::Padding => {}
                Node::Internal { left, right, .. } => {
                    stack.push((right, path.child(true)));
                    stack.push((left, path.child(false)));
                }
            }
        }
        table
    }

    /// Add or replace a code, returning the previous one.
    pub fn insert(&mut self, symbol: u8, code: Code) -> Option<Code> {
        self.codes.insert(symbol, code)
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> {
        self.codes.iter().map(|(&sym, code)| (sym, code))
    }

    /// Bits needed to encode an input with these frequencies.
    pub fn weighted_length(&self, freqs: &FrequencyTable) -> u64 {
        freqs
            .iter()
            .map(|(sym, count)| count * self.get(sym).map_or(0, |c| c.len() as u64))
            .sum()
    }

    /// No code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .skip(i + 1)
                .all(|b| !a.is_prefix_of(b) && !b.is_prefix_of(a))
        })
    }
}
