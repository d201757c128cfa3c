//! Decoding side of the Huffman system.
//!
//! The decoder never sees the frequencies, only the code table. It grows a tree from the codes (each symbol
//! sits at the leaf its code leads to) and then replays the payload bits against it. Nodes live in one
//! arena and refer to their children by index.

use super::codes::CodeTable;
use crate::bitstream::bitreader::BitReader;
use crate::error::{HuffError, Result};

const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct Slot {
    /// [left, right] children, indexed by the bit value.
    kids: [Option<usize>; 2],
    symbol: Option<u8>,
}

impl Slot {
    fn is_branch(&self) -> bool {
        self.kids.iter().any(Option::is_some)
    }
}

/// Tree rebuilt from a code table, ready to decode a bitstream.
#[derive(Debug, Clone)]
pub struct DecodeTree {
    slots: Vec<Slot>,
}

impl DecodeTree {
    /// Rebuild the tree. Fails if the codes are not prefix-free or a code is empty.
    pub fn from_codes(codes: &CodeTable) -> Result<Self> {
        let mut slots = vec![Slot::default()];

        for (symbol, code) in codes.iter() {
            let conflict = || HuffError::ConflictingCodeTable {
                symbol,
                code: code.to_string(),
            };
            if code.is_empty() {
                return Err(conflict());
            }

            let mut cur = ROOT;
            for &bit in code.bits() {
                // A shorter code already ends here.
                if slots[cur].symbol.is_some() {
                    return Err(conflict());
                }
                cur = match slots[cur].kids[bit as usize] {
                    Some(next) => next,
                    None => {
                        slots.push(Slot::default());
                        let next = slots.len() - 1;
                        slots[cur].kids[bit as usize] = Some(next);
                        next
                    }
                };
            }
            // Either the same path was claimed already, or a longer code runs through here.
            if slots[cur].symbol.is_some() || slots[cur].is_branch() {
                return Err(conflict());
            }
            slots[cur].symbol = Some(symbol);
        }
        Ok(Self { slots })
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.len() <= 1
    }

    /// Walk the tree once per valid bit, emitting a symbol at every leaf and starting over at the root.
    /// The bits must run out exactly at a symbol boundary.
    pub fn decode(&self, br: &mut BitReader<'_>) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut cur = ROOT;

        while let Some(bit) = br.bit() {
            cur = match self.slots[cur].kids[bit] {
                Some(next) => next,
                None => {
                    return Err(HuffError::CorruptTraversal {
                        position: br.position() - 1,
                        reason: "no child for this bit in the code tree",
                    })
                }
            };
            if let Some(symbol) = self.slots[cur].symbol {
                out.push(symbol);
                cur = ROOT;
            }
        }

        if cur != ROOT {
            return Err(HuffError::CorruptTraversal {
                position: br.position(),
                reason: "bitstream ended inside a code",
            });
        }
        Ok(out)
    }
}

#[cfg(test)]
mod test {
    use super::DecodeTree;
    use crate::bitstream::bitreader::BitReader;
    use crate::error::HuffError;
    use crate::huffman_coding::codes::{Code, CodeTable};

    fn table(pairs: &[(u8, &str)]) -> CodeTable {
        let mut codes = CodeTable::new();
        for &(sym, bits) in pairs {
            codes.insert(sym, bits.parse::<Code>().unwrap());
        }
        codes
    }

    #[test]
    fn decode_test() {
        let tree = DecodeTree::from_codes(&table(&[(b'a', "0"), (b'b', "10"), (b'c', "11")])).unwrap();
        assert_eq!(tree.len(), 5);
        // a b c a -> 0 10 11 0
        let data = [0b0101_1000];
        let mut br = BitReader::new(&data, 6);
        assert_eq!(tree.decode(&mut br).unwrap(), b"abca".to_vec());
    }

    #[test]
    fn single_code_tree() {
        let tree = DecodeTree::from_codes(&table(&[(b'a', "0")])).unwrap();
        let data = [0b0000_0000];
        let mut br = BitReader::new(&data, 4);
        assert_eq!(tree.decode(&mut br).unwrap(), b"aaaa".to_vec());
    }

    #[test]
    fn missing_child_is_corrupt() {
        // Only "0" exists, so a 1 bit has nowhere to go.
        let tree = DecodeTree::from_codes(&table(&[(b'a', "0")])).unwrap();
        let data = [0b0100_0000];
        let mut br = BitReader::new(&data, 2);
        match tree.decode(&mut br) {
            Err(HuffError::CorruptTraversal { position, .. }) => assert_eq!(position, 1),
            other => panic!("expected CorruptTraversal, got {:?}", other),
        }
    }

    #[test]
    fn ending_mid_code_is_corrupt() {
        let tree = DecodeTree::from_codes(&table(&[(b'a', "0"), (b'b', "10"), (b'c', "11")])).unwrap();
        let data = [0b0100_0000];
        let mut br = BitReader::new(&data, 2);
        match tree.decode(&mut br) {
            Err(HuffError::CorruptTraversal { position, .. }) => assert_eq!(position, 2),
            other => panic!("expected CorruptTraversal, got {:?}", other),
        }
    }

    #[test]
    fn prefix_conflicts_rejected() {
        // Shorter code inserted first.
        let result = DecodeTree::from_codes(&table(&[(1, "0"), (2, "01")]));
        assert!(matches!(result, Err(HuffError::ConflictingCodeTable { symbol: 2, .. })));
        // Longer code inserted first.
        let result = DecodeTree::from_codes(&table(&[(1, "01"), (2, "0")]));
        assert!(matches!(result, Err(HuffError::ConflictingCodeTable { symbol: 2, .. })));
        // Same path twice.
        let result = DecodeTree::from_codes(&table(&[(1, "10"), (2, "10")]));
        assert!(matches!(result, Err(HuffError::ConflictingCodeTable { symbol: 2, .. })));
    }

    #[test]
    fn empty_code_rejected() {
        let mut codes = CodeTable::new();
        codes.insert(5, Code::new());
        assert!(matches!(
            DecodeTree::from_codes(&codes),
            Err(HuffError::ConflictingCodeTable { symbol: 5, .. })
        ));
    }

    #[test]
    fn empty_table_decodes_nothing() {
        let tree = DecodeTree::from_codes(&CodeTable::new()).unwrap();
        assert!(tree.is_empty());
        let mut br = BitReader::new(&[], 0);
        assert_eq!(tree.decode(&mut br).unwrap(), Vec::<u8>::new());
    }
}
