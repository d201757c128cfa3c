use std::io::{self, Write};

use crate::huffman_coding::huffman::{HuffmanTree, Node};

/// Label text for a symbol inside a DOT record. Record syntax characters, quotes and anything
/// unprintable are shown in hex.
fn symbol_label(symbol: u8) -> String {
    match symbol {
        b' ' => "SPACE".to_string(),
        b'\n' => "\\\\n".to_string(),
        b'\r' => "\\\\r".to_string(),
        b'\t' => "\\\\t".to_string(),
        b'"' | b'\\' | b'{' | b'}' | b'|' | b'<' | b'>' => format!("0x{:02x}", symbol),
        s if s.is_ascii_graphic() => (s as char).to_string(),
        s => format!("0x{:02x}", s),
    }
}

/// Write the tree as a Graphviz digraph. Nodes are numbered in depth-first order, left edges
/// are labelled 0 and right edges 1.
pub fn write_dot<W: Write>(tree: &HuffmanTree, out: &mut W) -> io::Result<()> {
    writeln!(out, "digraph HuffmanTree {{")?;
    writeln!(out, "  rankdir=TB;")?;
    writeln!(out, "  node [fontname=\"Arial\"];")?;
    writeln!(out, "  edge [fontname=\"Arial\"];")?;

    let mut next_id = 1_usize;
    let mut stack = vec![(tree.root(), 0_usize)];
    while let Some((node, id)) = stack.pop() {
        match node {
            Node::Leaf { symbol, weight } => writeln!(
                out,
                "  node{} [label=\"{{{} | {}}}\", shape=record, style=filled, fillcolor=\"#b3e6ff\"];",
                id,
                symbol_label(*symbol),
                weight
            )?,
            Node::Padding => writeln!(
                out,
                "  node{} [label=\"pad\", shape=box, style=dashed];",
                id
            )?,
            Node::Internal {
                weight,
                left,
                right,
            } => {
                let (left_id, right_id) = (next_id, next_id + 1);
                next_id += 2;
                writeln!(
                    out,
                    "  node{} [label=\"{}\", shape=circle, style=filled, fillcolor=\"#e0e0e0\"];",
                    id, weight
                )?;
                writeln!(
                    out,
                    "  node{} -> node{} [label=\"0\", color=\"#ff3333\", penwidth=2.0];",
                    id, left_id
                )?;
                writeln!(
                    out,
                    "  node{} -> node{} [label=\"1\", color=\"#0066cc\", penwidth=2.0];",
                    id, right_id
                )?;
                stack.push((right, right_id));
                stack.push((left, left_id));
            }
        }
    }
    writeln!(out, "}}")
}

#[cfg(test)]
mod test {
    use super::{symbol_label, write_dot};
    use crate::huffman_coding::huffman::HuffmanTree;
    use crate::tools::freq_count::FrequencyTable;

    fn dot_of(data: &[u8]) -> String {
        let tree = HuffmanTree::build(&FrequencyTable::analyze(data)).unwrap();
        let mut out = Vec::new();
        write_dot(&tree, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn abb_graph() {
        let dot = dot_of(b"abb");
        assert!(dot.starts_with("digraph HuffmanTree {\n"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("node0 [label=\"3\""));
        assert!(dot.contains("node1 [label=\"{a | 1}\""));
        assert!(dot.contains("node2 [label=\"{b | 2}\""));
        assert!(dot.contains("node0 -> node1 [label=\"0\""));
        assert!(dot.contains("node0 -> node2 [label=\"1\""));
    }

    #[test]
    fn single_symbol_graph_shows_padding() {
        let dot = dot_of(b"zz");
        assert!(dot.contains("node2 [label=\"pad\""));
    }

    #[test]
    fn graph_is_deterministic() {
        let data = b"the quick brown fox jumps over the lazy dog";
        assert_eq!(dot_of(data), dot_of(data));
    }

    #[test]
    fn labels() {
        assert_eq!(symbol_label(b'a'), "a");
        assert_eq!(symbol_label(b' '), "SPACE");
        assert_eq!(symbol_label(b'\n'), "\\\\n");
        assert_eq!(symbol_label(b'|'), "0x7c");
        assert_eq!(symbol_label(0), "0x00");
        assert_eq!(symbol_label(200), "0xc8");
    }
}
