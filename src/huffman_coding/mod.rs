//! The huffman_coding module builds and replays the prefix code for hufzip.
//!
//! Compression counts the bytes, builds a tree by repeatedly merging the two lightest nodes, and reads each
//! symbol's code off the path from the root to its leaf. Ties between equal weights are broken in a fixed
//! order, so the same input always produces the same codes.
//!
//! Decompression never sees the frequencies. It rebuilds an equivalent tree from the code table alone and
//! walks it bit by bit.
//!
pub mod codes;
pub mod decode_tree;
pub mod huffman;
