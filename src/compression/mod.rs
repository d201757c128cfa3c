//! The compression module manages both directions of hufzip.
//!
//! `codec` is the in-memory codec. Compression happens in the following steps:
//! - Frequency count: how often each byte value occurs.
//! - Tree build: merge the two lightest nodes until one root remains.
//! - Code generation: the path to each leaf is that symbol's code.
//! - Bit packing: concatenate the codes of every input byte, pad to a byte boundary.
//!
//! Decompression rebuilds a tree from the code table and walks it over the valid bits.
//!
//! `compress` and `decompress` wrap the codec with file I/O, logging and the run report.
//!
pub mod codec;
pub mod compress;
pub mod decompress;
