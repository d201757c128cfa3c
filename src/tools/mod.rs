//! The tools module provides several helper functions for hufzip.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - dot: Graphviz export of a Huffman tree, for debugging.
//! - freq_count: Frequency count of the input bytes.
//! - report: End of run report.
//! - timer: Lap timer used by the report.
//!
pub mod cli;
pub mod dot;
pub mod freq_count;
pub mod report;
pub mod timer;
