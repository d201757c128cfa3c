use crate::bitstream::bitpacker::BitPacker;
use crate::bitstream::bitreader::BitReader;
use crate::bitstream::payload::CompressedPayload;
use crate::error::{HuffError, Result};
use crate::huffman_coding::codes::{Code, CodeTable};
use crate::huffman_coding::decode_tree::DecodeTree;
use crate::huffman_coding::huffman::HuffmanTree;
use crate::tools::freq_count::FrequencyTable;

/*
    The in-memory codec. Nothing here touches files or the logger, and nothing survives
    between calls: every call builds its own frequency table, tree and code table.

    compress:   bytes -> frequencies -> tree -> codes -> packed bits
    decompress: codes -> rebuilt tree, then replay the packed bits against it
*/

/// Compress `data`, returning the packed payload and the code table needed to read it back.
pub fn compress(data: &[u8]) -> Result<(CompressedPayload, CodeTable)> {
    if data.is_empty() {
        return Err(HuffError::EmptyInput);
    }
    let freqs = FrequencyTable::analyze(data);
    let codes = HuffmanTree::build(&freqs)?.codes();
    let payload = encode(data, &codes)?;
    Ok((payload, codes))
}

/// Pack every byte of `data` using `codes`. Every byte must have a code.
pub fn encode(data: &[u8], codes: &CodeTable) -> Result<CompressedPayload> {
    // Dense lookup so the hot loop does not search the table.
    let mut lookup: [Option<&Code>; 256] = [None; 256];
    codes.iter().for_each(|(sym, code)| lookup[sym as usize] = Some(code));

    let mut bp = BitPacker::new(data.len() / 2 + 1);
    for (offset, &symbol) in data.iter().enumerate() {
        match lookup[symbol as usize] {
            Some(code) => bp.out_code(code),
            None => return Err(HuffError::MissingCodeForSymbol { symbol, offset }),
        }
    }
    let (valid_bits, bytes) = bp.finish();
    CompressedPayload::new(valid_bits, bytes)
}

/// Rebuild the original bytes from a payload and its code table.
pub fn decompress(payload: &CompressedPayload, codes: &CodeTable) -> Result<Vec<u8>> {
    let tree = DecodeTree::from_codes(codes)?;
    let mut br = BitReader::new(payload.data(), payload.valid_bits());
    tree.decode(&mut br)
}

/// Decompress straight from the two serialized artifacts.
pub fn decompress_artifacts(payload: &[u8], codes_text: &str) -> Result<Vec<u8>> {
    let codes: CodeTable = codes_text.parse()?;
    let payload = CompressedPayload::from_bytes(payload)?;
    decompress(&payload, &codes)
}
