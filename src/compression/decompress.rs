use std::fs;
use std::io::Write;

use log::{debug, info};

use super::codec;
use super::compress::{check_outputs, create_output};
use crate::bitstream::payload::CompressedPayload;
use crate::error::Result;
use crate::huffman_coding::codes::CodeTable;
use crate::tools::cli::HzOpts;
use crate::tools::report::Report;
use crate::tools::timer::Timer;

/// Decompress the payload file specified in opts (HzOpts) using its codes file. Also requires a Timer.
pub fn decompress(opts: &HzOpts, timer: &mut Timer) -> Result<Report> {
    let raw = fs::read(&opts.input)?;
    let codes_text = fs::read_to_string(&opts.codes)?;
    info!("Read {} payload bytes from {}", raw.len(), opts.input);
    timer.mark("read");

    let payload = CompressedPayload::from_bytes(&raw)?;
    let codes: CodeTable = codes_text.parse()?;
    debug!(
        "{} codes, {} valid bits in {} data bytes",
        codes.len(),
        payload.valid_bits(),
        payload.data().len()
    );

    let data = codec::decompress(&payload, &codes)?;
    timer.mark("decode");

    check_outputs(&[opts.output.as_str()], opts.force_overwrite)?;
    let mut f_out = create_output(&opts.output, opts.force_overwrite)?;
    f_out.write_all(&data)?;
    f_out.flush()?;
    timer.mark("write");

    info!("Output written to: {}", opts.output);

    Ok(Report {
        mode: opts.op_mode,
        original_size: data.len() as u64,
        compressed_size: raw.len() as u64,
        codes_size: codes_text.len() as u64,
        elapsed: timer.elapsed(),
    })
}
