use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{debug, info, trace};

use super::codec;
use crate::error::Result;
use crate::huffman_coding::huffman::HuffmanTree;
use crate::tools::cli::HzOpts;
use crate::tools::dot::write_dot;
use crate::tools::freq_count::FrequencyTable;
use crate::tools::report::Report;
use crate::tools::timer::Timer;

/// Refuse to clobber any of `paths` unless overwriting was forced. Checked up front so a run
/// never leaves half of its outputs behind.
pub(crate) fn check_outputs(paths: &[&str], force: bool) -> io::Result<()> {
    if force {
        return Ok(());
    }
    match paths.iter().find(|p| Path::new(p).exists()) {
        Some(p) => Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists (use --force to overwrite)", p),
        )),
        None => Ok(()),
    }
}

/// Open an output file for writing.
pub(crate) fn create_output(path: &str, force: bool) -> io::Result<BufWriter<File>> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    Ok(BufWriter::new(options.open(path)?))
}

/// Compress the input file defined in opts <HzOpts>, writing the payload and codes files.
/// Requires a Timer.
pub fn compress(opts: &HzOpts, timer: &mut Timer) -> Result<Report> {
    let data = fs::read(&opts.input)?;
    info!("Read {} bytes from {}", data.len(), opts.input);
    timer.mark("read");

    // Empty input fails here, before any output file exists.
    let (payload, codes) = codec::compress(&data)?;
    debug!(
        "{} distinct symbols, {} valid bits, {} padding bits",
        codes.len(),
        payload.valid_bits(),
        payload.padding_bits()
    );
    for (symbol, code) in codes.iter() {
        trace!("{:>3} {}", symbol, code);
    }
    timer.mark("encode");

    let dot_file = format!("{}.dot", opts.output);
    let mut outputs = vec![opts.output.as_str(), opts.codes.as_str()];
    if opts.dot {
        outputs.push(dot_file.as_str());
    }
    check_outputs(&outputs, opts.force_overwrite)?;

    let mut f_out = create_output(&opts.output, opts.force_overwrite)?;
    payload.write_to(&mut f_out)?;
    f_out.flush()?;

    let codes_text = codes.to_string();
    let mut f_codes = create_output(&opts.codes, opts.force_overwrite)?;
    f_codes.write_all(codes_text.as_bytes())?;
    f_codes.flush()?;

    if opts.dot {
        // Tree building is deterministic, so this is the tree the codes came from.
        let tree = HuffmanTree::build(&FrequencyTable::analyze(&data))?;
        let mut f_dot = create_output(&dot_file, opts.force_overwrite)?;
        write_dot(&tree, &mut f_dot)?;
        f_dot.flush()?;
        info!("Tree visualization saved to {}", dot_file);
    }
    timer.mark("write");

    info!("Compressed file: {}", opts.output);
    info!("Codes file: {}", opts.codes);

    Ok(Report {
        mode: opts.op_mode,
        original_size: data.len() as u64,
        compressed_size: payload.len() as u64,
        codes_size: codes_text.len() as u64,
        elapsed: timer.elapsed(),
    })
}
