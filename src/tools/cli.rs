use clap::Parser;
use log::{info, LevelFilter};
use std::{fmt::Display, fmt::Formatter};

/// Extension added to the payload file when compressing.
pub const PAYLOAD_EXT: &str = ".huf";
/// Extension used for the codes file.
pub const CODES_EXT: &str = ".codes";
/// Extension for decompressed output when the payload name has no `.huf` to strip.
pub const OUTPUT_EXT: &str = ".out";

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map the numeric -v level (0-5) onto a verbosity. Anything above 5 is Trace.
    pub fn from_level(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Zip, Unzip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// All user settable options that control one run.
#[derive(Debug, Clone)]
pub struct HzOpts {
    /// Compress/Decompress
    pub op_mode: Mode,
    /// File to read: the original when compressing, the payload when decompressing
    pub input: String,
    /// File to write: the payload when compressing, the restored data when decompressing
    pub output: String,
    /// Codes file, written when compressing and read when decompressing
    pub codes: String,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Also write a Graphviz dump of the tree next to the payload
    pub dot: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HzOpts {
    pub fn new() -> Self {
        Self {
            op_mode: Mode::Zip,
            input: String::new(),
            output: String::new(),
            codes: String::new(),
            force_overwrite: false,
            dot: false,
            verbose: Verbosity::Info,
        }
    }

    /// Options for compressing `input` with the default output names.
    pub fn zip(input: &str) -> Self {
        Self {
            op_mode: Mode::Zip,
            input: input.to_string(),
            output: format!("{}{}", input, PAYLOAD_EXT),
            codes: format!("{}{}", input, CODES_EXT),
            ..Self::new()
        }
    }

    /// Options for decompressing the payload `input` with the default codes and output names.
    pub fn unzip(input: &str) -> Self {
        let (codes, output) = match input.strip_suffix(PAYLOAD_EXT) {
            Some(stem) if !stem.is_empty() => {
                (format!("{}{}", stem, CODES_EXT), stem.to_string())
            }
            _ => (
                format!("{}{}", input, CODES_EXT),
                format!("{}{}", input, OUTPUT_EXT),
            ),
        };
        Self {
            op_mode: Mode::Unzip,
            input: input.to_string(),
            output,
            codes,
            ..Self::new()
        }
    }
}

impl Default for HzOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "A Huffman coding file compressor",
    long_about = "
    Compresses a file with a static Huffman code built from its byte frequencies. Compression
    writes two files: the packed payload and a text codes file. Both are needed to decompress.

    Compress:   hufzip <input> [-o <payload>] [-c <codes>]
    Decompress: hufzip -d <payload> [-c <codes>] [-o <output>]"
)]
pub struct Args {
    /// File to compress, or the payload file to decompress
    #[clap()]
    filename: String,

    /// Compress the input file (the default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Decompress the input file
    #[clap(short = 'd', long = "decompress", conflicts_with = "compress")]
    decompress: bool,

    /// Output file. Defaults to <input>.huf, or the payload name without .huf when decompressing
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Codes file. Defaults to the input (or payload stem) with a .codes extension
    #[clap(short = 'c', long = "codes")]
    codes: Option<String>,

    /// Force overwriting output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Write a Graphviz dump of the Huffman tree to <output>.dot when compressing
    #[clap(long = "dot")]
    dot: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,

    /// Suppress all messages (same as -v0)
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

impl From<Args> for HzOpts {
    fn from(args: Args) -> Self {
        let mut opts = if args.decompress {
            HzOpts::unzip(&args.filename)
        } else {
            HzOpts::zip(&args.filename)
        };
        if let Some(output) = args.output {
            opts.output = output;
        }
        if let Some(codes) = args.codes {
            opts.codes = codes;
        }
        opts.force_overwrite = args.force;
        opts.dot = args.dot;
        opts.verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::from_level(args.v)
        };
        opts
    }
}

/// Parse the command line, set the log level and report the settings.
pub fn hzopts_init() -> HzOpts {
    let opts = HzOpts::from(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    info!("---- Hufzip Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Reading from {}", opts.input);
    match opts.op_mode {
        Mode::Zip => info!("Writing payload to {} and codes to {}", opts.output, opts.codes),
        Mode::Unzip => info!("Using codes from {}, writing to {}", opts.codes, opts.output),
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    if opts.dot {
        info!("Tree visualization enabled")
    };
    info!("---- Hufzip Initialization End ----\n");
    opts
}

#[cfg(test)]
mod test {
    use super::{Args, HzOpts, Mode, Verbosity};
    use clap::Parser;

    fn opts(argv: &[&str]) -> HzOpts {
        HzOpts::from(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn compress_defaults() {
        let o = opts(&["hufzip", "notes.txt"]);
        assert_eq!(o.op_mode, Mode::Zip);
        assert_eq!(o.input, "notes.txt");
        assert_eq!(o.output, "notes.txt.huf");
        assert_eq!(o.codes, "notes.txt.codes");
        assert_eq!(o.verbose, Verbosity::Info);
        assert!(!o.force_overwrite);
        assert!(!o.dot);
    }

    #[test]
    fn decompress_defaults() {
        let o = opts(&["hufzip", "-d", "notes.txt.huf"]);
        assert_eq!(o.op_mode, Mode::Unzip);
        assert_eq!(o.codes, "notes.txt.codes");
        assert_eq!(o.output, "notes.txt");

        let o = opts(&["hufzip", "-d", "blob.bin"]);
        assert_eq!(o.codes, "blob.bin.codes");
        assert_eq!(o.output, "blob.bin.out");
    }

    #[test]
    fn explicit_paths_and_flags() {
        let o = opts(&[
            "hufzip", "-d", "in.huf", "-c", "table.txt", "-o", "restored", "-f", "-v", "5",
        ]);
        assert_eq!(o.codes, "table.txt");
        assert_eq!(o.output, "restored");
        assert!(o.force_overwrite);
        assert_eq!(o.verbose, Verbosity::Trace);

        let o = opts(&["hufzip", "-q", "--dot", "x"]);
        assert_eq!(o.verbose, Verbosity::Quiet);
        assert!(o.dot);
    }

    #[test]
    fn compress_and_decompress_conflict() {
        assert!(Args::try_parse_from(["hufzip", "-z", "-d", "x"]).is_err());
    }

    #[test]
    fn verbosity_order() {
        assert!(Verbosity::Trace > Verbosity::Info);
        assert_eq!(Verbosity::from_level(9), Verbosity::Trace);
        assert_eq!(Verbosity::Quiet.level_filter(), log::LevelFilter::Off);
    }
}
