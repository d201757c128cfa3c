use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use super::cli::{Mode, Verbosity};

/// Prints a message when the user asked for at least `this_v` verbosity.
/// Accepts both &str and String message.
pub fn report<S: AsRef<str> + Display>(v: Verbosity, this_v: Verbosity, msg: S) {
    if v >= this_v {
        println!("{}", msg)
    }
}

/// Summary of one compress or decompress run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub mode: Mode,
    /// Size of the uncompressed data (input when compressing, output when decompressing).
    pub original_size: u64,
    /// Size of the payload file.
    pub compressed_size: u64,
    /// Size of the codes file.
    pub codes_size: u64,
    pub elapsed: Duration,
}

impl Report {
    /// Percentage of the original size saved by the payload.
    pub fn savings(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (1.0 - self.compressed_size as f64 / self.original_size as f64) * 100.0
    }

    /// Print the report at Info verbosity or above.
    pub fn print(&self, v: Verbosity) {
        report(v, Verbosity::Info, self.to_string());
    }
}

const RULE: &str = "--------------------------------------";

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        match self.mode {
            Mode::Zip => writeln!(f, "       COMPRESSION REPORT")?,
            Mode::Unzip => writeln!(f, "      DECOMPRESSION REPORT")?,
        }
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Time Taken      : {:.4} s", self.elapsed.as_secs_f64())?;
        writeln!(f, "Original Size   : {} bytes", self.original_size)?;
        writeln!(f, "Compressed Size : {} bytes", self.compressed_size)?;
        writeln!(f, "Codes Size      : {} bytes", self.codes_size)?;
        if self.mode == Mode::Zip {
            writeln!(f, "Space Saved     : {:.2} %", self.savings())?;
        }
        write!(f, "{}", RULE)
    }
}
