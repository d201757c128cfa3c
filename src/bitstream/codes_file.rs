//! The text codes file that travels next to the payload.
//!
//! One line per symbol, in ascending symbol order: `<symbol 0-255> <bitstring>`. For example the
//! codes for `"abb"` are
//!
//! ```text
//! 97 0
//! 98 1
//! ```

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::HuffError;
use crate::huffman_coding::codes::{Code, CodeTable};

impl Display for CodeTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "{} {}", symbol, code)?;
        }
        Ok(())
    }
}

impl FromStr for CodeTable {
    type Err = HuffError;

    /// Parse a codes file. Blank lines are skipped and any whitespace may separate the two tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut table = CodeTable::new();

        for (idx, line) in s.lines().enumerate() {
            let malformed = |reason: String| HuffError::MalformedCodesFile {
                line: idx + 1,
                reason,
            };

            let tokens: Vec<&str> = line.split_whitespace().collect();
            let (sym, bits) = match tokens.as_slice() {
                [] => continue,
                [sym, bits] => (*sym, *bits),
                other => {
                    return Err(malformed(format!(
                        "expected `<symbol> <bitstring>`, found {} token(s)",
                        other.len()
                    )))
                }
            };

            // Plain decimal only: `str::parse` would also take a leading `+`.
            if !sym.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed(format!("symbol {:?} is not a decimal integer", sym)));
            }
            let symbol: u8 = sym
                .parse()
                .map_err(|_| malformed(format!("symbol {} is outside 0-255", sym)))?;
            let code: Code = bits.parse().map_err(malformed)?;

            if table.insert(symbol, code).is_some() {
                return Err(malformed(format!("symbol {} appears more than once", symbol)));
            }
        }
        Ok(table)
    }
}

#[cfg(test)]
mod test {
    use crate::error::HuffError;
    use crate::huffman_coding::codes::{Code, CodeTable};

    fn line_of(err: HuffError) -> usize {
        match err {
            HuffError::MalformedCodesFile { line, .. } => line,
            other => panic!("expected MalformedCodesFile, got {:?}", other),
        }
    }

    #[test]
    fn write_test() {
        let mut codes = CodeTable::new();
        codes.insert(98, "1".parse::<Code>().unwrap());
        codes.insert(97, "0".parse::<Code>().unwrap());
        codes.insert(10, "110".parse::<Code>().unwrap());
        assert_eq!(codes.to_string(), "10 110\n97 0\n98 1\n");
    }

    #[test]
    fn parse_test() {
        let codes: CodeTable = "97 0\n98 10\n\n  255\t11  \r\n".parse().unwrap();
        assert_eq!(codes.len(), 3);
        assert_eq!(codes.get(97).map(Code::to_string), Some("0".to_string()));
        assert_eq!(codes.get(98).map(Code::to_string), Some("10".to_string()));
        assert_eq!(codes.get(255).map(Code::to_string), Some("11".to_string()));
    }

    #[test]
    fn written_table_parses_back() {
        let text = "0 00\n1 01\n200 1\n";
        let codes: CodeTable = text.parse().unwrap();
        assert_eq!(codes.to_string(), text);
    }

    #[test]
    fn rejects_bad_lines() {
        assert_eq!(line_of("97 0\nx 1\n".parse::<CodeTable>().unwrap_err()), 2);
        assert_eq!(line_of("256 1\n".parse::<CodeTable>().unwrap_err()), 1);
        assert_eq!(line_of("-1 1\n".parse::<CodeTable>().unwrap_err()), 1);
        assert_eq!(line_of("97\n".parse::<CodeTable>().unwrap_err()), 1);
        assert_eq!(line_of("97 0 1\n".parse::<CodeTable>().unwrap_err()), 1);
        assert_eq!(line_of("\n97 012\n".parse::<CodeTable>().unwrap_err()), 2);
        assert_eq!(line_of("97 0\n97 1\n".parse::<CodeTable>().unwrap_err()), 2);
    }

    #[test]
    fn rejects_signed_symbol() {
        assert_eq!(line_of("+97 0\n".parse::<CodeTable>().unwrap_err()), 1);
        assert_eq!(line_of("98 1\n+97 0\n".parse::<CodeTable>().unwrap_err()), 2);
        let codes: CodeTable = "097 0\n98 1\n".parse().unwrap();
        assert_eq!(codes.get(97), Some(&"0".parse::<Code>().unwrap()));
    }

    #[test]
    fn empty_file_is_empty_table() {
        let codes: CodeTable = "".parse().unwrap();
        assert!(codes.is_empty());
    }
}
