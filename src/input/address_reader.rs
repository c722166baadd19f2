//! Address reader - logical addresses from a line-oriented text source.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::warn;

use crate::common::{Error, LogicalAddress, Result};

/// Iterates over the logical addresses in a text source, one per line.
///
/// Blank lines are ignored. A line that is not an unsigned integer in
/// `0..=65535` yields `Error::MalformedAddress`; I/O failures yield
/// `Error::Io`.
///
/// # Example
/// ```
/// use vmsim::input::AddressReader;
/// use vmsim::LogicalAddress;
///
/// let reader = AddressReader::new("16916\n62493\n".as_bytes());
/// let addresses: Vec<LogicalAddress> = reader.map(|a| a.unwrap()).collect();
/// assert_eq!(addresses, vec![LogicalAddress::new(16916), LogicalAddress::new(62493)]);
/// ```
#[derive(Debug)]
pub struct AddressReader<R> {
    lines: Lines<R>,
    /// 1-based number of the last line read.
    line_number: usize,
}

impl<R: BufRead> AddressReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// Drop malformed lines with a warning, keeping I/O errors.
    pub fn skip_malformed(self) -> impl Iterator<Item = Result<LogicalAddress>> {
        self.filter(|item| match item {
            Err(Error::MalformedAddress { line, text }) => {
                warn!(line, text = %text, "skipping malformed address");
                false
            }
            _ => true,
        })
    }
}

impl AddressReader<BufReader<File>> {
    /// Open an address file.
    ///
    /// # Errors
    /// Returns `Error::SourceUnavailable` if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for AddressReader<R> {
    type Item = Result<LogicalAddress>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_number += 1;

            let text = line.trim();
            if text.is_empty() {
                continue;
            }

            return Some(parse_address(text).ok_or_else(|| Error::MalformedAddress {
                line: self.line_number,
                text: text.to_owned(),
            }));
        }
    }
}

fn parse_address(text: &str) -> Option<LogicalAddress> {
    text.parse::<u16>().ok().map(LogicalAddress::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn collect(input: &str) -> Vec<Result<LogicalAddress>> {
        AddressReader::new(input.as_bytes()).collect()
    }

    #[test]
    fn test_reads_addresses() {
        let addresses: Vec<u16> = collect("1\n256\n65535\n")
            .into_iter()
            .map(|a| a.unwrap().value())
            .collect();
        assert_eq!(addresses, vec![1, 256, 65535]);
    }

    #[test]
    fn test_trims_whitespace_and_crlf() {
        let addresses: Vec<u16> = collect("  12 \r\n34\r\n")
            .into_iter()
            .map(|a| a.unwrap().value())
            .collect();
        assert_eq!(addresses, vec![12, 34]);
    }

    #[test]
    fn test_skips_blank_lines() {
        let items = collect("\n1\n\n   \n2");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_malformed_reports_line_number() {
        let items = collect("1\n\nabc\n70000\n-1\n");

        assert!(items[0].is_ok());
        match &items[1] {
            Err(Error::MalformedAddress { line: 3, text }) => assert_eq!(text, "abc"),
            other => panic!("Expected MalformedAddress, got {:?}", other),
        }
        assert!(matches!(items[2], Err(Error::MalformedAddress { line: 4, .. })));
        assert!(matches!(items[3], Err(Error::MalformedAddress { line: 5, .. })));
    }

    #[test]
    fn test_skip_malformed() {
        let addresses: Vec<u16> = AddressReader::new("5\nnope\n6\n".as_bytes())
            .skip_malformed()
            .map(|a| a.unwrap().value())
            .collect();
        assert_eq!(addresses, vec![5, 6]);
    }

    #[test]
    fn test_open_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("addresses.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "16916").unwrap();
            writeln!(file, "62493").unwrap();
        }

        let addresses: Vec<u16> = AddressReader::open(&path)
            .unwrap()
            .map(|a| a.unwrap().value())
            .collect();
        assert_eq!(addresses, vec![16916, 62493]);
    }

    #[test]
    fn test_open_nonexistent_fails() {
        let dir = tempdir().unwrap();
        let result = AddressReader::open(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(Error::SourceUnavailable { .. })));
    }
}
