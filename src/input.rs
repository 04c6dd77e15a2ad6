//! Line-oriented input.
//!
//! Input is a count line followed by that many domain lines, twice: first the
//! forbidden domains, then the domains to check.
//!
//! ```text
//! 2
//! gdz.ru
//! gdz.com
//! 1
//! new.gdz.com
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use tracing::debug;

use crate::domain::{Domain, Validation};
use crate::error::{CheckerError, Result};

/// Upper bound on domains reserved up front from an untrusted count
const MAX_PREALLOC: usize = 1024;

/// Input reading options.
#[derive(Debug, Clone, Default)]
pub struct InputOptions {
    /// Validation applied to every domain line
    pub validation: Validation,
}

impl InputOptions {
    /// Create new input options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set domain validation policy.
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }
}

/// Forbidden domains and queries read from one input
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub forbidden: Vec<Domain>,
    pub queries: Vec<Domain>,
}

/// Reads counts and domains line by line, tracking 1-based line numbers.
pub struct DomainReader<R> {
    reader: R,
    line_num: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> DomainReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_num: 0,
            buf: Vec::new(),
        }
    }

    /// Number of lines consumed so far
    pub fn line_num(&self) -> usize {
        self.line_num
    }

    fn next_line(&mut self, expected: &str) -> Result<String> {
        self.buf.clear();
        self.line_num += 1;
        let read = self.reader.read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Err(CheckerError::UnexpectedEof {
                line: self.line_num,
                expected: expected.to_string(),
            });
        }
        let line = std::str::from_utf8(&self.buf).map_err(|e| CheckerError::ParseErrorAtLine {
            line: self.line_num,
            message: format!("Invalid UTF-8: {}", e),
        })?;
        Ok(line.trim().to_string())
    }

    /// Read a line holding a single non-negative count
    pub fn read_count(&mut self) -> Result<usize> {
        let line = self.next_line("a count line")?;
        line.parse()
            .map_err(|_| CheckerError::ParseErrorAtLine {
                line: self.line_num,
                message: format!("Invalid count: '{}'", line),
            })
    }

    /// Read `count` lines, one domain per line
    pub fn read_domains(&mut self, count: usize, validation: Validation) -> Result<Vec<Domain>> {
        let mut domains = Vec::with_capacity(count.min(MAX_PREALLOC));
        for remaining in (1..=count).rev() {
            let expected = format!("{} more domain line(s)", remaining);
            let line = self.next_line(&expected)?;
            let domain = Domain::parse_with(&line, validation).map_err(|e| {
                CheckerError::ParseErrorAtLine {
                    line: self.line_num,
                    message: e.to_string(),
                }
            })?;
            domains.push(domain);
        }
        Ok(domains)
    }

    /// Read a count line followed by that many domains
    pub fn read_list(&mut self, validation: Validation) -> Result<Vec<Domain>> {
        let count = self.read_count()?;
        let start = self.line_num + 1;
        let domains = self.read_domains(count, validation)?;
        debug!(count, start_line = start, "read domain list");
        Ok(domains)
    }
}

/// Read the forbidden list and the query list from a reader.
pub fn read_request<R: BufRead>(reader: R, options: &InputOptions) -> Result<Request> {
    let mut reader = DomainReader::new(reader);
    let forbidden = reader.read_list(options.validation)?;
    let queries = reader.read_list(options.validation)?;
    Ok(Request { forbidden, queries })
}

/// Read a request from text.
pub fn parse_request(text: &str, options: &InputOptions) -> Result<Request> {
    read_request(Cursor::new(text), options)
}

/// Read a request from a file.
pub fn read_request_from_file(path: impl AsRef<Path>, options: &InputOptions) -> Result<Request> {
    let file = File::open(path)?;
    read_request(BufReader::new(file), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(text: &str) -> DomainReader<Cursor<&[u8]>> {
        DomainReader::new(Cursor::new(text.as_bytes()))
    }

    #[test]
    fn test_read_domains() {
        let mut r = reader("gdz.ru\ngdz.com");
        let domains = r.read_domains(2, Validation::Strict).unwrap();
        let names: Vec<String> = domains.iter().map(Domain::name).collect();
        assert_eq!(names, vec!["gdz.ru", "gdz.com"]);
        assert_eq!(r.line_num(), 2);
    }

    #[test]
    fn test_read_count_trims() {
        let mut r = reader("  3 \r\n");
        assert_eq!(r.read_count().unwrap(), 3);
    }

    #[test]
    fn test_invalid_count_names_line() {
        let mut r = reader("1\ngdz.ru\nmany\n");
        r.read_list(Validation::Strict).unwrap();
        match r.read_count().unwrap_err() {
            CheckerError::ParseErrorAtLine { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("many"), "got: {}", message);
            }
            e => panic!("expected ParseErrorAtLine, got {e:?}"),
        }
    }

    #[test]
    fn test_negative_count_rejected() {
        let mut r = reader("-1\n");
        assert!(matches!(
            r.read_count(),
            Err(CheckerError::ParseErrorAtLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_missing_lines() {
        let mut r = reader("3\na.com\n");
        match r.read_list(Validation::Strict).unwrap_err() {
            CheckerError::UnexpectedEof { line, expected } => {
                assert_eq!(line, 3);
                assert!(expected.contains("2 more"), "got: {}", expected);
            }
            e => panic!("expected UnexpectedEof, got {e:?}"),
        }
    }

    #[test]
    fn test_malformed_domain_names_line() {
        let mut r = reader("2\ngdz.ru\n.gdz.com\n");
        let err = r.read_list(Validation::Strict).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_lenient_accepts_malformed_domain() {
        let mut r = reader("1\ngdz.com.\n");
        let domains = r.read_list(Validation::Lenient).unwrap();
        assert_eq!(domains[0].name(), "gdz.com.");
    }

    #[test]
    fn test_zero_count() {
        let request = parse_request("0\n0\n", &InputOptions::new()).unwrap();
        assert!(request.forbidden.is_empty());
        assert!(request.queries.is_empty());
    }

    #[test]
    fn test_huge_count_reports_missing_lines() {
        let mut r = reader("1000000000000000000\na.com\n");
        match r.read_list(Validation::Strict).unwrap_err() {
            CheckerError::UnexpectedEof { line, .. } => assert_eq!(line, 3),
            e => panic!("expected UnexpectedEof, got {e:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_names_line() {
        let input: &[u8] = b"2\ngdz.ru\n\xff\xfe\n0\n";
        let mut r = DomainReader::new(Cursor::new(input));
        match r.read_list(Validation::Strict).unwrap_err() {
            CheckerError::ParseErrorAtLine { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("UTF-8"), "got: {}", message);
            }
            e => panic!("expected ParseErrorAtLine, got {e:?}"),
        }
    }

    #[test]
    fn test_lenient_lines_are_trimmed() {
        let mut r = reader("1\n  gdz.com \r\n");
        let domains = r.read_list(Validation::Lenient).unwrap();
        assert_eq!(domains[0].name(), "gdz.com");
    }

    #[test]
    fn test_missing_file() {
        let err = read_request_from_file("/nonexistent/domains.txt", &InputOptions::new())
            .unwrap_err();
        match err {
            CheckerError::IoError(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            e => panic!("expected IoError, got {e:?}"),
        }
    }
}
