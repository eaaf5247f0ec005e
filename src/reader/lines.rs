//! Numbered line iteration over files and in-memory readers.

use crate::utils::config::READ_BUFFER_SIZE;
use crate::utils::error::ScanError;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// One line of input without its terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// 1-based physical line number, comments included
    pub number: usize,
    pub text: String,
}

/// Lazy iterator over the lines of a reader
///
/// Both `\n` and `\r\n` terminators are stripped. The first I/O failure
/// is yielded as [`ScanError::Read`] with the number of the line that
/// could not be read.
pub struct NumberedLines<R> {
    lines: io::Lines<R>,
    line_number: usize,
}

impl<R: BufRead> NumberedLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// Number of lines yielded so far
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for NumberedLines<R> {
    type Item = Result<RawLine, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.lines.next()?;
        self.line_number += 1;
        let number = self.line_number;

        Some(
            next.map(|text| RawLine { number, text })
                .map_err(|source| ScanError::Read { line: number, source }),
        )
    }
}

/// A results file on disk
///
/// Every call to [`InputFile::lines`] reopens the file, so a scan can be
/// restarted from the first line. The handle is closed when the returned
/// iterator is dropped, including on early returns after an error.
#[derive(Debug, Clone)]
pub struct InputFile {
    path: PathBuf,
}

impl InputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file and iterate its lines from the start
    ///
    /// # Errors
    /// * `ScanError::InputUnavailable` - the file cannot be opened for reading
    pub fn lines(&self) -> Result<NumberedLines<BufReader<File>>, ScanError> {
        debug!("Opening input: {}", self.path.display());

        let file = File::open(&self.path).map_err(|source| ScanError::InputUnavailable {
            path: self.path.clone(),
            source,
        })?;

        Ok(NumberedLines::new(BufReader::with_capacity(READ_BUFFER_SIZE, file)))
    }
}
