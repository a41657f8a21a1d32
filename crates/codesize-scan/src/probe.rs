//! Reading size and line count of a single file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use codesize_core::{CountError, ExtensionTotals};

/// Measure one file: its size in bytes and its number of lines.
///
/// `\n`, `\r\n` and a lone `\r` each end a line; a trailing line without
/// a terminator still counts. Content that is not valid UTF-8 fails with
/// [`CountError::Undecodable`].
pub fn probe_file(path: &Path) -> Result<ExtensionTotals, CountError> {
    let file = File::open(path).map_err(|e| CountError::io(path, e))?;
    let bytes = file.metadata().map_err(|e| CountError::io(path, e))?.len();
    let lines = count_lines(BufReader::new(file)).map_err(|e| CountError::io(path, e))?;

    Ok(ExtensionTotals::single_file(lines, bytes))
}

/// Count text lines, failing with `InvalidData` on non UTF-8 content.
fn count_lines<R: BufRead>(mut reader: R) -> io::Result<u64> {
    let mut chunk = Vec::new();
    let mut count = 0;

    // Chunks end at `\n` or EOF, so a `\r\n` pair never straddles two chunks.
    while reader.read_until(b'\n', &mut chunk)? > 0 {
        std::str::from_utf8(&chunk).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        count += line_ends(&chunk);
        if !matches!(chunk.last(), Some(b'\n' | b'\r')) {
            count += 1;
        }
        chunk.clear();
    }

    Ok(count)
}

/// Number of line terminators in `chunk`, counting `\r\n` once.
fn line_ends(chunk: &[u8]) -> u64 {
    let mut ends = 0;
    let mut bytes = chunk.iter().peekable();

    while let Some(&byte) = bytes.next() {
        match byte {
            b'\n' => ends += 1,
            b'\r' if bytes.peek() != Some(&&b'\n') => ends += 1,
            _ => {}
        }
    }

    ends
}
