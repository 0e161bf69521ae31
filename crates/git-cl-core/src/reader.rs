//! Subject line source.

use std::io::{self, BufRead, BufReader, Read};

use tracing::{debug, error};

/// Reads every line from `reader` until end of stream.
///
/// Lines keep their trailing `\n` when the source has one. Bytes that are not
/// valid UTF-8 are replaced with `U+FFFD`. The reader is only borrowed for
/// reading; closing it is left to the caller.
///
/// # Errors
///
/// Returns the first read error other than end of stream. Lines read before
/// the error are discarded.
pub fn read_lines<R: Read>(reader: R) -> io::Result<Vec<String>> {
    let mut reader = BufReader::new(reader);
    let mut lines = Vec::new();

    loop {
        let mut buf = Vec::new();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => lines.push(String::from_utf8_lossy(&buf).into_owned()),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => {
                error!(%err, "read line error");
                return Err(err);
            }
        }
    }

    debug!(count = lines.len(), "read subject lines");
    Ok(lines)
}

/// Strips one trailing `\n` and then one trailing `\r` from `line`.
pub(crate) fn trim_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
