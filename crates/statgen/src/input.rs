use std::io::{BufRead, Write};

use tracing::{debug, warn};

const NAME_PROMPT: &str = "Enter player name: ";

/// Writes the name prompt without a trailing newline.
pub fn prompt<W: Write>(mut out: W) -> std::io::Result<()> {
    out.write_all(NAME_PROMPT.as_bytes())?;
    out.flush()
}

/// Reads one line as the player name.
///
/// The line is kept verbatim apart from its terminator (`\n` or `\r\n`).
/// Invalid UTF-8 is replaced rather than rejected. End of input, or a read
/// error, yields whatever was read before it, which may be empty.
pub fn read_name<R: BufRead>(mut reader: R) -> String {
    let mut buf = Vec::new();
    match reader.read_until(b'\n', &mut buf) {
        Ok(0) => debug!("End of input before a name was entered"),
        Ok(_) => {}
        Err(e) => warn!("Failed to read player name, using partial input: {}", e),
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}
