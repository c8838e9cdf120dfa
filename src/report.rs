// Console reporting for both scan modes.
//
// Reports are written to any `Write` sink so the exact output lines can be
// checked in tests. Each function returns the number of matches reported.

use std::fmt;
use std::io::{self, Write};

use crate::scan::{first_non_ascii, non_ascii, suspicious_matches};

pub const NO_NON_ASCII: &str = "No non-ASCII characters found.";
pub const NO_SUSPICIOUS: &str = "No suspicious characters found.";

// ---------------------------------------------------------------------------
// Byte literal rendering
// ---------------------------------------------------------------------------

/// Renders a byte slice as a `b'...'` (or `b"..."`) literal.
///
/// The literal is single-quoted unless the bytes contain `'` but no `"`, in
/// which case it is double-quoted. Only the chosen quote and `\\` are
/// backslash-escaped. Printable ASCII is shown as-is, `\t`, `\n` and `\r`
/// use their short escapes, and everything else is `\xNN` (lowercase hex).
pub struct ByteLiteral<'a>(pub &'a [u8]);

impl ByteLiteral<'_> {
    fn quote(&self) -> u8 {
        if self.0.contains(&b'\'') && !self.0.contains(&b'"') {
            b'"'
        } else {
            b'\''
        }
    }
}

impl fmt::Display for ByteLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quote = self.quote();
        write!(f, "b{}", quote as char)?;
        for &b in self.0 {
            match b {
                b'\t' => f.write_str("\\t")?,
                b'\n' => f.write_str("\\n")?,
                b'\r' => f.write_str("\\r")?,
                b'\\' => f.write_str("\\\\")?,
                _ if b == quote => write!(f, "\\{}", b as char)?,
                0x20..=0x7E => write!(f, "{}", b as char)?,
                _ => write!(f, "\\x{b:02x}")?,
            }
        }
        write!(f, "{}", quote as char)
    }
}

// ---------------------------------------------------------------------------
// Mode A
// ---------------------------------------------------------------------------

/// Report non-ASCII bytes in `buf`.
///
/// With `all == false` only the first offending byte is reported and the
/// scan stops there. With `all == true` every offending byte is reported.
pub fn report_non_ascii<W: Write>(out: &mut W, buf: &[u8], all: bool) -> io::Result<usize> {
    let mut count = 0usize;
    if all {
        for hit in non_ascii(buf) {
            write_non_ascii(out, hit.offset, hit.value, hit.context(buf))?;
            count += 1;
        }
    } else if let Some(hit) = first_non_ascii(buf) {
        write_non_ascii(out, hit.offset, hit.value, hit.context(buf))?;
        count = 1;
    }

    if count == 0 {
        writeln!(out, "{NO_NON_ASCII}")?;
    }
    Ok(count)
}

fn write_non_ascii<W: Write>(
    out: &mut W,
    offset: usize,
    value: u8,
    context: &[u8],
) -> io::Result<()> {
    log::trace!("non-ASCII byte {value:#04x} at {offset}");
    writeln!(out, "Non-ASCII character at byte {offset}: {value} ({value:#x})")?;
    writeln!(out, "Context: {}", ByteLiteral(context))
}

// ---------------------------------------------------------------------------
// Mode B
// ---------------------------------------------------------------------------

/// Report every suspicious punctuation pattern in `buf`, one line per match.
pub fn report_suspicious<W: Write>(out: &mut W, buf: &[u8]) -> io::Result<usize> {
    let mut count = 0usize;
    for m in suspicious_matches(buf) {
        log::trace!("{} ({} bytes) at {}", m.label(), m.pattern.width, m.offset);
        writeln!(out, "Found {} at byte {}", m.label(), m.offset)?;
        count += 1;
    }

    if count == 0 {
        writeln!(out, "{NO_SUSPICIOUS}")?;
    }
    Ok(count)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
