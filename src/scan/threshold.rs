// Threshold scan: locate bytes outside the 7-bit ASCII range.
//
// The scan is a single forward pass. `non_ascii()` is lazy, so callers that
// only need the first offending byte stop as soon as it is found.

/// Highest byte value still considered ASCII.
pub const ASCII_MAX: u8 = 0x7F;

/// Number of bytes shown on each side of a match in a context window.
pub const CONTEXT_RADIUS: usize = 10;

/// A byte above [`ASCII_MAX`] found in a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonAscii {
    /// Zero-based byte offset into the scanned buffer.
    pub offset: usize,
    /// The raw byte value (always > 127).
    pub value: u8,
}

impl NonAscii {
    /// Context window around this byte within `buf`.
    pub fn context<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        context_window(buf, self.offset)
    }
}

/// Iterate over every non-ASCII byte in `buf`, in ascending offset order.
///
/// The iterator is stateless with respect to `buf`: calling this again
/// restarts the scan from offset 0.
pub fn non_ascii(buf: &[u8]) -> impl Iterator<Item = NonAscii> + '_ {
    buf.iter()
        .enumerate()
        .filter(|&(_, &value)| value > ASCII_MAX)
        .map(|(offset, &value)| NonAscii { offset, value })
}

/// Return the first (lowest-offset) non-ASCII byte in `buf`, if any.
#[inline]
pub fn first_non_ascii(buf: &[u8]) -> Option<NonAscii> {
    non_ascii(buf).next()
}

/// Slice of `buf` covering `[offset - 10, offset + 10)`, clamped to the
/// buffer bounds.
///
/// The upper bound is exclusive, so the window holds at most 20 bytes: ten
/// before the offset, the byte itself, and nine after.
pub fn context_window(buf: &[u8], offset: usize) -> &[u8] {
    let start = offset.saturating_sub(CONTEXT_RADIUS).min(buf.len());
    let end = offset.saturating_add(CONTEXT_RADIUS).min(buf.len());
    &buf[start..end]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
