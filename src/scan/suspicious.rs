// Multi-byte pattern scan.
//
// Every offset is probed twice: once with the three bytes starting there and
// once with the two bytes starting there. Both probes may hit at the same
// offset and both hits are reported, 3-byte probe first. Nothing is
// deduplicated and the scan never short-circuits.

use super::patterns::{Pattern, PatternTable, be_key};
use super::threshold::context_window;

/// A pattern occurrence in a scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Zero-based offset of the first byte of the probe that hit.
    pub offset: usize,
    /// The pattern whose key matched.
    pub pattern: &'static Pattern,
}

impl Match {
    #[inline]
    pub fn label(&self) -> &'static str {
        self.pattern.label
    }

    /// Context window around this match within `buf`.
    pub fn context<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        context_window(buf, self.offset)
    }
}

/// Widths probed at each offset, in reporting order.
const PROBE_WIDTHS: [usize; 2] = [3, 2];

impl PatternTable {
    /// Lazily scan `buf` for every occurrence of a key in this table.
    ///
    /// Matches come out in ascending offset order. A probe is only taken
    /// when all of its bytes lie inside `buf`, so patterns ending on the
    /// final byte are found and nothing past the end is read.
    pub fn scan(self, buf: &[u8]) -> impl Iterator<Item = Match> + '_ {
        (0..buf.len()).flat_map(move |offset| {
            PROBE_WIDTHS.into_iter().filter_map(move |width| {
                let probe = buf.get(offset..offset + width)?;
                let pattern = self.lookup(be_key(probe))?;
                Some(Match { offset, pattern })
            })
        })
    }
}

/// Scan `buf` with the built-in suspicious-punctuation table.
pub fn suspicious_matches(buf: &[u8]) -> impl Iterator<Item = Match> + '_ {
    PatternTable::suspicious().scan(buf)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
