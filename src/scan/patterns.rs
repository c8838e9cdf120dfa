// Suspicious UTF-8 punctuation patterns.
//
// Each pattern is the UTF-8 encoding of a single character, stored as one
// integer key formed by concatenating its bytes big-endian (e.g. the em dash
// E2 80 94 is key 0xE28094). Lookups are by key only; the byte width is kept
// for display and for callers that want to highlight the matched span.

/// A byte sequence of interest and its human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    /// Big-endian concatenation of the pattern bytes.
    pub key: u32,
    /// Number of bytes in the encoded sequence (2 or 3).
    pub width: usize,
    /// Label printed when the pattern is found.
    pub label: &'static str,
}

impl Pattern {
    const fn new(key: u32, width: usize, label: &'static str) -> Self {
        Self { key, width, label }
    }

    /// The raw bytes this pattern matches.
    pub fn bytes(&self) -> Vec<u8> {
        let be = self.key.to_be_bytes();
        be[be.len() - self.width..].to_vec()
    }
}

/// UTF-8 encodings of smart quotes, dashes, and invisible spaces that tend to
/// sneak into source files through copy and paste.
pub static SUSPICIOUS_PATTERNS: [Pattern; 8] = [
    Pattern::new(0xE2_80_9C, 3, "Left Double Quote"),
    Pattern::new(0xE2_80_9D, 3, "Right Double Quote"),
    Pattern::new(0xE2_80_98, 3, "Left Single Quote"),
    Pattern::new(0xE2_80_99, 3, "Right Single Quote"),
    Pattern::new(0xE2_80_8B, 3, "Zero Width Space"),
    Pattern::new(0xC2_A0, 2, "Non-breaking Space"),
    Pattern::new(0xE2_80_93, 3, "En Dash"),
    Pattern::new(0xE2_80_94, 3, "Em Dash"),
];

/// Read-only key to label mapping.
#[derive(Debug, Clone, Copy)]
pub struct PatternTable {
    entries: &'static [Pattern],
}

impl PatternTable {
    /// Build a table over a static slice of patterns.
    pub const fn new(entries: &'static [Pattern]) -> Self {
        Self { entries }
    }

    /// The built-in suspicious-punctuation table.
    pub const fn suspicious() -> Self {
        Self::new(&SUSPICIOUS_PATTERNS)
    }

    /// Look up a pattern by its big-endian key.
    #[inline]
    pub fn lookup(&self, key: u32) -> Option<&'static Pattern> {
        self.entries.iter().find(|p| p.key == key)
    }

    pub fn entries(&self) -> &'static [Pattern] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::suspicious()
    }
}

/// Concatenate up to four bytes big-endian into a key.
///
/// `[0xE2, 0x80, 0x94]` becomes `0xE28094`.
#[inline]
pub fn be_key(bytes: &[u8]) -> u32 {
    debug_assert!(bytes.len() <= 4);
    bytes.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
