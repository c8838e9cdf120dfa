// Raw-byte scanners.
//
// Both scanners operate on an in-memory byte slice and never decode text.
//
// # Modules
//
// - `threshold`  — Bytes above the ASCII range (first match or all matches)
// - `patterns`   — Static table of suspicious UTF-8 punctuation byte sequences
// - `suspicious` — Exhaustive multi-byte pattern scan over a buffer

pub mod patterns;
pub mod suspicious;
pub mod threshold;

// Re-export key types for convenience.
pub use patterns::{Pattern, PatternTable, SUSPICIOUS_PATTERNS};
pub use suspicious::{Match, suspicious_matches};
pub use threshold::{CONTEXT_RADIUS, NonAscii, context_window, first_non_ascii, non_ascii};
