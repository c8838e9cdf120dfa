use bytescan::scan::{
    CONTEXT_RADIUS, PatternTable, context_window, first_non_ascii, suspicious_matches,
};
use proptest::prelude::*;

/// Byte strategy biased towards the lead/continuation bytes of the patterns.
fn pattern_heavy_bytes() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        prop_oneof![
            any::<u8>(),
            Just(0xE2u8),
            Just(0x80u8),
            Just(0x94u8),
            Just(0xC2u8),
            Just(0xA0u8),
            Just(0x00u8),
        ],
        0..256,
    )
}

/// Reference check: does any table key occur at `i` as a 3- or 2-byte probe?
fn naive_hits(buf: &[u8]) -> Vec<(usize, u32)> {
    let table = PatternTable::suspicious();
    let mut out = Vec::new();
    for i in 0..buf.len() {
        if i + 2 < buf.len() {
            let key = (u32::from(buf[i]) << 16)
                | (u32::from(buf[i + 1]) << 8)
                | u32::from(buf[i + 2]);
            if table.lookup(key).is_some() {
                out.push((i, key));
            }
        }
        if i + 1 < buf.len() {
            let key = (u32::from(buf[i]) << 8) | u32::from(buf[i + 1]);
            if table.lookup(key).is_some() {
                out.push((i, key));
            }
        }
    }
    out
}

proptest! {
    #[test]
    fn prop_none_found_iff_all_ascii(buf in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(first_non_ascii(&buf).is_none(), buf.iter().all(|&b| b <= 127));
    }

    #[test]
    fn prop_reports_smallest_offset(buf in proptest::collection::vec(any::<u8>(), 1..512)) {
        if let Some(hit) = first_non_ascii(&buf) {
            prop_assert!(hit.value > 127);
            prop_assert_eq!(buf[hit.offset], hit.value);
            prop_assert!(buf[..hit.offset].iter().all(|&b| b <= 127));
        }
    }

    #[test]
    fn prop_context_bounds(len in 1usize..256, pick in any::<prop::sample::Index>()) {
        let buf: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let offset = pick.index(len);
        let ctx = context_window(&buf, offset);
        let start = offset.saturating_sub(CONTEXT_RADIUS);
        let end = (offset + CONTEXT_RADIUS).min(len);
        prop_assert_eq!(ctx, &buf[start..end]);
    }

    #[test]
    fn prop_suspicious_matches_reference(buf in pattern_heavy_bytes()) {
        let got: Vec<(usize, u32)> = suspicious_matches(&buf)
            .map(|m| (m.offset, m.pattern.key))
            .collect();
        prop_assert_eq!(got, naive_hits(&buf));
    }

    #[test]
    fn prop_suspicious_offsets_valid_and_sorted(buf in pattern_heavy_bytes()) {
        let offsets: Vec<usize> = suspicious_matches(&buf).map(|m| m.offset).collect();
        prop_assert!(offsets.iter().all(|&o| o < buf.len()));
        prop_assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_pattern_at_tail_is_found(
        prefix in proptest::collection::vec(0u8..0x80, 0..64),
        which in 0usize..8,
    ) {
        let pattern = &PatternTable::suspicious().entries()[which];
        let mut buf = prefix;
        buf.extend_from_slice(&pattern.bytes());
        let tail = buf.len() - pattern.width;
        prop_assert!(suspicious_matches(&buf).any(|m| m.offset == tail && m.pattern == pattern));
    }
}
