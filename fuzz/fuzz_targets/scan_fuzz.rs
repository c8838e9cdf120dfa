#![no_main]
use bytescan::report;
use bytescan::scan::{first_non_ascii, non_ascii, suspicious_matches};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Scans must never panic or report an offset outside the buffer.
    let first = first_non_ascii(data);
    assert_eq!(first, non_ascii(data).next());
    if let Some(hit) = first {
        assert!(hit.offset < data.len());
        assert!(hit.context(data).len() <= 20);
    }

    for m in suspicious_matches(data) {
        assert!(m.offset < data.len());
    }

    let _ = report::report_non_ascii(&mut std::io::sink(), data, true);
    let _ = report::report_suspicious(&mut std::io::sink(), data);
});
