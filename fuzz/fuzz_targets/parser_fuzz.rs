#![no_main]
use libfuzzer_sys::fuzz_target;

// Arguments are NUL-separated so the fuzzer can produce empty and
// whitespace-containing arguments as well as non-UTF-8 ones (on Unix).
fuzz_target!(|data: &[u8]| {
    let args: Vec<std::ffi::OsString> = data
        .split(|&b| b == 0)
        .take(16)
        .map(arg_from_bytes)
        .collect();
    bytescan::cli::fuzz_try_parse_args(&args);
});

#[cfg(unix)]
fn arg_from_bytes(raw: &[u8]) -> std::ffi::OsString {
    use std::os::unix::ffi::OsStrExt;
    std::ffi::OsStr::from_bytes(raw).to_os_string()
}

#[cfg(not(unix))]
fn arg_from_bytes(raw: &[u8]) -> std::ffi::OsString {
    String::from_utf8_lossy(raw).into_owned().into()
}
