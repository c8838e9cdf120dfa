//! `scan-ascii <filename>`: print the first byte above 0x7F and its context.

use bytescan::cli::{self, Command};

fn main() {
    cli::run(Command::Ascii)
}
