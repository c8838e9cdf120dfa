//! `scan-suspicious <filename>`: list smart quotes, dashes and invisible
//! spaces by byte offset.

use bytescan::cli::{self, Command};

fn main() {
    cli::run(Command::Suspicious)
}
