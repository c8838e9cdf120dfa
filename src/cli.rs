// Command-line front end for the `scan-ascii` and `scan-suspicious` binaries.
//
// Both commands share one option set. A missing filename prints a usage line
// and does nothing; an unreadable file prints `Error: ...` to stdout. Neither
// case changes the exit status.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, ValueHint};

use crate::io::{ScanError, ScanSummary, check_ascii_file, check_suspicious_file};

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
struct CommonArgs {
    /// File to scan (read as raw bytes).
    #[arg(value_hint = ValueHint::FilePath)]
    filename: Option<PathBuf>,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Print a JSON summary to stderr after the report.
    #[arg(long = "json")]
    json_output: bool,
}

/// Report the first non-ASCII byte in a file.
#[derive(Parser, Debug)]
#[command(name = "scan-ascii", version, about = "Find non-ASCII bytes in a file")]
struct AsciiCli {
    #[command(flatten)]
    common: CommonArgs,

    /// Report every non-ASCII byte instead of stopping at the first.
    #[arg(long)]
    all: bool,
}

/// Report suspicious UTF-8 punctuation in a file.
#[derive(Parser, Debug)]
#[command(
    name = "scan-suspicious",
    version,
    about = "Find smart quotes, dashes and invisible spaces in a file"
)]
struct SuspiciousCli {
    #[command(flatten)]
    common: CommonArgs,
}

// ---------------------------------------------------------------------------
// Resolved command + options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ascii,
    Suspicious,
}

impl Command {
    fn name(self) -> &'static str {
        match self {
            Self::Ascii => "scan-ascii",
            Self::Suspicious => "scan-suspicious",
        }
    }
}

#[derive(Debug)]
struct Options {
    command: Command,
    input_file: Option<PathBuf>,
    verbose: u8,
    json_output: bool,
    report_all: bool,
}

fn resolve_common(command: Command, common: CommonArgs, report_all: bool) -> Options {
    Options {
        command,
        input_file: common.filename,
        verbose: common.verbose.min(2),
        json_output: common.json_output,
        report_all,
    }
}

fn parse_from<I, T>(command: Command, argv: I) -> Result<Options, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match command {
        Command::Ascii => {
            let cli = AsciiCli::try_parse_from(argv)?;
            Ok(resolve_common(command, cli.common, cli.all))
        }
        Command::Suspicious => {
            let cli = SuspiciousCli::try_parse_from(argv)?;
            Ok(resolve_common(command, cli.common, false))
        }
    }
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args<S: AsRef<std::ffi::OsStr>>(args: &[S]) {
    for command in [Command::Ascii, Command::Suspicious] {
        let argv = std::iter::once(std::ffi::OsStr::new(command.name()))
            .chain(args.iter().map(AsRef::as_ref));
        if let Ok(opts) = parse_from(command, argv) {
            debug_assert!(opts.verbose <= 2);
            debug_assert!(!opts.report_all || command == Command::Ascii);
        }
    }
}

// ---------------------------------------------------------------------------
// Scan command
// ---------------------------------------------------------------------------

fn cmd_scan<W: Write>(opts: &Options, out: &mut W) -> i32 {
    let Some(path) = &opts.input_file else {
        let _ = writeln!(out, "Usage: {} <filename>", opts.command.name());
        return 0;
    };

    let result: Result<ScanSummary, ScanError> = match opts.command {
        Command::Ascii => check_ascii_file(path, out, opts.report_all),
        Command::Suspicious => check_suspicious_file(path, out),
    };

    match result {
        Ok(summary) => {
            log::info!(
                "{}: scanned {} bytes, {} match(es)",
                path.display(),
                summary.bytes_scanned,
                summary.matches
            );
            if opts.json_output {
                let json = serde_json::json!({
                    "command": opts.command.name(),
                    "file": path.display().to_string(),
                    "bytes_scanned": summary.bytes_scanned,
                    "matches": summary.matches,
                });
                match serde_json::to_string_pretty(&json) {
                    Ok(text) => eprintln!("{text}"),
                    Err(e) => log::warn!("failed to serialize summary: {e}"),
                }
            }
        }
        Err(e) => {
            let _ = writeln!(out, "Error: {e}");
            let _ = out.flush();
        }
    }

    0
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// CLI entry point for both binaries. Parses arguments via clap, runs the
/// scan for `command`, exits.
pub fn run(command: Command) -> ! {
    let opts = match parse_from(command, std::env::args_os()) {
        Ok(opts) => opts,
        Err(e) => e.exit(),
    };
    init_logging(opts.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let exit_code = cmd_scan(&opts, &mut out);
    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
