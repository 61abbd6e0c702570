/// Z85 command-line tool: encode binary data as Z85 text and back.
///
/// # Command overview
///
/// ```text
/// z85 <COMMAND> [OPTIONS]
///
/// Commands:
///   encode     Encode raw bytes as Z85 text
///   decode     Decode Z85 text into raw bytes
///   validate   Check that input is well-formed Z85 text
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Log codec activity to stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// Every command reads stdin when no file is given and writes stdout
/// unless `-o` is set, so the tool drops into a pipeline:
///
/// ```text
/// head -c 1024 /dev/urandom | z85 encode | z85 decode | sha256sum
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                      |
/// |------|----------------------------------------------|
/// | 0    | Success                                      |
/// | 1    | Error (I/O failure, invalid input, etc.)     |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_decode;
mod cmd_encode;
mod cmd_validate;
mod streams;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The Z85 command-line tool.
#[derive(Parser)]
#[command(name = "z85", version, about = "Z85 binary-to-text codec")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log codec activity (stream flushes, sink failures) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Encode raw bytes as Z85 text.
    Encode(EncodeArgs),
    /// Decode Z85 text into raw bytes.
    Decode(DecodeArgs),
    /// Check that input is well-formed Z85 text.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `z85 encode`.
///
/// Streams the input through `Z85Encoder`, so arbitrarily large inputs
/// are encoded in constant memory. No line wrapping and no trailing
/// newline are added: the output is exactly the Z85 text.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Input file (`-` or omitted: stdin).
    pub input: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `z85 decode`.
///
/// ```text
/// ┌──────────┬──────────────────────────────────────────────────────────┐
/// │ Flag     │ Effect                                                   │
/// ├──────────┼──────────────────────────────────────────────────────────┤
/// │ --strict │ Fail on the first non-alphabet byte (default: read it    │
/// │          │ as digit 0, matching the permissive library default)    │
/// │ -o FILE  │ Write decoded bytes to FILE instead of stdout            │
/// └──────────┴──────────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Input file (`-` or omitted: stdin).
    pub input: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Reject bytes outside the Z85 alphabet instead of decoding them as 0.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `z85 validate`.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Input file (`-` or omitted: stdin).
    pub input: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Encode(args) => cmd_encode::run(&args),
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install a stderr fmt subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
