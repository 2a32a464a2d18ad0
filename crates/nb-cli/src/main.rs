/// Command-line tool for Notion block JSON: inspect, validate, normalize,
/// and summarize block lists saved from the API.
///
/// # Command overview
///
/// ```text
/// nb <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print one summary line per block
///   validate   Check that every block decodes
///   normalize  Decode and re-encode blocks in canonical form
///   stats      Print block counts per type
///   help       Print help information
///
/// Global options:
///   -v, --verbose         Log decoder activity to stderr
///   --unknown <POLICY>    preserve (default) | skip | reject
///   -h, --help            Print help
///   -V, --version         Print version
/// ```
///
/// Input files may hold one block object, an array of blocks, or a list
/// response (`{"object":"list","results":[...]}`).
///
/// # Exit codes
///
/// | Code | Meaning                                  |
/// |------|------------------------------------------|
/// | 0    | Success                                  |
/// | 1    | Error (I/O failure, invalid blocks, etc.) |
///
/// Logs and error details go to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use nb_decoder::{DecoderConfig, UnknownBlockPolicy};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cmd_inspect;
mod cmd_normalize;
mod cmd_stats;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "nb", version, about = "Notion block JSON tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decoder and encoder activity (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// What to do with block types this tool does not know.
    #[arg(long, global = true, value_enum, default_value_t = UnknownArg::Preserve)]
    unknown: UnknownArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnknownArg {
    Preserve,
    Skip,
    Reject,
}

impl From<UnknownArg> for UnknownBlockPolicy {
    fn from(arg: UnknownArg) -> Self {
        match arg {
            UnknownArg::Preserve => Self::Preserve,
            UnknownArg::Skip => Self::Skip,
            UnknownArg::Reject => Self::Reject,
        }
    }
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print a one-line summary of each block.
    Inspect(InspectArgs),
    /// Check that every block in a file decodes.
    Validate(ValidateArgs),
    /// Decode blocks and write them back out in canonical form.
    Normalize(NormalizeArgs),
    /// Print block counts per type.
    Stats(StatsArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `nb inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the JSON file to inspect.
    pub file: PathBuf,

    /// Inspect only the block at this zero-based index, counted after
    /// unknown blocks dropped by `--unknown skip`.
    #[arg(long)]
    pub block: Option<usize>,
}

/// Arguments for `nb validate`.
///
/// Decodes the whole file and reports either success checkmarks or the
/// first failing block. Exits with code 1 on failure.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the JSON file to validate.
    pub file: PathBuf,
}

/// Arguments for `nb normalize`.
///
/// ```text
/// ┌────────────────────┬────────────────────────────────────────────────┐
/// │ Flag               │ Effect                                         │
/// ├────────────────────┼────────────────────────────────────────────────┤
/// │ -o / --output      │ write to file instead of stdout                │
/// │ --compact          │ single-line JSON instead of pretty-printed     │
/// │ --request          │ emit an append body `{"children":[...]}`       │
/// │ --max-children N   │ per-array limit checked with --request (100)   │
/// └────────────────────┴────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct NormalizeArgs {
    /// Path to the JSON file to normalize.
    pub file: PathBuf,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact JSON.
    #[arg(long)]
    pub compact: bool,

    /// Drop block envelopes and emit an append-children request body.
    #[arg(long)]
    pub request: bool,

    /// Maximum blocks per children array when building a request.
    #[arg(long, default_value_t = nb_encoder::config::DEFAULT_MAX_CHILDREN)]
    pub max_children: usize,
}

/// Arguments for `nb stats`.
#[derive(clap::Args)]
pub struct StatsArgs {
    /// Path to the JSON file to analyse.
    pub file: PathBuf,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = DecoderConfig::default().with_unknown_blocks(cli.unknown.into());

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args, &config),
        Commands::Validate(args) => cmd_validate::run(&args, &config),
        Commands::Normalize(args) => cmd_normalize::run(&args, &config),
        Commands::Stats(args) => cmd_stats::run(&args, &config),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn block_help_mentions_skipped_blocks() {
        let cli = Cli::command();
        let inspect = cli.find_subcommand("inspect").unwrap();
        let block = inspect
            .get_arguments()
            .find(|arg| arg.get_id() == "block")
            .unwrap();
        let help = block.get_help().unwrap().to_string();
        assert!(help.contains("--unknown skip"), "{help}");
    }

    #[test]
    fn unknown_flag_maps_to_policy() {
        let cli = Cli::try_parse_from(["nb", "--unknown", "skip", "inspect", "page.json"]).unwrap();
        assert_eq!(UnknownBlockPolicy::from(cli.unknown), UnknownBlockPolicy::Skip);
    }
}
