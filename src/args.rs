use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[command(
    display_name = "TMMR Processor",
    long_about = "Computes TMMR ratings and tier placements from raw match-history snapshots"
)]
pub struct Args {
    /// Path to the match-history snapshot: a JSON array of
    /// { playerId, matches: [...] } objects as exported by the
    /// match-history provider boundary.
    #[arg(short, long, env = "TMMR_SNAPSHOT", help = "Match-history snapshot file (JSON)")]
    pub input: PathBuf,

    /// Where to write the computed breakdowns. Omit to print to stdout.
    #[arg(short, long, help = "Output file for the computed breakdowns")]
    pub output: Option<PathBuf>,

    /// Rating formula revision. Retired revisions are rejected.
    #[arg(
        short,
        long,
        env = "TMMR_FORMULA_VERSION",
        default_value_t = 3,
        help = "Rating formula revision"
    )]
    pub formula_version: u8,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
