use clap::{Parser, Subcommand, ValueEnum};

const LOCALPASS_LONG_VERSION: &str = concat!(
    "version: ", env!("CARGO_PKG_VERSION"), "\n",
    "git sha: ", env!("LOCALPASS_GIT_SHA"), "\n",
    "build time (UTC): ", env!("LOCALPASS_BUILD_TIME"), "\n",
    "target: ", env!("LOCALPASS_TARGET"), "\n",
    "features: ", env!("LOCALPASS_FEATURES")
);

#[derive(Parser)]
#[command(
    name = "localpass",
    version = env!("CARGO_PKG_VERSION"),
    long_version = LOCALPASS_LONG_VERSION,
    about = " 🔒 localpass: in-memory password manager"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive manager (entries live only for this session)
    Tui {
        /// How serials are assigned to new entries
        #[arg(long, value_enum)]
        serial_mode: Option<SerialModeArg>,
        /// Maximum number of mask characters shown for a hidden password
        #[arg(long)]
        mask_limit: Option<usize>,
    },
    /// Render seed data read-only as a table
    Show {
        /// Seed file override (JSON array of {id, platform, username, password})
        #[arg(long)]
        seed: Option<String>,
        /// Filter by platform or username substring (case-insensitive)
        #[arg(long)]
        query: Option<String>,
        /// Print passwords in plaintext instead of masked
        #[arg(long)]
        reveal: bool,
        /// Output JSON array (machine-readable)
        #[arg(long)]
        json: bool,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SerialModeArg {
    Monotonic,
    Length,
}
