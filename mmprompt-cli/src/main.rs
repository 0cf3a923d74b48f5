//! mmprompt — multimodal prompt assembly CLI.
//!
//! # Usage
//!
//! ```text
//! mmprompt render [--template <text> | --template-file <path>] [--check]
//!                 [--images TOTAL[:IN]] [--audio TOTAL[:IN]] [--video TOTAL[:IN]]
//!                 [--text <text>] [--config <path>]
//! mmprompt to-wav <src> <dst> [--config <path>]
//! mmprompt convert <src> --format <opus|mp3|aac|flac|wav> [--config <path>]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    audio::{ConvertArgs, ToWavArgs},
    render::RenderArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "mmprompt",
    version,
    about = "Assemble multimodal prompt fragments and normalise audio inputs",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a prompt fragment from media counts and message text.
    Render(RenderArgs),

    /// Convert an audio file to 16-bit mono 16 kHz wav.
    ToWav(ToWavArgs),

    /// Convert a wav file to another output format.
    Convert(ConvertArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => args.run(),
        Commands::ToWav(args) => args.run(),
        Commands::Convert(args) => args.run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
