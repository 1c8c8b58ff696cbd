//! qore Command-Line Interface
//!
//! Compiles JSON quantum circuit descriptions into `.qore` instruction
//! streams and inspects existing streams.
//!
//! ```text
//! qore encode -i bell.json            # bell.qore
//! qore encode -i bell.json --text     # bell.qore.txt
//! qore decode -i bell.qore -f json
//! qore gates
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::decode::DecodeFormat;
use commands::{decode, encode, gates, version};
use config::Config;

/// qore - compile quantum circuits into versioned binary instruction streams
#[derive(Parser)]
#[command(name = "qore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ~/.qore/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON circuit into a .qore stream
    Encode {
        /// Input file (JSON circuit document)
        #[arg(short, long)]
        input: String,

        /// Output file (default: input with .qore or .qore.txt extension)
        #[arg(short, long)]
        output: Option<String>,

        /// Write the human-readable text listing instead of binary
        #[arg(long)]
        text: bool,

        /// Write binary output even when configured for text
        #[arg(long, conflicts_with = "text")]
        binary: bool,

        /// Omit the checksum trailer
        #[arg(long)]
        no_checksum: bool,
    },

    /// Decode a .qore stream and print it
    Decode {
        /// Input file (.qore binary)
        #[arg(short, long)]
        input: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = DecodeFormat::Summary)]
        format: DecodeFormat,
    },

    /// List supported gates and their opcodes
    Gates,

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose, config.log_level.as_deref());
    tracing::debug!(?config, "loaded configuration");

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            text,
            binary,
            no_checksum,
        } => {
            let settings = encode::Settings {
                text: !binary && (text || config.encode.is_text()),
                checksum: !no_checksum && config.encode.checksum,
            };
            encode::execute(&input, output.as_deref(), settings)
        }

        Commands::Decode { input, format } => decode::execute(&input, format),

        Commands::Gates => {
            gates::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// `-v` wins, then `RUST_LOG`, then the configured level, then `warn`.
fn init_tracing(verbose: u8, configured: Option<&str>) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or("warn"))),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
