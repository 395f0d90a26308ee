//! heseb CLI: numeral-system conversion.

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use heseb::catalog;
use heseb::codec::Options;
use heseb::dispatch::{self, Source};
use heseb::error::DispatchError;
use heseb::system::System;

#[derive(Parser)]
#[command(name = "heseb", version, about = "Numeral-system conversion engine")]
struct Cli {
    /// Digit-group separator for positional systems (e.g. ",").
    #[arg(long, global = true)]
    separator: Option<char>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode an integer into a numeral system.
    Encode {
        /// The integer to encode.
        value: i64,

        /// Target system identifier.
        #[arg(long, default_value = "arabic")]
        to: System,
    },

    /// Decode a numeral string into an integer.
    Decode {
        /// The numeral string.
        text: String,

        /// Source system identifier (auto-detected when omitted).
        #[arg(long)]
        from: Option<System>,
    },

    /// Convert a numeral string into another system.
    Convert {
        /// The numeral string.
        text: String,

        /// Target system identifier.
        #[arg(long)]
        to: System,

        /// Source system identifier (auto-detected when omitted).
        #[arg(long)]
        from: Option<System>,
    },

    /// Identify the numeral system of a string.
    Detect {
        /// The numeral string.
        text: String,
    },

    /// List all supported numeral systems.
    Catalog {
        /// Emit the catalog as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn source(from: Option<System>) -> Source {
    from.map_or(Source::Auto, Source::System)
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let opts = Options {
        separator: cli.separator,
    };

    match cli.command {
        Commands::Encode { value, to } => {
            println!("{}", dispatch::encode(value, to, &opts)?);
        }

        Commands::Decode { text, from } => {
            println!("{}", dispatch::decode(&text, source(from), &opts)?);
        }

        Commands::Convert { text, to, from } => {
            println!("{}", dispatch::transcode(&text, source(from), to, &opts)?);
        }

        Commands::Detect { text } => {
            let system = dispatch::detect(&text)
                .ok_or_else(|| DispatchError::DetectionFailed { text })?;
            println!("{system}");
        }

        Commands::Catalog { json } => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(catalog::all()).into_diagnostic()?
                );
            } else {
                for info in catalog::all() {
                    println!(
                        "{:<22} {:<28} {}",
                        info.system.identifier(),
                        info.name,
                        info.example
                    );
                }
            }
        }
    }

    Ok(())
}
