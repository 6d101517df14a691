//! CLI for rngprobe: guess the PRNG family behind a symbol stream.

mod commands;

use clap::{Parser, Subcommand};
use commands::EncodingArg;

#[derive(Parser)]
#[command(name = "rngprobe")]
#[command(about = "rngprobe: guess the PRNG family behind a symbol stream")]
#[command(version = rngprobe_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a symbol sequence: LCG, MT19937 or unknown, with evidence.
    /// Symbols come from --json, --file, or the positional arguments.
    Classify {
        /// Symbols (integers or tokens); commas and whitespace separate them
        symbols: Vec<String>,

        /// Read symbols from a file ("-" for stdin)
        #[arg(long, conflicts_with_all = ["symbols", "json"])]
        file: Option<String>,

        /// Symbols as a JSON array, e.g. '["Hearts", "Spades", 3]'
        #[arg(long, conflicts_with = "symbols")]
        json: Option<String>,

        /// Symbol encoding
        #[arg(long, value_enum, default_value_t = EncodingArg::FirstOccurrence)]
        encoding: EncodingArg,

        /// Output format
        #[arg(long, default_value = "summary", value_parser = ["summary", "json"])]
        format: String,

        /// Write the verdict as JSON to this path
        #[arg(long)]
        output: Option<String>,

        /// Classifier config JSON (ratio_decimals, outlier_sigma)
        #[arg(long)]
        config: Option<String>,

        /// Decimal digits kept when comparing successive ratios
        #[arg(long)]
        ratio_decimals: Option<u32>,

        /// Spectral outlier threshold in standard deviations above mean power
        #[arg(long)]
        outlier_sigma: Option<f64>,
    },

    /// Start the HTTP classification server
    Server {
        /// Port to listen on
        #[arg(long, default_value = "8042")]
        port: u16,

        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Reject requests with fewer symbols than this
        #[arg(long, default_value = "5")]
        min_symbols: usize,

        /// Classifier config JSON (ratio_decimals, outlier_sigma)
        #[arg(long)]
        config: Option<String>,

        /// Decimal digits kept when comparing successive ratios
        #[arg(long)]
        ratio_decimals: Option<u32>,

        /// Spectral outlier threshold in standard deviations above mean power
        #[arg(long)]
        outlier_sigma: Option<f64>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            symbols,
            file,
            json,
            encoding,
            format,
            output,
            config,
            ratio_decimals,
            outlier_sigma,
        } => commands::classify::run(commands::classify::ClassifyCommandConfig {
            symbols: &symbols,
            file: file.as_deref(),
            json: json.as_deref(),
            encoding: encoding.into(),
            format: &format,
            output_path: output.as_deref(),
            config_path: config.as_deref(),
            ratio_decimals,
            outlier_sigma,
        }),
        Commands::Server {
            port,
            host,
            min_symbols,
            config,
            ratio_decimals,
            outlier_sigma,
        } => commands::server::run(
            &host,
            port,
            min_symbols,
            config.as_deref(),
            ratio_decimals,
            outlier_sigma,
        ),
    }
}
