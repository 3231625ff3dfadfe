use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use pstq_points::config::{ColorMode, OutputFormat};
use pstq_points::input::{load_raw_input, InputSource};
use pstq_points::output;
use pstq_points::scoring::{self, CalculatorInput};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID_INPUT: i32 = 2;
const EXIT_INPUT_IO: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score an application file (YAML or JSON, `-` for stdin)
    Score {
        input: String,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Check an application file without scoring it
    Validate { input: String },
    /// Print the category ceilings and point tables
    Grid,
}

#[derive(Parser, Debug)]
#[command(name = "pstq-points")]
#[command(about = "Quebec skilled-worker (PSTQ) points calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/pstq-points/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn load_input(arg: &str) -> serde_json::Value {
    let source = InputSource::from_arg(arg);
    debug!(source = %source.describe(), "loading input");
    match load_raw_input(&source) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT_IO);
        }
    }
}

/// Decode the raw input or print every field error to stderr and exit.
fn decode_or_exit(raw: &serde_json::Value, color: ColorMode) -> CalculatorInput {
    match scoring::decode(raw) {
        Ok(input) => input,
        Err(failure) => {
            let use_colors = output::should_use_colors_on_stderr(color);
            let report = output::format_validation_failure(&failure, use_colors);
            eprintln!("{}", report);
            std::process::exit(EXIT_INVALID_INPUT);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    if let Err(e) = pstq_points::logging::init(cli.verbose) {
        eprintln!("Logging setup failed: {}", e);
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match pstq_points::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    match cli.command {
        Commands::Score {
            input,
            format,
            no_color,
        } => {
            let color = if no_color {
                ColorMode::Never
            } else {
                config.output.color
            };
            let use_colors = output::should_use_colors(color);
            let raw = load_input(&input);
            let calculator_input = decode_or_exit(&raw, color);
            let result = scoring::calculate_points(&calculator_input);

            info!(
                total = result.total_points,
                has_spouse = result.has_spouse,
                "scored application"
            );

            match format.unwrap_or(config.output.format) {
                OutputFormat::Text => {
                    println!("{}", output::format_result(&result, use_colors));
                }
                OutputFormat::Json => match output::format_json(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Output error: {:#}", e);
                        std::process::exit(EXIT_INPUT_IO);
                    }
                },
            }
        }
        Commands::Validate { input } => {
            let raw = load_input(&input);
            let calculator_input = decode_or_exit(&raw, config.output.color);
            let spouse = if calculator_input.has_spouse() {
                "with spouse"
            } else {
                "no spouse"
            };
            println!("valid ({})", spouse);
        }
        Commands::Grid => {
            let use_colors = output::should_use_colors(config.output.color);
            println!("{}", output::format_grid(use_colors));
        }
    }

    debug!(elapsed = ?start_time.elapsed(), "done");
    std::process::exit(EXIT_SUCCESS);
}
