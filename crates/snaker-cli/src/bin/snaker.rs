use clap::{Args, Parser, Subcommand};

use snaker_cli::commands::convert_ops::Direction;
use snaker_cli::commands::{config_ops, convert_ops};
use snaker_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "snaker", about = "Convert identifiers between CamelCase and snake_case")]
struct Cli {
    /// Log conversion details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert CamelCase identifiers to snake_case
    CamelToSnake(ConvertArgs),
    /// Convert snake_case identifiers to CamelCase
    SnakeToCamel {
        /// Keep the first word lower-case (camelCase)
        #[arg(long)]
        lower: bool,
        #[command(flatten)]
        args: ConvertArgs,
    },
    /// Export the built-in initialisms as TOML
    InitialismsExport,
    /// Validate a custom initialisms TOML file
    InitialismsValidate {
        /// Path to the TOML file
        file: String,
    },
}

#[derive(Args)]
struct ConvertArgs {
    /// Identifiers to convert (default: one per line from stdin)
    words: Vec<String>,
    /// TOML file with custom initialisms
    #[arg(long)]
    config: Option<String>,
    /// Print one JSON object per line
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::CamelToSnake(args) => convert_ops::convert_cmd(
            Direction::CamelToSnake,
            args.words,
            args.config.as_deref(),
            args.json,
        ),
        Command::SnakeToCamel { lower, args } => {
            let direction = if lower {
                Direction::SnakeToCamelLower
            } else {
                Direction::SnakeToCamel
            };
            convert_ops::convert_cmd(direction, args.words, args.config.as_deref(), args.json)
        }
        Command::InitialismsExport => config_ops::initialisms_export(),
        Command::InitialismsValidate { file } => config_ops::initialisms_validate(&file),
    }
}
