mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "aurex",
    version,
    about = "Field extractor for USGS-style assessment unit report PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract AU fields from one or more report PDFs
    Extract {
        /// Paths to report PDFs
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Custom section table JSON (default: builtin "usgs" table)
        #[arg(short, long = "table", value_name = "FILE")]
        table: Option<PathBuf>,

        /// Output format: csv (default) or json
        #[arg(short, long, default_value = "csv")]
        output: String,

        /// Write output to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Show what was recovered from a single report, section by section
    Inspect {
        /// Path to report PDF
        file: PathBuf,

        /// Custom section table JSON (default: builtin "usgs" table)
        #[arg(short, long = "table", value_name = "FILE")]
        table: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Manage and inspect section tables
    Sections {
        #[command(subcommand)]
        action: SectionsAction,
    },
}

#[derive(Subcommand)]
enum SectionsAction {
    /// List predefined section tables
    List,
    /// Show the sections and output columns of a predefined table
    Show {
        /// Preset name (e.g., "usgs")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom section table file
    Validate {
        /// Path to JSON section table
        file: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            files,
            table,
            output,
            out,
        } => commands::extract::run(&files, table, &output, out),
        Commands::Inspect {
            file,
            table,
            output,
        } => commands::inspect::run(&file, table, &output),
        Commands::Sections { action } => match action {
            SectionsAction::List => commands::sections::list(),
            SectionsAction::Show { preset } => commands::sections::show(&preset),
            SectionsAction::Schema => commands::sections::schema(),
            SectionsAction::Validate { file } => commands::sections::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
