//! gradebook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "gradebook",
    version,
    about = "Grade calculator and student record editor"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a final grade from lab, prelim, and attendance scores
    Grade {
        /// Lab work scores, comma-separated (e.g. "69,5,52")
        #[arg(long, allow_hyphen_values = true)]
        labs: String,

        /// Prelim exam score (0-100)
        #[arg(long, allow_hyphen_values = true)]
        prelim: String,

        /// Attendance grade
        #[arg(long, allow_hyphen_values = true)]
        attendance: String,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Compute the prelim exam score required to pass and to reach excellent
    Required {
        /// Attendance score (non-negative)
        #[arg(long, allow_hyphen_values = true)]
        attendance: String,

        /// Lab Work 1 grade (0-100)
        #[arg(long, allow_hyphen_values = true)]
        lab1: String,

        /// Lab Work 2 grade (0-100)
        #[arg(long, allow_hyphen_values = true)]
        lab2: String,

        /// Lab Work 3 grade (0-100)
        #[arg(long, allow_hyphen_values = true)]
        lab3: String,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show every student with final grade and pass/fail status
    Roster {
        /// Dataset CSV file (defaults to the built-in mock dataset)
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,

        /// Write a JSON report to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Add a student with zeroed scores to a dataset file
    Add {
        /// Dataset CSV file to edit
        #[arg(long)]
        dataset: PathBuf,

        /// Student ID
        #[arg(long)]
        id: String,

        /// First name
        #[arg(long)]
        first_name: String,

        /// Last name
        #[arg(long)]
        last_name: String,
    },

    /// Delete a student from a dataset file
    Delete {
        /// Dataset CSV file to edit
        #[arg(long)]
        dataset: PathBuf,

        /// Student ID
        #[arg(long)]
        id: String,
    },

    /// Replace a student's scores in a dataset file
    Update {
        /// Dataset CSV file to edit
        #[arg(long)]
        dataset: PathBuf,

        /// Student ID
        #[arg(long)]
        id: String,

        /// Lab work scores, comma-separated
        #[arg(long, allow_hyphen_values = true)]
        labs: String,

        /// Prelim exam score
        #[arg(long, allow_hyphen_values = true)]
        prelim: String,

        /// Attendance grade
        #[arg(long, allow_hyphen_values = true)]
        attendance: String,
    },

    /// Validate a dataset file
    Validate {
        /// Dataset CSV file
        #[arg(long)]
        dataset: PathBuf,
    },

    /// Create starter config and dataset
    Init,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Grade {
            labs,
            prelim,
            attendance,
            format,
        } => commands::grade::execute(config, labs, prelim, attendance, format),
        Commands::Required {
            attendance,
            lab1,
            lab2,
            lab3,
            format,
        } => commands::required::execute(config, attendance, [lab1, lab2, lab3], format),
        Commands::Roster {
            dataset,
            format,
            output,
        } => commands::roster::show(config, dataset, format, output),
        Commands::Add {
            dataset,
            id,
            first_name,
            last_name,
        } => commands::roster::add(dataset, id, first_name, last_name),
        Commands::Delete { dataset, id } => commands::roster::delete(dataset, id),
        Commands::Update {
            dataset,
            id,
            labs,
            prelim,
            attendance,
        } => commands::roster::update(config, dataset, id, labs, prelim, attendance),
        Commands::Validate { dataset } => commands::validate::execute(dataset),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
