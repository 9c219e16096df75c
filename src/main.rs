//! Luogu Profile CLI
//!
//! Fetches public Luogu profile data and reshapes it into compact
//! problem-statistics summaries, written as one JSON file per user.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use luogu_profile::commands::{execute_batch, execute_fetch, validate_args, BatchArgs, FetchArgs};
use luogu_profile::handler::handle_request;
use luogu_profile::output::read_summary;
use luogu_profile::utils::config::DEFAULT_OUT_DIR;

/// Luogu Profile - profile summaries and problem statistics
#[derive(Parser, Debug)]
#[command(name = "luogu-profile")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch and summarize a single user
    Fetch {
        /// User id to fetch
        #[arg(short, long)]
        uid: u64,

        /// Use the mainland site (www.luogu.com.cn)
        #[arg(long)]
        cn: bool,

        /// Output path for the summary JSON (defaults to data/<uid>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Fetch every user listed in a uid-list file
    Batch {
        /// Path to the uid-list JSON file ({"uid_list": [...]})
        #[arg(short, long)]
        uids: PathBuf,

        /// Directory receiving one <uid>.json per user
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,

        /// Use the mainland site (www.luogu.com.cn)
        #[arg(long)]
        cn: bool,
    },

    /// Run the edge handler against a raw query string and print the response
    Respond {
        /// Raw query string, e.g. "uid=250374&cn=true"
        #[arg(short, long, default_value = "")]
        query: String,

        /// Request path
        #[arg(short, long, default_value = "/")]
        path: String,
    },

    /// Validate a written summary JSON file
    Validate {
        /// Path to summary JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Fetch {
            uid,
            cn,
            output,
            summary,
        } => {
            let args = FetchArgs {
                uid,
                cn,
                output,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute fetch
            execute_fetch(args)?;
        }

        Commands::Batch { uids, out_dir, cn } => {
            execute_batch(BatchArgs {
                uid_list: uids,
                out_dir,
                cn,
            })?;
        }

        Commands::Respond { query, path } => {
            print_handler_response(&path, &query);
        }

        Commands::Validate { file } => {
            validate_summary_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Run the edge handler and print its response HTTP-style
///
/// **Private** - internal command implementation
fn print_handler_response(path: &str, query: &str) {
    let response = handle_request(path, query);

    println!("Status: {}", response.status);
    println!("Content-Type: {}", response.content_type);
    if let Some(origin) = response.allow_origin {
        println!("Access-Control-Allow-Origin: {}", origin);
    }
    println!();
    println!("{}", response.body);
}

/// Validate a summary JSON file
///
/// **Private** - internal command implementation
fn validate_summary_file(file_path: PathBuf) -> Result<()> {
    println!("Validating summary: {}", file_path.display());

    let summary = read_summary(&file_path)?;

    println!("✓ Valid summary JSON");
    println!("  UID: {}", summary.info.uid);
    println!("  Name: {}", summary.info.name);
    println!("  Elo max: {}", summary.elo);
    println!(
        "  Passed problems: {}",
        summary
            .passed_problem
            .map_or("n/a".to_string(), |s| s.count.to_string())
    );
    println!(
        "  Submitted problems: {}",
        summary
            .submitted_problem
            .map_or("n/a".to_string(), |s| s.count.to_string())
    );

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Luogu Profile v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Profile summaries and problem statistics for Luogu users.");
}
