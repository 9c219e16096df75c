//! Fetch command implementation.
//!
//! The fetch command:
//! 1. Fetches the profile payload for one uid
//! 2. Reshapes it into a summary
//! 3. Writes the summary JSON file
//! 4. Optionally prints a text digest

use crate::client::ProfileClient;
use crate::output::write_summary;
use crate::summary::{reshape, UserSummary};
use crate::utils::config::{self, DEFAULT_OUT_DIR};
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the fetch command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct FetchArgs {
    /// User id to fetch
    pub uid: u64,

    /// Use the mainland base URL
    pub cn: bool,

    /// Output path; `None` means `data/<uid>.json`
    pub output: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for FetchArgs {
    fn default() -> Self {
        Self {
            uid: 0,
            cn: false,
            output: None,
            print_summary: false,
        }
    }
}

impl FetchArgs {
    /// Resolved output path for this uid
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}/{}.json", DEFAULT_OUT_DIR, self.uid)))
    }
}

/// Validate fetch arguments
///
/// **Public** - can be called before execute_fetch for early validation
pub fn validate_args(args: &FetchArgs) -> Result<()> {
    if args.uid == 0 {
        anyhow::bail!("uid must be a positive user id");
    }

    if let Some(output) = &args.output {
        if output.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
    }

    Ok(())
}

/// Execute the fetch command
///
/// **Public** - main entry point called from main.rs
pub fn execute_fetch(args: FetchArgs) -> Result<()> {
    let start_time = Instant::now();
    let base_url = config::base_url(args.cn);

    info!("Starting fetch for user: {}", args.uid);
    info!("Base URL: {}", base_url);

    // Step 1: Fetch payload
    info!("Step 1/3: Fetching profile payload...");
    let client = ProfileClient::new(base_url).context("Failed to create profile client")?;
    let payload = client
        .fetch_user(args.uid)
        .with_context(|| format!("Failed to fetch profile for user {}", args.uid))?;

    // Step 2: Reshape
    info!("Step 2/3: Reshaping payload...");
    let summary = reshape(&payload, args.uid)
        .with_context(|| format!("Failed to reshape payload for user {}", args.uid))?;

    // Step 3: Write output
    info!("Step 3/3: Writing summary file...");
    let output_path = args.output_path();
    write_summary(&summary, &output_path).context("Failed to write summary JSON")?;

    info!("✓ Summary written to: {}", output_path.display());

    if args.print_summary {
        print_text_summary(&summary);
    }

    let elapsed = start_time.elapsed();
    info!("Fetch completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Print a text digest of a summary to stdout
///
/// **Private** - internal helper for execute_fetch
fn print_text_summary(summary: &UserSummary) {
    println!("\n{}", "=".repeat(80));
    println!("USER SUMMARY");
    println!("{}", "=".repeat(80));
    println!("UID:       {}", summary.info.uid);
    println!("Name:      {}", summary.info.name);
    println!("Badge:     {}", summary.info.badge.as_deref().unwrap_or("-"));
    println!("Elo max:   {}", summary.elo);
    println!(
        "Passed:    {}",
        summary
            .passed_problem
            .as_ref()
            .map_or("n/a".to_string(), |s| s.count.to_string())
    );
    println!(
        "Submitted: {}",
        summary
            .submitted_problem
            .as_ref()
            .map_or("n/a".to_string(), |s| s.count.to_string())
    );
    println!("{}", "=".repeat(80));
}
