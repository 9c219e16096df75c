//! Batch command implementation.
//!
//! Iterates a uid-list file and writes one summary file per uid into the
//! output directory. Per-uid failures are logged and skipped so one broken
//! profile does not abort the run.

use crate::client::ProfileClient;
use crate::output::{read_uid_list, write_summary};
use crate::summary::reshape;
use crate::utils::config;
use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Arguments for the batch command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct BatchArgs {
    /// Path to the uid-list JSON file (`{"uid_list": [...]}`)
    pub uid_list: PathBuf,

    /// Directory receiving one `<uid>.json` per user
    pub out_dir: PathBuf,

    /// Use the mainland base URL
    pub cn: bool,
}

/// Execute the batch command
///
/// **Public** - main entry point called from main.rs
///
/// Returns an error only when the uid list cannot be read or when every
/// listed uid failed; individual failures are logged and skipped.
pub fn execute_batch(args: BatchArgs) -> Result<()> {
    let uids = read_uid_list(&args.uid_list)
        .with_context(|| format!("Failed to read uid list {}", args.uid_list.display()))?;

    info!("Processing {} users from {}", uids.len(), args.uid_list.display());

    let client =
        ProfileClient::new(config::base_url(args.cn)).context("Failed to create profile client")?;

    let mut written = 0usize;
    let mut failed = 0usize;

    for uid in &uids {
        info!("Fetching data for user {}...", uid);

        match process_uid(&client, *uid, &args.out_dir) {
            Ok(()) => {
                info!("Data for user {} fetched successfully.", uid);
                written += 1;
            }
            Err(err) => {
                warn!("Skipping user {}: {:#}", uid, err);
                failed += 1;
            }
        }
    }

    info!("Batch complete: {} written, {} failed", written, failed);

    if written == 0 && !uids.is_empty() {
        anyhow::bail!("all {} users failed", failed);
    }

    Ok(())
}

/// Fetch, reshape, and write one uid
///
/// **Private** - internal helper for execute_batch
fn process_uid(client: &ProfileClient, uid: u64, out_dir: &Path) -> Result<()> {
    let payload = client.fetch_user(uid).context("fetch failed")?;
    let summary = reshape(&payload, uid).context("reshape failed")?;

    let output_path = out_dir.join(format!("{}.json", uid));
    write_summary(&summary, &output_path).context("write failed")?;

    Ok(())
}
