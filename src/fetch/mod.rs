use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::normalize::normalize_works;
use crate::{output, require_orcid, DEFAULT_OUTPUT_PATH};

mod client;
pub use client::{OrcidClient, DEFAULT_BASE_URL, USER_AGENT};

#[derive(Args, Clone, Debug)]
pub struct FetchArgs {
    /// ORCID iD whose public works are fetched
    #[arg(long, env = "ORCID_ID")]
    pub orcid: Option<String>,

    /// Output file for the publications document
    #[arg(short, long, env = "OUT_PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// ORCID public API base URL
    #[arg(short = 'u', long, env = "ORCID_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(short, long, env = "ORCID_TIMEOUT", default_value = "30")]
    pub timeout: u64,
}

pub fn run(args: FetchArgs) -> Result<()> {
    crate::init_logging();

    // Fail on configuration before a runtime or client exists.
    require_orcid(args.orcid.as_deref())?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let written = rt.block_on(run_async(args))?;
    println!("{}", written);

    Ok(())
}

/// Fetches, normalizes and writes the document. Returns the summary line.
pub async fn run_async(args: FetchArgs) -> Result<String> {
    let orcid = require_orcid(args.orcid.as_deref())?;

    let client = OrcidClient::new(args.base_url.clone(), args.timeout)?;
    let works = client
        .fetch_works(&orcid)
        .await
        .with_context(|| format!("Failed to fetch works for {}", orcid))?;

    let group_count = works
        .get("group")
        .and_then(|g| g.as_array())
        .map_or(0, Vec::len);
    info!("Fetched {} work groups for {}", group_count, orcid);

    let publications = normalize_works(&works);

    let document = output::write_publications(&orcid, publications, &args.output)
        .context("Failed to write publications document")?;

    Ok(output::summary_line(&document, &args.output))
}
