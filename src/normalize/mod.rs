use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use std::cmp::Reverse;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::{output, require_orcid, PublicationRecord, DEFAULT_OUTPUT_PATH};

mod parser;
pub use parser::{doi_and_url, parse_work_summary, parse_year, pick_external_id, ExternalId};

#[derive(Args)]
pub struct NormalizeArgs {
    /// Saved response from the registry's works endpoint
    #[arg(short, long)]
    pub input: PathBuf,

    /// ORCID iD recorded in the output document
    #[arg(long, env = "ORCID_ID")]
    pub orcid: Option<String>,

    /// Output file for the publications document
    #[arg(short, long, env = "OUT_PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
}

/// Turns a works response into the ordered publication list.
///
/// Only the first summary of each group is kept; groups without summaries are
/// dropped. Missing fields never fail the run, they come out empty or `null`.
pub fn normalize_works(works: &Value) -> Vec<PublicationRecord> {
    let groups = match works.get("group") {
        Some(Value::Array(arr)) => arr,
        Some(Value::Null) | None => {
            warn!("Response has no work groups");
            return Vec::new();
        }
        Some(_) => {
            warn!("Response 'group' field is not a list, ignoring it");
            return Vec::new();
        }
    };

    let mut publications: Vec<PublicationRecord> = groups
        .iter()
        .enumerate()
        .filter_map(|(idx, group)| match group.pointer("/work-summary/0") {
            Some(summary) => Some(parse_work_summary(summary)),
            None => {
                debug!("Skipping group {} without work summaries", idx);
                None
            }
        })
        .collect();

    sort_publications(&mut publications);
    publications
}

/// Newest first. Undated records count as year 0, and titles within a year
/// run in descending case-insensitive order. Equal keys keep their input order.
pub fn sort_publications(publications: &mut [PublicationRecord]) {
    publications.sort_by_cached_key(|p| Reverse((p.year.unwrap_or(0), p.title.to_lowercase())));
}

pub fn run(args: NormalizeArgs) -> Result<()> {
    crate::init_logging();

    let orcid = require_orcid(args.orcid.as_deref())?;

    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let works = serde_json::from_reader::<_, Value>(BufReader::new(file))
        .map_err(crate::PublicationsError::from)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    let publications = normalize_works(&works);
    info!("Normalized {} publications", publications.len());

    let document = output::write_publications(&orcid, publications, &args.output)?;
    println!("{}", output::summary_line(&document, &args.output));

    Ok(())
}
