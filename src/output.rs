use chrono::{SecondsFormat, Utc};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::error::{PublicationsError, Result};
use crate::{PublicationRecord, PublicationsDocument};

pub fn build_document(orcid: &str, publications: Vec<PublicationRecord>) -> PublicationsDocument {
    PublicationsDocument {
        orcid: orcid.to_string(),
        generated_utc: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
        count: publications.len(),
        publications,
    }
}

/// Writes the document as 2-space indented UTF-8 JSON, replacing any existing file.
///
/// Missing parent directories are created. The write is not atomic.
pub fn write_document<P: AsRef<Path>>(document: &PublicationsDocument, path: P) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| PublicationsError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)
        .map_err(|e| write_error(e.into()))?;
    writer.flush().map_err(write_error)?;

    Ok(())
}

/// Stamps and writes the records, returning the document that was written.
pub fn write_publications<P: AsRef<Path>>(
    orcid: &str,
    publications: Vec<PublicationRecord>,
    path: P,
) -> Result<PublicationsDocument> {
    let document = build_document(orcid, publications);
    write_document(&document, &path)?;
    info!(
        "Wrote {} publications to {}",
        document.count,
        path.as_ref().display()
    );
    Ok(document)
}

pub fn summary_line<P: AsRef<Path>>(document: &PublicationsDocument, path: P) -> String {
    format!(
        "Wrote {} publications → {}",
        document.count,
        path.as_ref().display()
    )
}
