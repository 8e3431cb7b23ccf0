//! Pipeline orchestration
//!
//! The whole program is one forward-only chain: fetch, extract, decode,
//! parse, flatten. Each stage completes before the next starts and any
//! failure short-circuits the rest. Intermediate files (the archive, the
//! extraction directory) are left on disk after the run.

use crate::config::PipelineConfig;
use crate::directory::{self, BicRecord};
use crate::error::Result;
use crate::{decode, extract, fetch, xml};
use std::time::Duration;
use tracing::info;

/// Run the full pipeline and return the flattened records.
pub async fn run(config: &PipelineConfig) -> Result<Vec<BicRecord>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;

    fetch::download_to_file(&client, &config.source_url, &config.archive_path).await?;

    let payload = extract::extract_archive(
        &config.archive_path,
        &config.extract_dir,
        &config.xml_filename,
    )?;

    let text = decode::read_cp1251_file(&payload)?;
    let document = xml::parse_document(&text)?;
    let records = directory::flatten(&document)?;

    info!(records = records.len(), "BIC directory processed");
    Ok(records)
}
