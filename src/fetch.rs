//! Archive download stage
//!
//! Issues a single HTTP GET and streams the response body to a local file.
//! A non-2xx status fails the stage before anything is written as a result;
//! there is no retry.

use crate::error::{Error, Result};
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Download a resource to a file, in full, before returning.
///
/// The body is streamed chunk by chunk and the file is flushed before this
/// function returns, so the caller never observes a truncated file on
/// success. On failure the destination may hold a partial body, but the
/// error aborts the pipeline and no later stage reads it.
pub async fn download_to_file(
    client: &reqwest::Client,
    url: &str,
    dest: &Path,
) -> Result<()> {
    debug!(url, ?dest, "starting download");

    let mut response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Http {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
        });
    }

    let mut file = tokio::fs::File::create(dest).await?;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
    }
    file.flush().await?;

    info!(url, dest = %dest.display(), "file downloaded");
    Ok(())
}
