//! Configuration for the BIC directory pipeline
//!
//! The original data source is fixed (the Bank of Russia publishes the BIC
//! directory at a single stable URL), so every field has a working default.
//! Tests point the config at a mock server and a temp directory instead.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pipeline configuration (source URL, working paths, HTTP timeout)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// URL of the published BIC archive (default: "http://www.cbr.ru/s/newbik")
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Where the downloaded archive is written (default: "new-file.zip")
    #[serde(default = "default_archive_path")]
    pub archive_path: PathBuf,

    /// Directory the archive is extracted into (default: "./from-zip")
    #[serde(default = "default_extract_dir")]
    pub extract_dir: PathBuf,

    /// Canonical filename the extracted payload is renamed to
    /// (default: "new-file.xml")
    #[serde(default = "default_xml_filename")]
    pub xml_filename: String,

    /// HTTP request timeout in seconds (default: 60)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            archive_path: default_archive_path(),
            extract_dir: default_extract_dir(),
            xml_filename: default_xml_filename(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_source_url() -> String {
    "http://www.cbr.ru/s/newbik".to_string()
}

fn default_archive_path() -> PathBuf {
    PathBuf::from("new-file.zip")
}

fn default_extract_dir() -> PathBuf {
    PathBuf::from("./from-zip")
}

fn default_xml_filename() -> String {
    "new-file.xml".to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}
