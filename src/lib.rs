//! # cbr-bic
//!
//! Downloads the published Bank of Russia BIC directory archive, extracts
//! its XML payload, decodes it from CP1251, and flattens it into a list of
//! `{ bic, name, corrAccount }` records.
//!
//! The crate is a single forward-only pipeline with four stages (fetch,
//! extract, decode, parse/flatten); every path and URL involved is a
//! [`PipelineConfig`] field with a working default, so tests can point the
//! pipeline at a mock server and a temp directory.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cbr_bic::{pipeline, PipelineConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let records = pipeline::run(&PipelineConfig::default()).await?;
//!     for record in &records {
//!         println!("{} {} {}", record.bic, record.corr_account, record.name);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Pipeline configuration
pub mod config;
/// CP1251 decoding stage
pub mod decode;
/// Record types and the flattening step
pub mod directory;
/// Error types
pub mod error;
/// Archive extraction stage
pub mod extract;
/// Archive download stage
pub mod fetch;
/// Stage orchestration
pub mod pipeline;
/// Generic XML element tree
pub mod xml;

pub use config::PipelineConfig;
pub use directory::BicRecord;
pub use error::{Error, Result};
