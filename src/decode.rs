//! CP1251 decoding stage
//!
//! The Bank of Russia serves the directory XML in the Windows-1251 code
//! page. Every byte value has a mapping in that code page, so decoding is
//! total; only file-read errors can fail this stage. The encoding
//! declaration inside the document is ignored.

use crate::error::Result;
use encoding_rs::WINDOWS_1251;
use std::path::Path;

/// Read a file and decode its bytes from CP1251 into a `String`.
pub fn read_cp1251_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let (text, _encoding, _had_errors) = WINDOWS_1251.decode(&bytes);
    Ok(text.into_owned())
}
