//! # Edit Buffer
//!
//! The temporary file the editor works on. It starts with a UTF-8 BOM
//! followed by the initial value and is removed when the buffer is dropped.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, io::Write, path::Path};

use tempfile::{Builder, TempPath};

use crate::{
    constants::BOM,
    error::{PromptError, Result},
};

/// Temporary file holding the text being edited.
#[derive(Debug)]
pub struct EditBuffer {
    path: TempPath,
}

impl EditBuffer {
    /// Creates the file, writes the BOM and `initial`, and closes it.
    ///
    /// The last `*` in `pattern` is replaced by a random string. Without a
    /// `*` the random part is appended. The file lands in `dir`, or in the
    /// system temp directory when `dir` is `None`.
    pub fn create(pattern: &str, dir: Option<&Path>, initial: &str) -> Result<Self> {
        let (prefix, suffix) = split_pattern(pattern);

        let mut builder = Builder::new();
        builder.prefix(prefix).suffix(suffix);
        let file = match dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        };
        let mut file = file.map_err(PromptError::temp_file("create"))?;

        file.write_all(&BOM)
            .and_then(|()| file.write_all(initial.as_bytes()))
            .and_then(|()| file.flush())
            .map_err(PromptError::temp_file("write"))?;

        // Editors that save by replacing the file need the handle closed
        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file back with any leading BOM removed.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// rejected, so only valid UTF-8 comes back byte for byte.
    pub fn read_back(&self) -> Result<String> {
        let raw = fs::read(&self.path).map_err(PromptError::temp_file("read"))?;
        Ok(String::from_utf8_lossy(strip_bom(&raw)).into_owned())
    }

    /// Removes the file, reporting failure. Dropping the buffer also removes
    /// it but ignores errors.
    pub fn close(self) -> Result<()> {
        self.path.close().map_err(PromptError::temp_file("remove"))
    }
}

/// Removes a leading UTF-8 BOM, if present.
pub fn strip_bom(raw: &[u8]) -> &[u8] {
    raw.strip_prefix(&BOM[..]).unwrap_or(raw)
}

/// Splits a temp file pattern at its last `*`.
fn split_pattern(pattern: &str) -> (&str, &str) {
    pattern.rsplit_once('*').unwrap_or((pattern, ""))
}
