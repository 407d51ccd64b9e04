//! Template catalog: a directory of template files addressed by code
//!
//! A template's code is its file name without the extension, so
//! `templates/invoice.json` is the template `invoice`.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A file found in a catalog directory
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TemplateEntry {
    /// File name without its extension
    pub name: String,
    /// Extension without the dot; empty when the file has none
    pub format: String,
}

/// Directory of template files
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    dir: PathBuf,
}

impl TemplateCatalog {
    /// Create a catalog over `dir`
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// The catalog directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List the files in the catalog, sorted by name
    ///
    /// Subdirectories are skipped. A missing directory is an error, an empty
    /// one is not.
    pub fn list(&self) -> Result<Vec<TemplateEntry>> {
        let listing_error =
            |e: std::io::Error| Error::other(format!("Error listing templates in {}: {}", self.dir.display(), e));

        let mut templates = Vec::new();
        for entry in std::fs::read_dir(&self.dir).map_err(listing_error)? {
            let entry = entry.map_err(listing_error)?;
            if entry.file_type().map_err(listing_error)?.is_dir() {
                continue;
            }

            let path = entry.path();
            templates.push(TemplateEntry {
                name: os_text(path.file_stem()),
                format: os_text(path.extension()),
            });
        }

        templates.sort();
        Ok(templates)
    }

    /// Path of the JSON snapshot template registered under `code`
    ///
    /// Codes are plain file stems; anything that would leave the catalog
    /// directory is rejected.
    pub fn path_for(&self, code: &str) -> Result<PathBuf> {
        let escapes = code.is_empty() || code == "." || code == ".." || code.contains(['/', '\\']);
        if escapes {
            return Err(Error::other(format!("Invalid template code: '{}'", code)));
        }
        Ok(self.dir.join(format!("{}.json", code)))
    }
}

fn os_text(part: Option<&std::ffi::OsStr>) -> String {
    part.map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
