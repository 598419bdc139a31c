//! Purpose: Factory-method selection of file readers by name suffix.
//! Exports: `Format`, `ReaderHandle`, `FileReader`, `ReaderFactory`.
//! Invariants: Selection is a pure function of the substring after the last `.`.
//! Invariants: Handles are descriptors only; no file content is ever read.

use std::path::PathBuf;

use super::error::{Error, ErrorKind};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    Csv,
    Xml,
}

impl Format {
    /// Looks at the substring after the last `.`; names with no dot have no
    /// recognizable format.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let suffix = name.rfind('.').map(|pos| &name[pos..])?;
        match suffix {
            ".csv" => Some(Format::Csv),
            ".xml" => Some(Format::Xml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderHandle {
    pub path: PathBuf,
    pub format: Format,
}

pub trait FileReader {
    fn handle(&self) -> &ReaderHandle;
    fn describe(&self) -> &'static str;
}

struct CsvReader {
    handle: ReaderHandle,
}

impl FileReader for CsvReader {
    fn handle(&self) -> &ReaderHandle {
        &self.handle
    }

    fn describe(&self) -> &'static str {
        "CSV FILE READER"
    }
}

struct XmlReader {
    handle: ReaderHandle,
}

impl FileReader for XmlReader {
    fn handle(&self) -> &ReaderHandle {
        &self.handle
    }

    fn describe(&self) -> &'static str {
        "XML FILE READER"
    }
}

/// Builds readers rooted at an explicit base directory. Callers decide how
/// the base directory is resolved; an empty path is a valid fallback.
pub struct ReaderFactory {
    base_dir: PathBuf,
}

impl ReaderFactory {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    pub fn create(&self, file_name: &str) -> Result<Box<dyn FileReader>, Error> {
        let format = Format::from_file_name(file_name).ok_or_else(|| {
            Error::new(ErrorKind::UnsupportedFormat)
                .with_message("unsupported file suffix")
                .with_path(file_name)
                .with_hint("Supported suffixes: .csv, .xml.")
        })?;
        let handle = ReaderHandle {
            path: self.base_dir.join(file_name.trim_start_matches('/')),
            format,
        };
        Ok(match format {
            Format::Csv => Box::new(CsvReader { handle }),
            Format::Xml => Box::new(XmlReader { handle }),
        })
    }
}
