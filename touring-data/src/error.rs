//! Error types raised while reading catalog and itinerary files.

use std::fmt;

use camino::Utf8PathBuf;
use thiserror::Error;
use touring_core::{CatalogBuildError, DayWindowError, SiteError};

/// The two sections of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// `site avenue street desiredtime value`
    Sites,
    /// `site day beginhour endhour`
    Hours,
}

impl Section {
    /// Number of columns every row of the section carries.
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            Self::Sites => 5,
            Self::Hours => 4,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sites => "site",
            Self::Hours => "opening hours",
        })
    }
}

/// Errors raised while parsing catalog text.
///
/// Line numbers are one-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogParseError {
    /// A data row appeared before the first header.
    #[error("line {line}: expected a header row before any data")]
    MissingHeader {
        /// Offending line.
        line: usize,
    },
    /// A third header row appeared.
    #[error("line {line}: unexpected header after the opening hours section")]
    UnexpectedSection {
        /// Offending line.
        line: usize,
    },
    /// The file ended before a section was seen.
    #[error("catalog has no {section} section")]
    MissingSection {
        /// Section that never appeared.
        section: Section,
    },
    /// A row had the wrong number of columns for its section.
    #[error("line {line}: {section} rows need {expected} columns, found {found}")]
    ColumnCount {
        /// Offending line.
        line: usize,
        /// Section being read.
        section: Section,
        /// Columns required.
        expected: usize,
        /// Columns present.
        found: usize,
    },
    /// A numeric column did not parse or was out of range.
    #[error("line {line}: invalid {column} value {value:?}")]
    InvalidNumber {
        /// Offending line.
        line: usize,
        /// Column name.
        column: &'static str,
        /// Raw text.
        value: String,
    },
    /// A site row failed validation.
    #[error("line {line}: {source}")]
    InvalidSite {
        /// Offending line.
        line: usize,
        /// Validation failure.
        #[source]
        source: SiteError,
    },
    /// An opening-hours row failed validation.
    #[error("line {line}: {source}")]
    InvalidWindow {
        /// Offending line.
        line: usize,
        /// Validation failure.
        #[source]
        source: DayWindowError,
    },
    /// A row conflicted with earlier rows.
    #[error("line {line}: {source}")]
    Conflict {
        /// Offending line.
        line: usize,
        /// Conflict detected by the catalog builder.
        #[source]
        source: CatalogBuildError,
    },
}

/// Errors raised while loading an input file from disk.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The catalog text was malformed.
    #[error("malformed catalog {path}: {source}")]
    Catalog {
        /// File path.
        path: Utf8PathBuf,
        /// Parse failure.
        #[source]
        source: CatalogParseError,
    },
}
