//! Loaders for the touring input files.
//!
//! A catalog file lists the sites and their daily opening hours; an
//! itinerary file lists the sites to visit, one line per day. The `parse_*`
//! functions work on text already in memory while the `read_*` functions
//! load the file first.

mod catalog;
mod error;
mod itinerary;

pub use catalog::parse_catalog;
pub use error::{CatalogParseError, ReadError, Section};
pub use itinerary::parse_itinerary;

use camino::Utf8Path;
use log::debug;
use touring_core::{InMemoryCatalog, Itinerary};

/// Load and parse a catalog file.
///
/// # Errors
/// Returns [`ReadError::Io`] when the file cannot be read and
/// [`ReadError::Catalog`] when its contents are malformed.
pub fn read_catalog(path: &Utf8Path) -> Result<InMemoryCatalog, ReadError> {
    let text = read_text(path)?;
    parse_catalog(&text).map_err(|source| ReadError::Catalog {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and parse an itinerary file.
///
/// # Errors
/// Returns [`ReadError::Io`] when the file cannot be read.
pub fn read_itinerary(path: &Utf8Path) -> Result<Itinerary, ReadError> {
    let itinerary = parse_itinerary(&read_text(path)?);
    debug!(
        "{path}: {} days, {} requested visits",
        itinerary.len(),
        itinerary.request_count()
    );
    Ok(itinerary)
}

fn read_text(path: &Utf8Path) -> Result<String, ReadError> {
    touring_fs::read_utf8_file(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
