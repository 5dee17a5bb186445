use thiserror::Error;

use super::DayNumber;
use crate::SiteId;

/// Lookup failures raised by [`crate::Catalog`] implementations.
///
/// These indicate a mismatch between the catalog and the itinerary, not a
/// flaw in the plan itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The itinerary names a site the catalog does not contain.
    #[error("site {site} is not in the catalog")]
    UnknownSite {
        /// Requested site.
        site: SiteId,
    },
    /// The catalog has no hours table for the day.
    #[error("no opening hours are recorded for day {day}")]
    UnknownDay {
        /// Requested day.
        day: DayNumber,
    },
    /// The day's hours table has no entry for the site.
    #[error("no opening hours are recorded for site {site} on day {day}")]
    UnknownSchedule {
        /// Requested day.
        day: DayNumber,
        /// Requested site.
        site: SiteId,
    },
}

/// Errors returned while assembling an [`crate::InMemoryCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogBuildError {
    /// A site identifier was registered twice.
    #[error("site {site} is listed more than once")]
    DuplicateSite {
        /// Repeated site.
        site: SiteId,
    },
    /// A (day, site) pair received two windows.
    #[error("opening hours for site {site} on day {day} are listed more than once")]
    DuplicateWindow {
        /// Day of the repeated entry.
        day: DayNumber,
        /// Site of the repeated entry.
        site: SiteId,
    },
    /// A window was supplied for a site that has not been registered.
    #[error("opening hours reference unknown site {site}")]
    WindowForUnknownSite {
        /// Unregistered site.
        site: SiteId,
    },
    /// Days are numbered from one.
    #[error("day numbers start at 1")]
    DayZero,
}
