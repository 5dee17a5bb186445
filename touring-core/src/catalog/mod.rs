//! Read-only lookups over the site catalog and daily opening hours.
//!
//! The [`Catalog`] trait is the only view the simulator has of the contest
//! data. [`InMemoryCatalog`] is the stock implementation, assembled once by
//! [`CatalogBuilder`] and never mutated afterwards.

mod error;
mod memory;
mod window;

pub use error::{CatalogBuildError, CatalogError};
pub use memory::{CatalogBuilder, InMemoryCatalog};
pub use window::{DaySchedule, DayWindow, DayWindowError};

use crate::{Site, SiteId};

/// One-based day index within an itinerary.
pub type DayNumber = u32;

/// Look up sites and their opening hours.
///
/// Implementations are immutable for the duration of a simulation. Lookups
/// that miss are configuration errors rather than itinerary mistakes, so they
/// surface as [`CatalogError`] instead of being skipped.
///
/// # Examples
///
/// ```rust
/// use touring_core::{
///     Catalog, CatalogError, Coordinate, DayNumber, DaySchedule, Minutes, Site, SiteId,
/// };
///
/// struct SingleSite {
///     site: Site,
///     schedule: DaySchedule,
/// }
///
/// impl Catalog for SingleSite {
///     fn site_info(&self, id: &SiteId) -> Result<&Site, CatalogError> {
///         if self.site.id() == id {
///             Ok(&self.site)
///         } else {
///             Err(CatalogError::UnknownSite { site: id.clone() })
///         }
///     }
///
///     fn day_schedule(&self, day: DayNumber) -> Result<&DaySchedule, CatalogError> {
///         if day == 1 {
///             Ok(&self.schedule)
///         } else {
///             Err(CatalogError::UnknownDay { day })
///         }
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = SingleSite {
///     site: Site::new("park", Coordinate::new(1, 1), Minutes::new(30), 4.0)?,
///     schedule: DaySchedule::new(),
/// };
/// let err = catalog.hours_for(1, &"park".into()).expect_err("no window recorded");
/// assert!(matches!(err, CatalogError::UnknownSchedule { day: 1, .. }));
/// # Ok(())
/// # }
/// ```
pub trait Catalog {
    /// Return the site registered under `id`.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownSite`] when `id` is not catalogued.
    fn site_info(&self, id: &SiteId) -> Result<&Site, CatalogError>;

    /// Return every opening window recorded for `day`.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownDay`] when no hours table exists for
    /// `day`.
    fn day_schedule(&self, day: DayNumber) -> Result<&DaySchedule, CatalogError>;

    /// Return the opening window of `id` on `day`.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownDay`] when the day has no hours table and
    /// [`CatalogError::UnknownSchedule`] when the site has no window that day.
    fn hours_for(&self, day: DayNumber, id: &SiteId) -> Result<DayWindow, CatalogError> {
        self.day_schedule(day)?
            .get(id)
            .ok_or_else(|| CatalogError::UnknownSchedule {
                day,
                site: id.clone(),
            })
    }
}

impl<T: Catalog + ?Sized> Catalog for &T {
    fn site_info(&self, id: &SiteId) -> Result<&Site, CatalogError> {
        (**self).site_info(id)
    }

    fn day_schedule(&self, day: DayNumber) -> Result<&DaySchedule, CatalogError> {
        (**self).day_schedule(day)
    }

    fn hours_for(&self, day: DayNumber, id: &SiteId) -> Result<DayWindow, CatalogError> {
        (**self).hours_for(day, id)
    }
}
