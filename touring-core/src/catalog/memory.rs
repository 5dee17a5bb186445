//! Hash-map backed catalog assembled once and then shared read-only.

use std::collections::{BTreeMap, HashMap};

use log::debug;

use super::{Catalog, CatalogBuildError, CatalogError, DayNumber, DaySchedule, DayWindow};
use crate::{Site, SiteId};

/// Catalog held entirely in memory.
///
/// Construct one through [`InMemoryCatalog::builder`]; the resulting value
/// exposes no mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryCatalog {
    sites: HashMap<SiteId, Site>,
    schedules: BTreeMap<DayNumber, DaySchedule>,
}

impl InMemoryCatalog {
    /// Start assembling a catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Number of catalogued sites.
    #[must_use]
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Iterate over the catalogued sites in arbitrary order.
    pub fn sites(&self) -> impl Iterator<Item = &Site> {
        self.sites.values()
    }

    /// Days that have an hours table, in ascending order.
    pub fn days(&self) -> impl Iterator<Item = DayNumber> + '_ {
        self.schedules.keys().copied()
    }
}

impl Catalog for InMemoryCatalog {
    fn site_info(&self, id: &SiteId) -> Result<&Site, CatalogError> {
        self.sites
            .get(id)
            .ok_or_else(|| CatalogError::UnknownSite { site: id.clone() })
    }

    fn day_schedule(&self, day: DayNumber) -> Result<&DaySchedule, CatalogError> {
        self.schedules
            .get(&day)
            .ok_or(CatalogError::UnknownDay { day })
    }
}

/// Incrementally validates sites and windows before freezing them into an
/// [`InMemoryCatalog`].
///
/// Sites must be registered before any window that refers to them.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: InMemoryCatalog,
}

impl CatalogBuilder {
    /// Register a site.
    ///
    /// # Errors
    /// Returns [`CatalogBuildError::DuplicateSite`] when the identifier is
    /// already registered.
    pub fn add_site(&mut self, site: Site) -> Result<(), CatalogBuildError> {
        if self.catalog.sites.contains_key(site.id()) {
            return Err(CatalogBuildError::DuplicateSite {
                site: site.id().clone(),
            });
        }
        self.catalog.sites.insert(site.id().clone(), site);
        Ok(())
    }

    /// Record the opening window of `site` on `day`.
    ///
    /// # Errors
    /// Returns [`CatalogBuildError::DayZero`] for day `0`,
    /// [`CatalogBuildError::WindowForUnknownSite`] when `site` has not been
    /// registered, and [`CatalogBuildError::DuplicateWindow`] when the pair
    /// already has a window.
    pub fn add_window(
        &mut self,
        day: DayNumber,
        site: &SiteId,
        window: DayWindow,
    ) -> Result<(), CatalogBuildError> {
        if day == 0 {
            return Err(CatalogBuildError::DayZero);
        }
        if !self.catalog.sites.contains_key(site) {
            return Err(CatalogBuildError::WindowForUnknownSite { site: site.clone() });
        }
        let inserted = self
            .catalog
            .schedules
            .entry(day)
            .or_default()
            .insert(site.clone(), window);
        if inserted {
            Ok(())
        } else {
            Err(CatalogBuildError::DuplicateWindow {
                day,
                site: site.clone(),
            })
        }
    }

    /// Freeze the catalog.
    #[must_use]
    pub fn build(self) -> InMemoryCatalog {
        debug!(
            "catalog built with {} sites over {} days",
            self.catalog.sites.len(),
            self.catalog.schedules.len()
        );
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::site;
    use crate::Minutes;
    use rstest::{fixture, rstest};

    #[fixture]
    fn window() -> DayWindow {
        DayWindow::new(Minutes::from_hours(9), Minutes::from_hours(17)).expect("valid window")
    }

    #[rstest]
    fn lookups_return_registered_data(window: DayWindow) {
        let mut builder = InMemoryCatalog::builder();
        builder
            .add_site(site("a", 1, 2, 30, 5.0))
            .expect("register site");
        builder
            .add_window(1, &"a".into(), window)
            .expect("register window");
        let catalog = builder.build();

        let found = catalog.site_info(&"a".into()).expect("site present");
        assert_eq!(found.points(), 5.0);
        assert_eq!(catalog.hours_for(1, &"a".into()), Ok(window));
        assert_eq!(catalog.days().collect::<Vec<_>>(), vec![1]);
    }

    #[rstest]
    fn unknown_site_is_reported() {
        let catalog = InMemoryCatalog::builder().build();
        let err = catalog
            .site_info(&"ghost".into())
            .expect_err("site should be missing");
        assert_eq!(
            err,
            CatalogError::UnknownSite {
                site: "ghost".into()
            }
        );
    }

    #[rstest]
    fn unknown_day_and_schedule_are_distinct(window: DayWindow) {
        let mut builder = InMemoryCatalog::builder();
        builder.add_site(site("a", 0, 0, 0, 1.0)).expect("site a");
        builder.add_site(site("b", 0, 0, 0, 1.0)).expect("site b");
        builder
            .add_window(1, &"a".into(), window)
            .expect("window a");
        let catalog = builder.build();

        assert_eq!(
            catalog.hours_for(2, &"a".into()),
            Err(CatalogError::UnknownDay { day: 2 })
        );
        assert_eq!(
            catalog.hours_for(1, &"b".into()),
            Err(CatalogError::UnknownSchedule {
                day: 1,
                site: "b".into()
            })
        );
    }

    #[rstest]
    fn builder_rejects_duplicate_sites() {
        let mut builder = InMemoryCatalog::builder();
        builder.add_site(site("a", 0, 0, 0, 1.0)).expect("first");
        let err = builder
            .add_site(site("a", 1, 1, 0, 2.0))
            .expect_err("duplicate should fail");
        assert_eq!(err, CatalogBuildError::DuplicateSite { site: "a".into() });
    }

    #[rstest]
    fn builder_rejects_duplicate_windows(window: DayWindow) {
        let mut builder = InMemoryCatalog::builder();
        builder.add_site(site("a", 0, 0, 0, 1.0)).expect("site");
        builder.add_window(3, &"a".into(), window).expect("first");
        let err = builder
            .add_window(3, &"a".into(), window)
            .expect_err("duplicate should fail");
        assert_eq!(
            err,
            CatalogBuildError::DuplicateWindow {
                day: 3,
                site: "a".into()
            }
        );
    }

    #[rstest]
    #[case(0, "a", CatalogBuildError::DayZero)]
    #[case(1, "b", CatalogBuildError::WindowForUnknownSite { site: "b".into() })]
    fn builder_rejects_invalid_windows(
        window: DayWindow,
        #[case] day: DayNumber,
        #[case] target: &str,
        #[case] expected: CatalogBuildError,
    ) {
        let mut builder = InMemoryCatalog::builder();
        builder.add_site(site("a", 0, 0, 0, 1.0)).expect("site");
        let err = builder
            .add_window(day, &target.into(), window)
            .expect_err("window should be rejected");
        assert_eq!(err, expected);
    }
}
