//! Compact builders for catalogs and itineraries used by unit, behaviour, and
//! property tests.
//!
//! These helpers panic on invalid input; they are meant for fixtures with
//! known-good data.

use crate::{
    Coordinate, DayNumber, DayPlan, DayWindow, InMemoryCatalog, Itinerary, Minutes, Site,
    SiteId,
};

/// Build a site from raw values.
///
/// # Panics
/// Panics when `points` is negative or not finite.
#[expect(
    clippy::expect_used,
    reason = "fixture helpers fail fast on invalid test data"
)]
#[must_use]
pub fn site(id: &str, avenue: i64, street: i64, duration: u32, points: f64) -> Site {
    Site::new(
        id,
        Coordinate::new(avenue, street),
        Minutes::new(duration),
        points,
    )
    .expect("fixture site should be valid")
}

/// Build an itinerary from nested identifier slices, one slice per day.
#[must_use]
pub fn itinerary(days: &[&[&str]]) -> Itinerary {
    days.iter()
        .map(|day| day.iter().copied().collect::<DayPlan>())
        .collect()
}

/// Build a catalog where every site keeps the same `(open, close)` minutes on
/// days `1..=days`.
///
/// # Panics
/// Panics when the window is inverted or the sites repeat an identifier.
#[expect(
    clippy::expect_used,
    reason = "fixture helpers fail fast on invalid test data"
)]
#[must_use]
pub fn catalog_open_daily(sites: Vec<Site>, days: DayNumber, hours: (u32, u32)) -> InMemoryCatalog {
    let window = DayWindow::new(Minutes::new(hours.0), Minutes::new(hours.1))
        .expect("fixture window should be valid");
    let ids: Vec<SiteId> = sites.iter().map(|entry| entry.id().clone()).collect();
    let mut builder = InMemoryCatalog::builder();
    for entry in sites {
        builder
            .add_site(entry)
            .expect("fixture sites should be unique");
    }
    for day in 1..=days {
        for id in &ids {
            builder
                .add_window(day, id, window)
                .expect("fixture windows should be unique");
        }
    }
    builder.build()
}
