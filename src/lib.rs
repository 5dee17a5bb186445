//! Facade crate for the touring itinerary scorer.
//!
//! This crate re-exports the core domain types and, behind the `data`
//! feature, the loaders for catalog and itinerary files.

#![forbid(unsafe_code)]

pub use touring_core::{
    Catalog, CatalogBuildError, CatalogBuilder, CatalogError, Coordinate, DayNumber, DayOutcome,
    DayPlan, DaySchedule, DayTermination, DayWindow, DayWindowError, Discard, Evaluation,
    InMemoryCatalog, Itinerary, Minutes, SimulationError, Simulator, Site, SiteError, SiteId,
    TraceEvent, TraceSink,
};

#[cfg(feature = "data")]
pub use touring_data::{
    CatalogParseError, ReadError, Section, parse_catalog, parse_itinerary, read_catalog,
    read_itinerary,
};
