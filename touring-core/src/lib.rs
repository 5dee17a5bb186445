//! Core domain types and the itinerary simulator for the touring scorer.
//!
//! A [`Catalog`] describes the sites a team may visit and the hours each site
//! keeps on every day of the contest. An [`Itinerary`] lists, for each day,
//! the sites the team intends to visit in order. The [`Simulator`] replays the
//! itinerary against a simulated clock and returns an [`Evaluation`] holding
//! the total score and how each day ended.
//!
//! # Examples
//!
//! ```
//! use touring_core::{
//!     Coordinate, DayPlan, DayWindow, InMemoryCatalog, Itinerary, Minutes, Simulator, Site,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = InMemoryCatalog::builder();
//! builder.add_site(Site::new("museum", Coordinate::new(0, 0), Minutes::new(60), 10.0)?)?;
//! builder.add_window(1, &"museum".into(), DayWindow::new(Minutes::ZERO, Minutes::new(600))?)?;
//! let catalog = builder.build();
//!
//! let day: DayPlan = ["museum"].into_iter().collect();
//! let itinerary = Itinerary::new(vec![day]);
//! let evaluation = Simulator::new(&catalog).evaluate(&itinerary)?;
//! assert_eq!(evaluation.total_score, 10.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod itinerary;
pub mod simulator;
pub mod site;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod time;

pub use catalog::{
    Catalog, CatalogBuildError, CatalogBuilder, CatalogError, DayNumber, DaySchedule, DayWindow,
    DayWindowError, InMemoryCatalog,
};
pub use itinerary::{DayPlan, Itinerary};
pub use simulator::{
    DayOutcome, DayTermination, Discard, Evaluation, SimulationError, Simulator, TraceEvent,
    TraceSink,
};
pub use site::{Coordinate, Site, SiteError, SiteId};
pub use time::Minutes;
