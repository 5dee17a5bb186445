//! Replay an itinerary against the catalog and score it.
//!
//! The simulator walks each day's requests in order, charging one minute per
//! grid unit of travel, waiting for sites to open, and crediting a site only
//! when the full visit fits before closing time. A site is credited at most
//! once per run. Rule violations end the current day; catalog lookup failures
//! abort the run.

mod outcome;
mod state;
mod trace;

use std::ops::ControlFlow;

use log::debug;
use thiserror::Error;

pub use outcome::{DayOutcome, DayTermination, Evaluation};
pub use trace::{Discard, TraceEvent, TraceSink};

use crate::{Catalog, CatalogError, DayNumber, DayPlan, DaySchedule, Itinerary, SiteId};
use state::{DayTour, RunState};

/// Last hour of the day a team may still be travelling in.
const LAST_HOUR: u32 = 23;

/// Errors that abort a simulation.
///
/// Itinerary rule violations are not errors; they are reported through
/// [`DayTermination`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The catalog and itinerary disagree.
    #[error("catalog lookup failed on day {day}: {source}")]
    Catalog {
        /// Day being simulated.
        day: DayNumber,
        /// Lookup failure.
        #[source]
        source: CatalogError,
    },
}

/// Scores itineraries against a catalog.
///
/// The simulator holds no per-run state, so one instance may evaluate any
/// number of itineraries and each call starts from a clean slate.
///
/// # Examples
/// ```
/// use touring_core::test_support::{catalog_open_daily, itinerary, site};
/// use touring_core::{DayTermination, Simulator};
///
/// let catalog = catalog_open_daily(
///     vec![site("a", 0, 0, 60, 10.0), site("b", 3, 4, 30, 2.5)],
///     1,
///     (0, 600),
/// );
/// let simulator = Simulator::new(&catalog);
/// let evaluation = simulator.evaluate(&itinerary(&[&["a", "b", "a"]]))?;
/// assert_eq!(evaluation.total_score, 12.5);
/// assert_eq!(
///     evaluation.days[0].termination,
///     DayTermination::RepeatVisit { site: "a".into() }
/// );
/// # Ok::<(), touring_core::SimulationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Simulator<C> {
    catalog: C,
}

impl<C: Catalog> Simulator<C> {
    /// Construct a simulator over `catalog`.
    pub const fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Borrow the underlying catalog.
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Score `itinerary`.
    ///
    /// # Errors
    /// Returns [`SimulationError::Catalog`] when a planned site or its hours
    /// for a day are missing from the catalog.
    pub fn evaluate(&self, itinerary: &Itinerary) -> Result<Evaluation, SimulationError> {
        self.evaluate_with(itinerary, &mut Discard)
    }

    /// Score `itinerary`, reporting every decision to `sink`.
    ///
    /// # Errors
    /// Returns [`SimulationError::Catalog`] when a planned site or its hours
    /// for a day are missing from the catalog.
    pub fn evaluate_with(
        &self,
        itinerary: &Itinerary,
        sink: &mut dyn TraceSink,
    ) -> Result<Evaluation, SimulationError> {
        let mut run = RunState::default();
        let mut days = Vec::with_capacity(itinerary.len());
        for (day, plan) in (1..).zip(itinerary.days()) {
            days.push(self.simulate_day(day, plan, &mut run, sink)?);
        }
        let evaluation = run.into_evaluation(days);
        debug!(
            "itinerary of {} days scored {}",
            evaluation.days.len(),
            evaluation.total_score
        );
        Ok(evaluation)
    }

    fn simulate_day(
        &self,
        day: DayNumber,
        plan: &DayPlan,
        run: &mut RunState,
        sink: &mut dyn TraceSink,
    ) -> Result<DayOutcome, SimulationError> {
        if plan.is_empty() {
            sink.record(&TraceEvent::DaySkipped { day });
            return Ok(DayOutcome::rest(day));
        }
        let schedule = self
            .catalog
            .day_schedule(day)
            .map_err(|source| SimulationError::Catalog { day, source })?;
        sink.record(&TraceEvent::DayStarted { day });
        debug!("day {day}: {} visits planned", plan.len());

        let mut tour = DayTour::start(day);
        for site in plan.visits() {
            sink.record(&TraceEvent::ClockReading { time: tour.clock });
            if let ControlFlow::Break(termination) =
                self.attempt_visit(site, schedule, &mut tour, run, sink)?
            {
                debug!("day {day} ended early: {termination:?}");
                return Ok(tour.finish(termination));
            }
        }
        Ok(tour.finish(DayTermination::Completed))
    }

    fn attempt_visit(
        &self,
        id: &SiteId,
        schedule: &DaySchedule,
        tour: &mut DayTour,
        run: &mut RunState,
        sink: &mut dyn TraceSink,
    ) -> Result<ControlFlow<DayTermination>, SimulationError> {
        let day = tour.day();
        if run.has_visited(id) {
            sink.record(&TraceEvent::RepeatVisit { site: id.clone() });
            return Ok(ControlFlow::Break(DayTermination::RepeatVisit {
                site: id.clone(),
            }));
        }

        let site = self
            .catalog
            .site_info(id)
            .map_err(|source| SimulationError::Catalog { day, source })?;
        let window = schedule.get(id).ok_or_else(|| SimulationError::Catalog {
            day,
            source: CatalogError::UnknownSchedule {
                day,
                site: id.clone(),
            },
        })?;

        let destination = site.location();
        let origin = tour.origin_for(destination);
        let distance = origin.manhattan_distance(destination);
        sink.record(&TraceEvent::Travel {
            site: id.clone(),
            from: origin,
            to: destination,
            distance,
        });
        tour.clock = tour.clock.advance_by(distance);

        if tour.clock.hour() > LAST_HOUR {
            sink.record(&TraceEvent::OutOfTime {
                site: id.clone(),
                time: tour.clock,
            });
            return Ok(ControlFlow::Break(DayTermination::OutOfTime {
                site: id.clone(),
            }));
        }
        sink.record(&TraceEvent::Arrived {
            site: id.clone(),
            time: tour.clock,
        });

        if tour.clock < window.open() {
            tour.clock = window.open();
            sink.record(&TraceEvent::Waiting {
                site: id.clone(),
                until: window.open(),
            });
        }

        if tour.clock >= window.close() {
            tour.move_to(destination);
            sink.record(&TraceEvent::Closed {
                site: id.clone(),
                close: window.close(),
            });
            return Ok(ControlFlow::Break(DayTermination::Closed {
                site: id.clone(),
            }));
        }

        let departure = tour.clock.saturating_add(site.visit_duration());
        if departure > window.close() {
            tour.move_to(destination);
            sink.record(&TraceEvent::InsufficientTime {
                site: id.clone(),
                finish: departure,
                close: window.close(),
            });
            return Ok(ControlFlow::Break(DayTermination::InsufficientTime {
                site: id.clone(),
            }));
        }

        tour.complete_visit(site, departure, run);
        sink.record(&TraceEvent::Visited {
            site: id.clone(),
            points: site.points(),
            departure,
        });
        Ok(ControlFlow::Continue(()))
    }
}

#[cfg(test)]
mod tests;
