//! Mutable bookkeeping owned by a single simulation run.

use std::collections::HashSet;

use super::outcome::{DayOutcome, DayTermination, Evaluation};
use crate::{Coordinate, DayNumber, Minutes, Site, SiteId};

/// Run-scoped state: the visited set and score accumulator.
///
/// A fresh value is created for every evaluation so repeated runs never share
/// credit.
#[derive(Debug, Default)]
pub(super) struct RunState {
    visited: HashSet<SiteId>,
    credited: Vec<SiteId>,
    total_score: f64,
}

impl RunState {
    pub(super) fn has_visited(&self, site: &SiteId) -> bool {
        self.visited.contains(site)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "scores are real-valued and accumulate by addition"
    )]
    fn credit(&mut self, site: &Site) {
        self.total_score += site.points();
        self.visited.insert(site.id().clone());
        self.credited.push(site.id().clone());
    }

    pub(super) fn into_evaluation(self, days: Vec<DayOutcome>) -> Evaluation {
        Evaluation {
            total_score: self.total_score,
            visited: self.credited,
            days,
        }
    }
}

/// Day-scoped state: clock, position, and the day's credit.
#[derive(Debug)]
pub(super) struct DayTour {
    day: DayNumber,
    pub(super) clock: Minutes,
    position: Option<Coordinate>,
    points: f64,
    visited: Vec<SiteId>,
}

impl DayTour {
    pub(super) const fn start(day: DayNumber) -> Self {
        Self {
            day,
            clock: Minutes::ZERO,
            position: None,
            points: 0.0,
            visited: Vec::new(),
        }
    }

    pub(super) const fn day(&self) -> DayNumber {
        self.day
    }

    /// Current position, or `site` when the day has not started moving yet.
    ///
    /// The first visit of a day begins at the site itself, so no travel is
    /// charged for it.
    pub(super) fn origin_for(&mut self, site: Coordinate) -> Coordinate {
        *self.position.get_or_insert(site)
    }

    pub(super) const fn move_to(&mut self, site: Coordinate) {
        self.position = Some(site);
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "scores are real-valued and accumulate by addition"
    )]
    pub(super) fn complete_visit(&mut self, site: &Site, departure: Minutes, run: &mut RunState) {
        self.clock = departure;
        self.position = Some(site.location());
        self.points += site.points();
        self.visited.push(site.id().clone());
        run.credit(site);
    }

    pub(super) fn finish(self, termination: DayTermination) -> DayOutcome {
        DayOutcome {
            day: self.day,
            points: self.points,
            visited: self.visited,
            end_time: self.clock,
            termination,
        }
    }
}
