//! Results produced by the simulator.

use crate::{DayNumber, Minutes, SiteId};

/// Why a day's processing stopped.
///
/// Every variant other than [`DayTermination::Empty`] and
/// [`DayTermination::Completed`] is a rule violation: it ends the day without
/// crediting the offending request, but the run carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "reason", rename_all = "snake_case")
)]
pub enum DayTermination {
    /// No visits were planned.
    Empty,
    /// Every planned visit was credited.
    Completed,
    /// The request named a site credited earlier in the run.
    RepeatVisit {
        /// Repeated site.
        site: SiteId,
    },
    /// Travel pushed the clock past 23:59.
    OutOfTime {
        /// Unreachable site.
        site: SiteId,
    },
    /// The site had closed by the time the team arrived.
    Closed {
        /// Closed site.
        site: SiteId,
    },
    /// The site closes before the visit could be completed.
    InsufficientTime {
        /// Site that closes too soon.
        site: SiteId,
    },
}

impl DayTermination {
    /// Whether the day ended because of a rule violation.
    #[must_use]
    pub const fn is_rule_violation(&self) -> bool {
        !matches!(self, Self::Empty | Self::Completed)
    }

    /// Site whose request ended the day, if any.
    #[must_use]
    pub const fn site(&self) -> Option<&SiteId> {
        match self {
            Self::Empty | Self::Completed => None,
            Self::RepeatVisit { site }
            | Self::OutOfTime { site }
            | Self::Closed { site }
            | Self::InsufficientTime { site } => Some(site),
        }
    }
}

/// Summary of a single simulated day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayOutcome {
    /// One-based day number.
    pub day: DayNumber,
    /// Points credited on this day.
    pub points: f64,
    /// Sites credited on this day, in visit order.
    pub visited: Vec<SiteId>,
    /// Clock reading when processing stopped.
    pub end_time: Minutes,
    /// Why processing stopped.
    pub termination: DayTermination,
}

impl DayOutcome {
    pub(crate) const fn rest(day: DayNumber) -> Self {
        Self {
            day,
            points: 0.0,
            visited: Vec::new(),
            end_time: Minutes::ZERO,
            termination: DayTermination::Empty,
        }
    }
}

/// Result of replaying a whole itinerary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Sum of the points of every credited site.
    pub total_score: f64,
    /// Credited sites in the order they were visited.
    pub visited: Vec<SiteId>,
    /// One entry per itinerary day, rest days included.
    pub days: Vec<DayOutcome>,
}

impl Evaluation {
    /// Total score rounded to `places` decimal places for display.
    ///
    /// # Examples
    /// ```
    /// use touring_core::Evaluation;
    ///
    /// let evaluation = Evaluation {
    ///     total_score: 12.345_678,
    ///     visited: Vec::new(),
    ///     days: Vec::new(),
    /// };
    /// assert_eq!(evaluation.rounded_score(2), "12.35");
    /// ```
    #[must_use]
    pub fn rounded_score(&self, places: usize) -> String {
        format!("{:.places$}", self.total_score)
    }

    /// Days that ended on a rule violation.
    pub fn violations(&self) -> impl Iterator<Item = &DayOutcome> {
        self.days
            .iter()
            .filter(|outcome| outcome.termination.is_rule_violation())
    }
}
