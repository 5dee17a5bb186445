//! Step-by-step narrative of a simulation.

use std::fmt;

use crate::{Coordinate, DayNumber, Minutes, SiteId};

/// A single decision taken while replaying an itinerary.
///
/// The `Display` implementation renders a human-readable sentence; the
/// events carry no weight in scoring.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// A day with at least one planned visit has begun.
    DayStarted {
        /// Day number.
        day: DayNumber,
    },
    /// A day with no planned visits was passed over.
    DaySkipped {
        /// Day number.
        day: DayNumber,
    },
    /// Clock reading before a visit request is considered.
    ClockReading {
        /// Current time.
        time: Minutes,
    },
    /// The next request names a site that has already been credited.
    RepeatVisit {
        /// Repeated site.
        site: SiteId,
    },
    /// The team walked to the next site.
    Travel {
        /// Destination site.
        site: SiteId,
        /// Position before the walk.
        from: Coordinate,
        /// Site position.
        to: Coordinate,
        /// Grid units walked, one minute each.
        distance: u64,
    },
    /// Travel pushed the clock past the end of the day.
    OutOfTime {
        /// Site that could not be reached in time.
        site: SiteId,
        /// Clock after travel.
        time: Minutes,
    },
    /// The team reached the site.
    Arrived {
        /// Site reached.
        site: SiteId,
        /// Arrival time.
        time: Minutes,
    },
    /// The team waited for the site to open.
    Waiting {
        /// Site waited on.
        site: SiteId,
        /// Opening time.
        until: Minutes,
    },
    /// The site had already closed on arrival.
    Closed {
        /// Closed site.
        site: SiteId,
        /// Closing time.
        close: Minutes,
    },
    /// The site closes before the required visit could finish.
    InsufficientTime {
        /// Site that closes too soon.
        site: SiteId,
        /// Time the visit would have finished.
        finish: Minutes,
        /// Closing time.
        close: Minutes,
    },
    /// The visit completed and its points were credited.
    Visited {
        /// Site credited.
        site: SiteId,
        /// Points gained.
        points: f64,
        /// Clock after the visit.
        departure: Minutes,
    },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DayStarted { day } => write!(f, "Day {day}"),
            Self::DaySkipped { day } => write!(f, "Day {day}: no visits planned"),
            Self::ClockReading { time } => write!(f, "The time is now {time}"),
            Self::RepeatVisit { site } => write!(
                f,
                "Site {site} has already been visited; doing nothing for the rest of the day"
            ),
            Self::Travel {
                site,
                from,
                to,
                distance,
            } => write!(
                f,
                "Heading to site {site} at {to} from {from}: {distance} units to travel"
            ),
            Self::OutOfTime { site, time } => write!(
                f,
                "Reaching site {site} would take until {time}; skipping to the next day"
            ),
            Self::Arrived { site, time } => write!(f, "Arrived at site {site} at {time}"),
            Self::Waiting { site, until } => {
                write!(f, "Site {site} is not open yet; waiting until {until}")
            }
            Self::Closed { site, close } => write!(
                f,
                "Site {site} closed at {close}; waiting until tomorrow"
            ),
            Self::InsufficientTime {
                site,
                finish,
                close,
            } => write!(
                f,
                "Site {site} closes at {close} but the visit would end at {finish}; waiting until tomorrow"
            ),
            Self::Visited {
                site,
                points,
                departure,
            } => write!(
                f,
                "Visited site {site} until {departure}: {points} points gained"
            ),
        }
    }
}

/// Receives trace events as the simulator produces them.
pub trait TraceSink {
    /// Observe one event.
    fn record(&mut self, event: &TraceEvent);
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl TraceSink for Discard {
    fn record(&mut self, _event: &TraceEvent) {}
}

impl TraceSink for Vec<TraceEvent> {
    fn record(&mut self, event: &TraceEvent) {
        self.push(event.clone());
    }
}
