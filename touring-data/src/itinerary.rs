//! Reader for itinerary files: one line per day, site ids separated by
//! whitespace. A blank line is a rest day and still consumes a day number.

use touring_core::{DayPlan, Itinerary};

/// Parse itinerary text.
///
/// Parsing never fails; unknown ids are reported by the simulator.
///
/// # Examples
/// ```
/// use touring_data::parse_itinerary;
///
/// let itinerary = parse_itinerary("1 2\n\n3\n");
/// assert_eq!(itinerary.len(), 3);
/// assert!(itinerary.day(2).is_some_and(|plan| plan.is_empty()));
/// ```
#[must_use]
pub fn parse_itinerary(text: &str) -> Itinerary {
    text.lines()
        .map(|line| line.split_whitespace().collect::<DayPlan>())
        .collect()
}
