//! Candidate plans under evaluation.

use crate::SiteId;

/// Sites a team intends to visit on one day, in order.
///
/// An empty plan is a rest day: it still consumes a day number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct DayPlan {
    visits: Vec<SiteId>,
}

impl DayPlan {
    /// Construct a plan from ordered visit requests.
    #[must_use]
    pub const fn new(visits: Vec<SiteId>) -> Self {
        Self { visits }
    }

    /// A plan with no visits.
    #[must_use]
    pub const fn rest() -> Self {
        Self::new(Vec::new())
    }

    /// Ordered visit requests.
    #[must_use]
    pub fn visits(&self) -> &[SiteId] {
        &self.visits
    }

    /// Number of requested visits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Whether the day has no requested visits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}

impl<S: Into<SiteId>> FromIterator<S> for DayPlan {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Day-by-day plan. Day numbers are one-based positions in the list.
///
/// # Examples
/// ```
/// use touring_core::{DayPlan, Itinerary};
///
/// let itinerary = Itinerary::new(vec![
///     ["1", "4"].into_iter().collect(),
///     DayPlan::rest(),
///     ["2"].into_iter().collect(),
/// ]);
/// assert_eq!(itinerary.len(), 3);
/// assert!(itinerary.day(2).is_some_and(DayPlan::is_empty));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Itinerary {
    days: Vec<DayPlan>,
}

impl Itinerary {
    /// Construct an itinerary from day plans.
    #[must_use]
    pub const fn new(days: Vec<DayPlan>) -> Self {
        Self { days }
    }

    /// All day plans in order.
    #[must_use]
    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    /// Plan for a one-based day number.
    #[must_use]
    pub fn day(&self, day: u32) -> Option<&DayPlan> {
        let index = usize::try_from(day.checked_sub(1)?).ok()?;
        self.days.get(index)
    }

    /// Number of days, including rest days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the itinerary covers no days at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of visit requests across all days.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.days.iter().map(DayPlan::len).sum()
    }
}

impl FromIterator<DayPlan> for Itinerary {
    fn from_iter<I: IntoIterator<Item = DayPlan>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
