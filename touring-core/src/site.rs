//! Sites that an itinerary may visit.

use std::borrow::Borrow;
use std::fmt;

use thiserror::Error;

use crate::Minutes;

/// Identifier of a catalogued site.
///
/// Identifiers are opaque strings taken verbatim from the catalog and
/// itinerary files.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SiteId(String);

impl SiteId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SiteId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for SiteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for SiteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Grid position of a site.
///
/// The city is a Manhattan grid: moving one avenue or one street costs one
/// unit of travel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Avenue index.
    pub avenue: i64,
    /// Street index.
    pub street: i64,
}

impl Coordinate {
    /// Construct a coordinate.
    #[must_use]
    pub const fn new(avenue: i64, street: i64) -> Self {
        Self { avenue, street }
    }

    /// Sum of the absolute differences along each axis.
    ///
    /// # Examples
    /// ```
    /// use touring_core::Coordinate;
    ///
    /// let from = Coordinate::new(0, 0);
    /// assert_eq!(from.manhattan_distance(Coordinate::new(3, 4)), 7);
    /// ```
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u64 {
        self.avenue
            .abs_diff(other.avenue)
            .saturating_add(self.street.abs_diff(other.street))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.avenue, self.street)
    }
}

/// Errors returned by [`Site::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    /// The point value was NaN or infinite.
    #[error("site {site} has a non-finite point value")]
    NonFinitePoints {
        /// Offending site.
        site: SiteId,
    },
    /// The point value was below zero.
    #[error("site {site} has negative point value {points}")]
    NegativePoints {
        /// Offending site.
        site: SiteId,
        /// Value supplied.
        points: f64,
    },
}

/// A catalogued location with its visit requirements.
///
/// # Examples
/// ```
/// use touring_core::{Coordinate, Minutes, Site};
///
/// # fn main() -> Result<(), touring_core::SiteError> {
/// let site = Site::new("library", Coordinate::new(2, 5), Minutes::new(90), 12.5)?;
/// assert_eq!(site.id().as_str(), "library");
/// assert_eq!(site.visit_duration(), Minutes::new(90));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Site {
    id: SiteId,
    location: Coordinate,
    visit_duration: Minutes,
    points: f64,
}

impl Site {
    /// Validate and construct a site.
    ///
    /// # Errors
    /// Returns [`SiteError`] when `points` is negative or not finite.
    pub fn new(
        id: impl Into<SiteId>,
        location: Coordinate,
        visit_duration: Minutes,
        points: f64,
    ) -> Result<Self, SiteError> {
        let site = id.into();
        if !points.is_finite() {
            return Err(SiteError::NonFinitePoints { site });
        }
        if points < 0.0 {
            return Err(SiteError::NegativePoints { site, points });
        }
        Ok(Self {
            id: site,
            location,
            visit_duration,
            points,
        })
    }

    /// Site identifier.
    #[must_use]
    pub const fn id(&self) -> &SiteId {
        &self.id
    }

    /// Grid position.
    #[must_use]
    pub const fn location(&self) -> Coordinate {
        self.location
    }

    /// Time that must be spent on site for the visit to count.
    #[must_use]
    pub const fn visit_duration(&self) -> Minutes {
        self.visit_duration
    }

    /// Points credited for a completed visit.
    #[must_use]
    pub const fn points(&self) -> f64 {
        self.points
    }
}
