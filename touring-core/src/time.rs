//! Minutes-from-midnight clock values.
//!
//! The simulator counts time in whole minutes from the start of a day. Travel
//! adds one minute per grid unit, so the clock can run past midnight; callers
//! detect that through [`Minutes::hour`].

use std::fmt;

const MINUTES_PER_HOUR: u32 = 60;

/// A count of minutes since midnight.
///
/// Arithmetic saturates at `u32::MAX` rather than wrapping so a runaway
/// clock still reads as past the end of the day.
///
/// # Examples
/// ```
/// use touring_core::Minutes;
///
/// let time = Minutes::new(545);
/// assert_eq!(time.hour(), 9);
/// assert_eq!(time.minute(), 5);
/// assert_eq!(time.to_string(), "09:05");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Minutes(u32);

impl Minutes {
    /// Midnight.
    pub const ZERO: Self = Self(0);

    /// Wrap a raw minute count.
    #[must_use]
    pub const fn new(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Convert whole hours into minutes.
    ///
    /// # Examples
    /// ```
    /// use touring_core::Minutes;
    ///
    /// assert_eq!(Minutes::from_hours(9), Minutes::new(540));
    /// ```
    #[must_use]
    pub const fn from_hours(hours: u32) -> Self {
        Self(hours.saturating_mul(MINUTES_PER_HOUR))
    }

    /// Return the raw minute count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Hour component of the `HH:MM` reading.
    ///
    /// Values at or beyond 1440 report hours of 24 and above.
    #[must_use]
    pub const fn hour(self) -> u32 {
        self.0.div_euclid(MINUTES_PER_HOUR)
    }

    /// Minute component of the `HH:MM` reading.
    #[must_use]
    pub const fn minute(self) -> u32 {
        self.0.rem_euclid(MINUTES_PER_HOUR)
    }

    /// Add another span, saturating at the maximum representable time.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Advance by a travel distance measured in grid units.
    ///
    /// One unit costs one minute. Distances too large for the clock saturate.
    #[must_use]
    pub fn advance_by(self, units: u64) -> Self {
        let step = u32::try_from(units).unwrap_or(u32::MAX);
        Self(self.0.saturating_add(step))
    }
}

impl From<u32> for Minutes {
    fn from(minutes: u32) -> Self {
        Self(minutes)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
