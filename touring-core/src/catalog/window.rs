//! Opening windows and per-day hours tables.

use std::collections::HashMap;

use thiserror::Error;

use crate::{Minutes, SiteId};

/// Errors returned by [`DayWindow::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DayWindowError {
    /// The window would close before it opens.
    #[error("window opens at {open} but closes at {close}")]
    ClosesBeforeOpening {
        /// Requested opening time.
        open: Minutes,
        /// Requested closing time.
        close: Minutes,
    },
}

/// The `[open, close)` range during which a site accepts visitors on one day.
///
/// # Examples
/// ```
/// use touring_core::{DayWindow, Minutes};
///
/// # fn main() -> Result<(), touring_core::DayWindowError> {
/// let window = DayWindow::new(Minutes::from_hours(9), Minutes::from_hours(17))?;
/// assert_eq!(window.open().to_string(), "09:00");
/// assert!(DayWindow::new(Minutes::from_hours(17), Minutes::from_hours(9)).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayWindow {
    open: Minutes,
    close: Minutes,
}

impl DayWindow {
    /// Validate and construct a window.
    ///
    /// # Errors
    /// Returns [`DayWindowError::ClosesBeforeOpening`] when `open > close`.
    pub const fn new(open: Minutes, close: Minutes) -> Result<Self, DayWindowError> {
        if open.get() > close.get() {
            return Err(DayWindowError::ClosesBeforeOpening { open, close });
        }
        Ok(Self { open, close })
    }

    /// Opening time.
    #[must_use]
    pub const fn open(self) -> Minutes {
        self.open
    }

    /// Closing time. Arrivals at this instant are turned away.
    #[must_use]
    pub const fn close(self) -> Minutes {
        self.close
    }
}

/// Opening windows for every site open on a given day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySchedule {
    windows: HashMap<SiteId, DayWindow>,
}

impl DaySchedule {
    /// Create an empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Window recorded for `site`, if any.
    #[must_use]
    pub fn get(&self, site: &SiteId) -> Option<DayWindow> {
        self.windows.get(site).copied()
    }

    /// Number of sites with a window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether no site has a window.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Iterate over the recorded windows in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&SiteId, DayWindow)> {
        self.windows.iter().map(|(site, window)| (site, *window))
    }

    /// Record a window, returning `false` when `site` already had one.
    pub(crate) fn insert(&mut self, site: SiteId, window: DayWindow) -> bool {
        match self.windows.entry(site) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(window);
                true
            }
        }
    }
}
