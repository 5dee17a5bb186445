//! Strict reader for the flat-file site catalog.
//!
//! The file holds two whitespace-separated tables, each introduced by a
//! header row:
//!
//! ```text
//! site avenue street desiredtime value
//! 1 3 4 1.5 20.25
//! site day beginhour endhour
//! 1 1 9 17
//! ```
//!
//! Durations and opening hours are given in hours and stored in minutes.
//! Unlike a lenient reader, a row that fails to parse is reported with its
//! line number rather than being mistaken for a header.

use log::{debug, warn};
use touring_core::{
    Catalog, CatalogBuilder, Coordinate, DayNumber, DayWindow, InMemoryCatalog, Minutes, Site, SiteId,
};

use crate::{CatalogParseError, Section};

/// Parse catalog text into an immutable catalog.
///
/// # Errors
/// Returns [`CatalogParseError`] describing the first malformed row.
///
/// # Examples
/// ```
/// use touring_core::{Catalog, Minutes};
/// use touring_data::parse_catalog;
///
/// let catalog = parse_catalog(
///     "site avenue street desiredtime value\n\
///      1 3 4 1.5 20\n\
///      site day beginhour endhour\n\
///      1 1 9 17\n",
/// )?;
/// let window = catalog.hours_for(1, &"1".into())?;
/// assert_eq!(window.open(), Minutes::new(540));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_catalog(text: &str) -> Result<InMemoryCatalog, CatalogParseError> {
    let mut parser = CatalogParser::default();
    for (line, row) in (1..).zip(text.lines()) {
        let tokens: Vec<&str> = row.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        parser.accept(line, &tokens)?;
    }
    parser.finish()
}

#[derive(Default)]
struct CatalogParser {
    section: Option<Section>,
    builder: CatalogBuilder,
    sites: usize,
    windows: usize,
}

impl CatalogParser {
    fn accept(&mut self, line: usize, tokens: &[&str]) -> Result<(), CatalogParseError> {
        if is_header(tokens) {
            return self.enter_next_section(line, tokens.len());
        }
        let section = self
            .section
            .ok_or(CatalogParseError::MissingHeader { line })?;
        match (section, tokens) {
            (Section::Sites, [id, avenue, street, duration, points]) => {
                let site = parse_site(line, id, [avenue, street, duration, points])?;
                self.builder
                    .add_site(site)
                    .map_err(|source| CatalogParseError::Conflict { line, source })?;
                self.sites += 1;
                Ok(())
            }
            (Section::Hours, [id, day, open, close]) => {
                let (day_number, window) = parse_window(line, day, open, close)?;
                self.builder
                    .add_window(day_number, &SiteId::from(*id), window)
                    .map_err(|source| CatalogParseError::Conflict { line, source })?;
                self.windows += 1;
                Ok(())
            }
            (_, other) => Err(CatalogParseError::ColumnCount {
                line,
                section,
                expected: section.columns(),
                found: other.len(),
            }),
        }
    }

    fn enter_next_section(&mut self, line: usize, found: usize) -> Result<(), CatalogParseError> {
        let next = match self.section {
            None => Section::Sites,
            Some(Section::Sites) => Section::Hours,
            Some(Section::Hours) => return Err(CatalogParseError::UnexpectedSection { line }),
        };
        if found != next.columns() {
            return Err(CatalogParseError::ColumnCount {
                line,
                section: next,
                expected: next.columns(),
                found,
            });
        }
        debug!("line {line}: entering {next} section");
        self.section = Some(next);
        Ok(())
    }

    fn finish(self) -> Result<InMemoryCatalog, CatalogParseError> {
        match self.section {
            None => Err(CatalogParseError::MissingSection {
                section: Section::Sites,
            }),
            Some(Section::Sites) => Err(CatalogParseError::MissingSection {
                section: Section::Hours,
            }),
            Some(Section::Hours) => {
                debug!(
                    "parsed {} sites and {} opening windows",
                    self.sites, self.windows
                );
                let catalog = self.builder.build();
                warn_unscheduled(&catalog);
                Ok(catalog)
            }
        }
    }
}

/// A header is a row whose columns after the first are all non-numeric.
fn is_header(tokens: &[&str]) -> bool {
    tokens
        .iter()
        .skip(1)
        .all(|token| token.parse::<f64>().is_err())
}

fn parse_site(
    line: usize,
    id: &str,
    [avenue, street, duration, points]: [&&str; 4],
) -> Result<Site, CatalogParseError> {
    let location = Coordinate::new(
        parse_integer(line, "avenue", avenue)?,
        parse_integer(line, "street", street)?,
    );
    let visit = parse_hours(line, "desiredtime", duration)?;
    let value = parse_real(line, "value", points)?;
    Site::new(id, location, visit, value)
        .map_err(|source| CatalogParseError::InvalidSite { line, source })
}

fn parse_window(
    line: usize,
    day: &str,
    open: &str,
    close: &str,
) -> Result<(DayNumber, DayWindow), CatalogParseError> {
    let day_number = day
        .parse::<DayNumber>()
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| invalid(line, "day", day))?;
    let window = DayWindow::new(
        parse_hours(line, "beginhour", open)?,
        parse_hours(line, "endhour", close)?,
    )
    .map_err(|source| CatalogParseError::InvalidWindow { line, source })?;
    Ok((day_number, window))
}

fn parse_integer(line: usize, column: &'static str, raw: &str) -> Result<i64, CatalogParseError> {
    raw.parse().map_err(|_| invalid(line, column, raw))
}

fn parse_real(line: usize, column: &'static str, raw: &str) -> Result<f64, CatalogParseError> {
    raw.parse().map_err(|_| invalid(line, column, raw))
}

fn parse_hours(line: usize, column: &'static str, raw: &str) -> Result<Minutes, CatalogParseError> {
    parse_real(line, column, raw)
        .ok()
        .and_then(hours_to_minutes)
        .ok_or_else(|| invalid(line, column, raw))
}

/// Convert a non-negative number of hours to minutes, rounding to the nearest
/// minute.
#[expect(
    clippy::float_arithmetic,
    reason = "file hours are real-valued and scale by sixty"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is range-checked against u32 before the cast"
)]
fn hours_to_minutes(hours: f64) -> Option<Minutes> {
    let minutes = (hours * 60.0).round();
    if !minutes.is_finite() || minutes < 0.0 || minutes > f64::from(u32::MAX) {
        return None;
    }
    Some(Minutes::new(minutes as u32))
}

fn invalid(line: usize, column: &'static str, raw: &str) -> CatalogParseError {
    CatalogParseError::InvalidNumber {
        line,
        column,
        value: raw.to_owned(),
    }
}

fn warn_unscheduled(catalog: &InMemoryCatalog) {
    let days: Vec<DayNumber> = catalog.days().collect();
    for site in catalog.sites() {
        let scheduled = days
            .iter()
            .any(|day| catalog.hours_for(*day, site.id()).is_ok());
        if !scheduled {
            warn!("site {} has no opening hours on any day", site.id());
        }
    }
}
