//! Unit tests for the itinerary simulator.

use super::*;
use crate::test_support::{catalog_open_daily, itinerary, site};
use crate::{DayWindow, InMemoryCatalog, Minutes};
use rstest::{fixture, rstest};

/// Two sites seven units apart, open all morning on three days.
#[fixture]
fn pair_catalog() -> InMemoryCatalog {
    catalog_open_daily(
        vec![site("a", 0, 0, 60, 10.0), site("b", 3, 4, 30, 2.5)],
        3,
        (0, 600),
    )
}

fn window(open: u32, close: u32) -> DayWindow {
    DayWindow::new(Minutes::new(open), Minutes::new(close)).expect("valid window")
}

/// Origin `a` plus a destination `b` reached after `distance` minutes of
/// travel, with `b` keeping the given window on day 1.
fn destination_catalog(distance: i64, duration: u32, hours: (u32, u32)) -> InMemoryCatalog {
    let mut builder = InMemoryCatalog::builder();
    builder.add_site(site("a", 0, 0, 0, 1.0)).expect("site a");
    builder
        .add_site(site("b", distance, 0, duration, 5.0))
        .expect("site b");
    builder
        .add_window(1, &"a".into(), window(0, 60))
        .expect("window a");
    builder
        .add_window(1, &"b".into(), window(hours.0, hours.1))
        .expect("window b");
    builder.build()
}

fn evaluate(catalog: &InMemoryCatalog, days: &[&[&str]]) -> Evaluation {
    Simulator::new(catalog)
        .evaluate(&itinerary(days))
        .expect("simulation should succeed")
}

fn only_day(evaluation: &Evaluation) -> &DayOutcome {
    evaluation.days.first().expect("one day simulated")
}

#[rstest]
fn single_visit_scores_and_advances_clock(pair_catalog: InMemoryCatalog) {
    let evaluation = evaluate(&pair_catalog, &[&["a"]]);

    assert_eq!(evaluation.total_score, 10.0);
    let day = only_day(&evaluation);
    assert_eq!(day.end_time, Minutes::new(60));
    assert_eq!(day.termination, DayTermination::Completed);
    assert_eq!(evaluation.visited, vec![SiteId::from("a")]);
}

#[rstest]
fn travel_uses_manhattan_distance(pair_catalog: InMemoryCatalog) {
    let evaluation = evaluate(&pair_catalog, &[&["a", "b"]]);

    // 60 minutes at a, 7 minutes walking, 30 minutes at b.
    assert_eq!(only_day(&evaluation).end_time, Minutes::new(97));
    assert_eq!(evaluation.total_score, 12.5);
}

#[rstest]
fn first_visit_of_each_day_travels_nowhere(pair_catalog: InMemoryCatalog) {
    let mut trace = Vec::new();
    Simulator::new(&pair_catalog)
        .evaluate_with(&itinerary(&[&["a"], &["b"]]), &mut trace)
        .expect("simulation should succeed");

    let distances: Vec<u64> = trace
        .iter()
        .filter_map(|event| match event {
            TraceEvent::Travel { distance, .. } => Some(*distance),
            _ => None,
        })
        .collect();
    assert_eq!(distances, vec![0, 0]);
}

#[rstest]
fn repeat_in_same_day_ends_the_day() {
    let catalog = catalog_open_daily(
        vec![
            site("a", 0, 0, 10, 1.0),
            site("b", 1, 0, 10, 2.0),
            site("c", 2, 0, 10, 4.0),
        ],
        1,
        (0, 600),
    );
    let evaluation = evaluate(&catalog, &[&["a", "b", "a", "c"]]);

    assert_eq!(evaluation.total_score, 3.0);
    let day = only_day(&evaluation);
    assert_eq!(
        day.termination,
        DayTermination::RepeatVisit { site: "a".into() }
    );
    assert_eq!(day.visited, vec![SiteId::from("a"), SiteId::from("b")]);
}

#[rstest]
fn repeat_on_later_day_ends_that_day(pair_catalog: InMemoryCatalog) {
    let evaluation = evaluate(&pair_catalog, &[&["a"], &["a", "b"]]);

    assert_eq!(evaluation.total_score, 10.0);
    let second = evaluation.days.get(1).expect("second day");
    assert_eq!(
        second.termination,
        DayTermination::RepeatVisit { site: "a".into() }
    );
    assert!(second.visited.is_empty());
    assert_eq!(second.end_time, Minutes::ZERO);
}

#[rstest]
fn empty_day_consumes_a_day_number() {
    let mut builder = InMemoryCatalog::builder();
    builder.add_site(site("a", 0, 0, 60, 10.0)).expect("site");
    builder
        .add_window(2, &"a".into(), window(0, 600))
        .expect("window on day two only");
    let catalog = builder.build();

    let evaluation = evaluate(&catalog, &[&[], &["a"]]);

    assert_eq!(evaluation.total_score, 10.0);
    let rest = evaluation.days.first().expect("rest day");
    assert_eq!(rest.termination, DayTermination::Empty);
    assert_eq!(rest.points, 0.0);
    assert_eq!(evaluation.days.get(1).map(|day| day.day), Some(2));
}

#[rstest]
#[case::last_minute_of_day(1439, DayTermination::Completed, 6.0)]
#[case::midnight(1440, DayTermination::OutOfTime { site: "b".into() }, 1.0)]
fn day_overflow_checks_the_hour_component(
    #[case] distance: i64,
    #[case] expected: DayTermination,
    #[case] score: f64,
) {
    let catalog = destination_catalog(distance, 0, (0, 2000));
    let evaluation = evaluate(&catalog, &[&["a", "b"]]);

    assert_eq!(only_day(&evaluation).termination, expected);
    assert_eq!(evaluation.total_score, score);
}

#[rstest]
fn arrival_at_opening_time_does_not_wait() {
    let catalog = destination_catalog(100, 10, (100, 200));
    let mut trace = Vec::new();
    let evaluation = Simulator::new(&catalog)
        .evaluate_with(&itinerary(&[&["a", "b"]]), &mut trace)
        .expect("simulation should succeed");

    assert!(
        !trace
            .iter()
            .any(|event| matches!(event, TraceEvent::Waiting { .. }))
    );
    assert_eq!(only_day(&evaluation).end_time, Minutes::new(110));
    assert_eq!(evaluation.total_score, 6.0);
}

#[rstest]
fn early_arrival_waits_for_opening() {
    let catalog = destination_catalog(10, 60, (300, 600));
    let mut trace = Vec::new();
    let evaluation = Simulator::new(&catalog)
        .evaluate_with(&itinerary(&[&["a", "b"]]), &mut trace)
        .expect("simulation should succeed");

    assert!(trace.contains(&TraceEvent::Waiting {
        site: "b".into(),
        until: Minutes::new(300),
    }));
    assert_eq!(only_day(&evaluation).end_time, Minutes::new(360));
}

#[rstest]
#[case::arrival_at_close(100, 10, (0, 100), DayTermination::Closed { site: "b".into() })]
#[case::zero_length_visit_at_close(100, 0, (0, 100), DayTermination::Closed { site: "b".into() })]
#[case::after_close(150, 0, (0, 100), DayTermination::Closed { site: "b".into() })]
#[case::one_minute_short(100, 51, (0, 150), DayTermination::InsufficientTime { site: "b".into() })]
fn late_arrivals_are_not_credited(
    #[case] distance: i64,
    #[case] duration: u32,
    #[case] hours: (u32, u32),
    #[case] expected: DayTermination,
) {
    let catalog = destination_catalog(distance, duration, hours);
    let evaluation = evaluate(&catalog, &[&["a", "b"]]);

    assert_eq!(only_day(&evaluation).termination, expected);
    assert_eq!(evaluation.total_score, 1.0);
    assert_eq!(evaluation.visited, vec![SiteId::from("a")]);
}

#[rstest]
fn visit_ending_exactly_at_close_is_credited() {
    let catalog = destination_catalog(100, 50, (0, 150));
    let evaluation = evaluate(&catalog, &[&["a", "b"]]);

    let day = only_day(&evaluation);
    assert_eq!(day.termination, DayTermination::Completed);
    assert_eq!(day.end_time, Minutes::new(150));
    assert_eq!(evaluation.total_score, 6.0);
}

#[rstest]
fn rule_violation_does_not_abort_the_run() {
    let catalog = catalog_open_daily(
        vec![site("a", 0, 0, 700, 10.0), site("b", 0, 0, 60, 3.0)],
        2,
        (0, 600),
    );
    let evaluation = evaluate(&catalog, &[&["a", "b"], &["b"]]);

    let first = evaluation.days.first().expect("first day");
    assert_eq!(
        first.termination,
        DayTermination::InsufficientTime { site: "a".into() }
    );
    assert_eq!(evaluation.total_score, 3.0);
    assert_eq!(evaluation.violations().count(), 1);
}

#[rstest]
fn unknown_site_aborts_with_configuration_error(pair_catalog: InMemoryCatalog) {
    let err = Simulator::new(&pair_catalog)
        .evaluate(&itinerary(&[&["a"], &["zzz"]]))
        .expect_err("unknown site should abort");
    assert_eq!(
        err,
        SimulationError::Catalog {
            day: 2,
            source: CatalogError::UnknownSite { site: "zzz".into() },
        }
    );
}

#[rstest]
fn missing_day_table_aborts_with_configuration_error(pair_catalog: InMemoryCatalog) {
    let err = Simulator::new(&pair_catalog)
        .evaluate(&itinerary(&[&[], &[], &[], &["a"]]))
        .expect_err("day four has no hours");
    assert_eq!(
        err,
        SimulationError::Catalog {
            day: 4,
            source: CatalogError::UnknownDay { day: 4 },
        }
    );
}

#[rstest]
fn missing_site_window_aborts_with_configuration_error() {
    let mut builder = InMemoryCatalog::builder();
    builder.add_site(site("a", 0, 0, 0, 1.0)).expect("site a");
    builder.add_site(site("b", 0, 0, 0, 1.0)).expect("site b");
    builder
        .add_window(1, &"a".into(), window(0, 60))
        .expect("window a");
    let catalog = builder.build();

    let err = Simulator::new(&catalog)
        .evaluate(&itinerary(&[&["a", "b"]]))
        .expect_err("b has no window");
    assert_eq!(
        err,
        SimulationError::Catalog {
            day: 1,
            source: CatalogError::UnknownSchedule {
                day: 1,
                site: "b".into()
            },
        }
    );
}

#[rstest]
fn evaluation_is_repeatable(pair_catalog: InMemoryCatalog) {
    let simulator = Simulator::new(&pair_catalog);
    let plan = itinerary(&[&["a", "b"], &["b", "a"]]);

    let first = simulator.evaluate(&plan).expect("first run");
    let second = simulator.evaluate(&plan).expect("second run");
    assert_eq!(first, second);
}

#[rstest]
fn empty_itinerary_scores_zero(pair_catalog: InMemoryCatalog) {
    let evaluation = evaluate(&pair_catalog, &[]);
    assert_eq!(evaluation.total_score, 0.0);
    assert!(evaluation.days.is_empty());
}
