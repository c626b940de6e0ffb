use chrono::{NaiveDate, NaiveTime};

use torneo_backend::league::calendar::next_fixture_id;
use torneo_backend::models::fixture::Fixture;

fn fixture(id: i64, data: Option<NaiveDate>, risultato: Option<&str>) -> Fixture {
    Fixture {
        id,
        data,
        risultato: risultato.map(|r| r.to_string()),
        ..Fixture::default()
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn next_fixture_is_the_earliest_undecided_on_or_after_today() {
    // Arrange
    let today = day(2026, 4, 10);
    let fixtures = vec![
        fixture(1, Some(day(2026, 4, 3)), Some("2-1")),
        fixture(2, Some(day(2026, 4, 24)), None),
        fixture(3, Some(day(2026, 4, 17)), None),
    ];

    // Act & Assert
    assert_eq!(next_fixture_id(&fixtures, today), Some(3));
}

#[test]
fn decided_fixtures_never_qualify_as_next() {
    let today = day(2026, 4, 10);
    let fixtures = vec![
        fixture(1, Some(day(2026, 4, 12)), Some("0-0")),
        fixture(2, Some(day(2026, 4, 19)), None),
    ];

    assert_eq!(next_fixture_id(&fixtures, today), Some(2));
}

#[test]
fn fixture_played_today_still_counts_as_next() {
    let today = day(2026, 4, 10);
    let fixtures = vec![fixture(1, Some(today), None)];

    assert_eq!(next_fixture_id(&fixtures, today), Some(1));
}

#[test]
fn past_and_undated_fixtures_yield_no_next() {
    let today = day(2026, 4, 10);
    let fixtures = vec![
        fixture(1, Some(day(2026, 4, 3)), None),
        fixture(2, None, None),
    ];

    assert_eq!(next_fixture_id(&fixtures, today), None);
}

#[test]
fn kickoff_time_breaks_same_day_ties() {
    // Arrange: two undecided fixtures on the same day.
    let today = day(2026, 4, 10);
    let mut late = fixture(1, Some(day(2026, 4, 17)), None);
    late.ora = NaiveTime::from_hms_opt(21, 30, 0);
    let mut early = fixture(2, Some(day(2026, 4, 17)), None);
    early.ora = NaiveTime::from_hms_opt(19, 0, 0);

    // Act & Assert
    assert_eq!(next_fixture_id(&[late, early], today), Some(2));
}

#[test]
fn empty_calendar_has_no_next_fixture() {
    assert_eq!(next_fixture_id(&[], day(2026, 4, 10)), None);
}
