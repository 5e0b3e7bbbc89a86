//! Working-hours scenarios over the standard office week.
//!
//! These integration tests exercise `WorkingHoursCalculator` end to end:
//! weekend derivation, same-day ranges around lunch, multi-day ranges across
//! weekends and holidays, and the clamped boundary mode.

use approx::assert_abs_diff_eq;
use chrono::{NaiveDate, NaiveDateTime};

use wh_time::{
    BoundaryMode, DaySchedule, LunchRule, Validation, Weekday, WorkWindow, WorkingHoursBuilder,
    WorkingHoursCalculator,
};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// Monday to Friday 09:00–17:00, Saturday 09:00–12:00.
fn office_week() -> DaySchedule {
    DaySchedule::uniform(
        [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
        ],
        WorkWindow::new(9.0, 17.0),
    )
    .with(Weekday::Saturday, WorkWindow::new(9.0, 12.0))
}

fn office() -> WorkingHoursBuilder {
    WorkingHoursCalculator::builder()
        .with_schedule(office_week())
        .weekend_from_schedule()
        .with_reference_year(2013)
}

fn hours(calc: &WorkingHoursCalculator, a: NaiveDateTime, b: NaiveDateTime) -> f64 {
    calc.hours_between(a, b).unwrap()
}

// ─── Weekend derivation ──────────────────────────────────────────────────────

#[test]
fn standard_weekend() {
    let calc = WorkingHoursCalculator::builder()
        .with_schedule(DaySchedule::uniform(
            [
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday,
            ],
            WorkWindow::new(9.0, 18.0),
        ))
        .weekend_from_schedule()
        .with_reference_year(2013)
        .build()
        .unwrap();
    assert_eq!(
        calc.weekend().to_vec(),
        vec![Weekday::Saturday, Weekday::Sunday]
    );
}

#[test]
fn long_weekend() {
    let calc = WorkingHoursCalculator::builder()
        .with_schedule(DaySchedule::uniform(
            [Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
            WorkWindow::new(9.0, 17.0),
        ))
        .weekend_from_schedule()
        .with_reference_year(2013)
        .build()
        .unwrap();
    assert_eq!(
        calc.weekend().to_vec(),
        vec![
            Weekday::Tuesday,
            Weekday::Thursday,
            Weekday::Saturday,
            Weekday::Sunday
        ]
    );
}

#[test]
fn duplicated_schedule_entries() {
    let schedule: DaySchedule = [
        (Weekday::Monday, WorkWindow::new(9.0, 17.0)),
        (Weekday::Monday, WorkWindow::new(9.0, 17.0)),
        (Weekday::Tuesday, WorkWindow::new(9.0, 17.0)),
        (Weekday::Wednesday, WorkWindow::new(9.0, 17.0)),
        (Weekday::Wednesday, WorkWindow::new(9.0, 17.0)),
        (Weekday::Thursday, WorkWindow::new(9.0, 17.0)),
        (Weekday::Friday, WorkWindow::new(9.0, 17.0)),
        (Weekday::Saturday, WorkWindow::new(9.0, 12.0)),
        (Weekday::Saturday, WorkWindow::new(9.0, 12.0)),
    ]
    .into_iter()
    .collect();
    let calc = WorkingHoursCalculator::builder()
        .with_schedule(schedule)
        .weekend_from_schedule()
        .with_reference_year(2013)
        .build()
        .unwrap();
    assert_eq!(calc.weekend().to_vec(), vec![Weekday::Sunday]);
}

#[test]
fn explicit_weekend_is_honored_unchanged() {
    let calc = office()
        .with_weekend([Weekday::Saturday, Weekday::Sunday])
        .build()
        .unwrap();
    // Saturday has a window but is still a weekend day.
    assert_eq!(
        calc.weekend().to_vec(),
        vec![Weekday::Saturday, Weekday::Sunday]
    );
    assert!(!calc.is_working_day(NaiveDate::from_ymd_opt(2013, 1, 26).unwrap()));
}

// ─── Same day ────────────────────────────────────────────────────────────────

#[test]
fn same_instant_is_zero() {
    let calc = office().build().unwrap();
    let t = at(2013, 1, 22, 12, 8);
    assert_eq!(hours(&calc, t, t), 0.0);
}

#[test]
fn same_day() {
    let calc = office().build().unwrap();
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 23, 9, 30), at(2013, 1, 23, 16, 0)),
        5.5
    );
}

#[test]
fn same_day_begin_in_lunch() {
    let calc = office().build().unwrap();
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 23, 13, 30), at(2013, 1, 23, 17, 0)),
        3.5
    );
}

#[test]
fn same_day_end_in_lunch() {
    let calc = office().build().unwrap();
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 23, 10, 0), at(2013, 1, 23, 13, 30)),
        3.5
    );
}

#[test]
fn same_day_exact_lunch_rule() {
    let calc = office().with_lunch_rule(LunchRule::Exact).build().unwrap();
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 23, 13, 30), at(2013, 1, 23, 17, 0)),
        3.0
    );
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 23, 10, 0), at(2013, 1, 23, 13, 30)),
        3.0
    );
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 23, 9, 30), at(2013, 1, 23, 16, 0)),
        5.5
    );
}

#[test]
fn same_day_ignores_schedule_when_permissive() {
    let calc = office().build().unwrap();
    // Sunday, 2013-01-27
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 27, 10, 0), at(2013, 1, 27, 12, 0)),
        2.0
    );
}

// ─── Several days ────────────────────────────────────────────────────────────

#[test]
fn order_does_not_matter() {
    let calc = office().build().unwrap();
    let a = at(2013, 1, 21, 10, 15);
    let b = at(2013, 1, 30, 15, 45);
    assert_eq!(hours(&calc, a, b), hours(&calc, b, a));
}

#[test]
fn crossing_one_weekend_day() {
    let calc = office().build().unwrap();
    // Saturday 10:00 -> Monday 11:00; Sunday is the only weekend day.
    let saturday = hours(&calc, at(2013, 1, 26, 10, 0), at(2013, 1, 26, 12, 0));
    let monday = hours(&calc, at(2013, 1, 28, 9, 0), at(2013, 1, 28, 11, 0));
    let total = hours(&calc, at(2013, 1, 26, 10, 0), at(2013, 1, 28, 11, 0));
    assert_abs_diff_eq!(saturday, 2.0);
    assert_abs_diff_eq!(monday, 2.0);
    assert_abs_diff_eq!(total, saturday + monday);

    // Same time of day on both ends: Saturday (10, 12) and Monday (9, 10).
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 26, 10, 0), at(2013, 1, 28, 10, 0)),
        3.0
    );
}

#[test]
fn friday_to_monday_skips_weekend() {
    let calc = WorkingHoursCalculator::builder()
        .with_reference_year(2013)
        .build()
        .unwrap();
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 25, 15, 0), at(2013, 1, 28, 10, 0)),
        4.0
    );
}

#[test]
fn full_week() {
    let calc = WorkingHoursCalculator::builder()
        .with_reference_year(2013)
        .build()
        .unwrap();
    // Monday 09:00 -> Friday 18:00, 8 hours a day after lunch.
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 21, 9, 0), at(2013, 1, 25, 18, 0)),
        40.0
    );
}

#[test]
fn end_day_is_not_counted_twice() {
    let calc = WorkingHoursCalculator::builder()
        .with_reference_year(2013)
        .build()
        .unwrap();
    // Same time of day: Monday in full, Tuesday in full, nothing on Wednesday.
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 21, 9, 0), at(2013, 1, 23, 9, 0)),
        16.0
    );
    // End earlier in the day than the start.
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 21, 10, 0), at(2013, 1, 23, 9, 0)),
        15.0
    );
    // End later in the day than the start.
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 21, 9, 0), at(2013, 1, 23, 10, 0)),
        17.0
    );
}

#[test]
fn weekend_end_day_uses_monday_window() {
    let calc = WorkingHoursCalculator::builder()
        .with_reference_year(2013)
        .build()
        .unwrap();
    // Friday 17:00 -> Sunday 12:00: (17, 18) + Monday's (9, 12) for Sunday.
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 25, 17, 0), at(2013, 1, 27, 12, 0)),
        4.0
    );
}

#[test]
fn start_after_closing_goes_negative() {
    let calc = WorkingHoursCalculator::builder()
        .with_reference_year(2013)
        .build()
        .unwrap();
    // Monday 20:00 -> Tuesday 10:00: (20, 18) + (9, 10).
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 21, 20, 0), at(2013, 1, 22, 10, 0)),
        -1.0
    );
}

// ─── Holidays ────────────────────────────────────────────────────────────────

#[test]
fn holiday_contributes_nothing() {
    let calc = WorkingHoursCalculator::builder()
        .with_reference_year(2013)
        .build()
        .unwrap();
    // 2013-12-25 is a Wednesday.
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 12, 24, 9, 0), at(2013, 12, 26, 18, 0)),
        16.0
    );
}

#[test]
fn holiday_on_boundary_day() {
    // Tuesday 09:00 -> Christmas Wednesday 12:00.
    let (a, b) = (at(2013, 12, 24, 9, 0), at(2013, 12, 25, 12, 0));

    // Boundary days count even on holidays: (9, 18) less lunch + (9, 12).
    let permissive = WorkingHoursCalculator::builder()
        .with_reference_year(2013)
        .build()
        .unwrap();
    assert_abs_diff_eq!(hours(&permissive, a, b), 11.0);

    // A holiday boundary day contributes nothing.
    let clamped = WorkingHoursCalculator::builder()
        .with_reference_year(2013)
        .with_boundary(BoundaryMode::Clamped)
        .build()
        .unwrap();
    assert_abs_diff_eq!(hours(&clamped, a, b), 8.0);
    assert_abs_diff_eq!(hours(&clamped, b, a), 8.0);
}

#[test]
fn holidays_only_match_reference_year() {
    let calc = WorkingHoursCalculator::builder()
        .with_reference_year(2014)
        .build()
        .unwrap();
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 12, 24, 9, 0), at(2013, 12, 26, 18, 0)),
        24.0
    );
}

#[test]
fn custom_holidays() {
    let calc = WorkingHoursCalculator::builder()
        .with_holidays([(1u32, 22u32), (1, 23)])
        .with_reference_year(2013)
        .build()
        .unwrap();
    // Monday 09:00 -> Friday 09:00 with Tuesday and Wednesday off.
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 21, 9, 0), at(2013, 1, 25, 9, 0)),
        16.0
    );
}

// ─── Clamped boundaries ──────────────────────────────────────────────────────

#[test]
fn clamped_start_before_opening() {
    let permissive = office().build().unwrap();
    let clamped = office().with_boundary(BoundaryMode::Clamped).build().unwrap();
    let (a, b) = (at(2013, 1, 22, 8, 0), at(2013, 1, 23, 12, 0));

    // 08:00 counts as 09:00.
    assert_abs_diff_eq!(hours(&clamped, a, b), 10.0);
    assert_abs_diff_eq!(hours(&permissive, a, b), 11.0);
}

#[test]
fn clamped_skips_weekend_boundaries() {
    let calc = WorkingHoursCalculator::builder()
        .with_reference_year(2013)
        .with_boundary(BoundaryMode::Clamped)
        .build()
        .unwrap();
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 25, 17, 0), at(2013, 1, 27, 12, 0)),
        1.0
    );
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 21, 20, 0), at(2013, 1, 22, 10, 0)),
        1.0
    );
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 27, 10, 0), at(2013, 1, 27, 12, 0)),
        0.0
    );
}

#[test]
fn clamped_same_day_outside_window() {
    let calc = office().with_boundary(BoundaryMode::Clamped).build().unwrap();
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 23, 6, 0), at(2013, 1, 23, 8, 30)),
        0.0
    );
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 23, 7, 0), at(2013, 1, 23, 20, 0)),
        7.0
    );
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[test]
fn permissive_validation_accepts_malformed_input() {
    let calc = WorkingHoursCalculator::builder()
        .with_schedule(DaySchedule::default().with(Weekday::Tuesday, WorkWindow::new(18.0, 9.0)))
        .with_holidays([(2u32, 30u32)])
        .with_validation(Validation::Permissive)
        .with_reference_year(2013)
        .build()
        .unwrap();
    assert!(calc.holidays().is_empty());
    // Monday 09:00 -> Wednesday 09:00 walks the inverted Tuesday window.
    assert_abs_diff_eq!(
        hours(&calc, at(2013, 1, 21, 9, 0), at(2013, 1, 23, 9, 0)),
        -1.0
    );
}

#[test]
fn strict_validation_rejects_malformed_input() {
    assert!(WorkingHoursCalculator::builder()
        .with_holidays([(2u32, 30u32)])
        .with_reference_year(2013)
        .build()
        .is_err());
    assert!(WorkingHoursCalculator::builder()
        .with_schedule(DaySchedule::new())
        .with_reference_year(2013)
        .build()
        .is_err());
}
