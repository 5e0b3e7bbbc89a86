//! Property tests for `WorkingHoursCalculator`.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use wh_time::{BoundaryMode, WorkingHoursCalculator};

fn instant() -> impl Strategy<Value = NaiveDateTime> {
    // Any minute of 2013 and 2014.
    (0i64..730 * 24 * 60).prop_map(|minutes| {
        NaiveDate::from_ymd_opt(2013, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + Duration::minutes(minutes)
    })
}

fn calculator(boundary: BoundaryMode) -> WorkingHoursCalculator {
    WorkingHoursCalculator::builder()
        .with_reference_year(2013)
        .with_boundary(boundary)
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn order_independent(a in instant(), b in instant()) {
        let calc = calculator(BoundaryMode::Permissive);
        prop_assert_eq!(calc.hours_between(a, b).unwrap(), calc.hours_between(b, a).unwrap());
    }

    #[test]
    fn zero_for_identical_instants(a in instant()) {
        for boundary in [BoundaryMode::Permissive, BoundaryMode::Clamped] {
            prop_assert_eq!(calculator(boundary).hours_between(a, a).unwrap(), 0.0);
        }
    }

    #[test]
    fn clamped_is_never_negative(a in instant(), b in instant()) {
        let h = calculator(BoundaryMode::Clamped).hours_between(a, b).unwrap();
        prop_assert!(h >= 0.0, "{a} .. {b} gave {h}");
    }

    #[test]
    fn clamped_is_additive_at_midnight(a in instant(), b in instant()) {
        // Splitting a range at a midnight between its ends does not change
        // the clamped total.
        let calc = calculator(BoundaryMode::Clamped);
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let midnight = start.date().succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap();
        prop_assume!(midnight < end);

        let whole = calc.hours_between(start, end).unwrap();
        let split = calc.hours_between(start, midnight).unwrap()
            + calc.hours_between(midnight, end).unwrap();
        prop_assert!((whole - split).abs() < 1e-9, "{whole} != {split}");
    }
}
