use bai2qbolib::{
    convert::{
        csv_date, csv_date_to_ofx, decorate_amount, hh_mm, ofx_date, ofx_datetime, parse_csv_date,
        signed_amount,
    },
    error::Bai2QboError,
    model::Direction,
};
use chrono::{Duration, NaiveDate, NaiveTime};
use std::collections::HashSet;

#[test]
fn decorate_inserts_point_two_from_the_end() {
    assert_eq!(decorate_amount(12345), "123.45");
    assert_eq!(decorate_amount(150075), "1500.75");
    assert_eq!(decorate_amount(100), "1.00");
    assert_eq!(decorate_amount(u64::MAX), "184467440737095516.15");

    for n in [100u64, 101, 999, 1000, 420_000, 987_654_321] {
        let digits = n.to_string();
        let s = decorate_amount(n);
        assert_eq!(s.find('.'), Some(s.len() - 3), "{s}");
        assert_eq!(s.replace('.', ""), digits);
    }
}

#[test]
fn decorate_pads_small_amounts() {
    assert_eq!(decorate_amount(0), "0.00");
    assert_eq!(decorate_amount(5), "0.05");
    assert_eq!(decorate_amount(42), "0.42");
    assert_eq!(decorate_amount(99), "0.99");
}

#[test]
fn sign_follows_direction() {
    assert_eq!(signed_amount(150075, Direction::Debit), "-1500.75");
    assert_eq!(signed_amount(150075, Direction::Credit), "1500.75");
    assert_eq!(signed_amount(150075, Direction::Misc), "1500.75");
    assert_eq!(signed_amount(5, Direction::Debit), "-0.05");

    for n in [0u64, 7, 100, 123456] {
        assert!(signed_amount(n, Direction::Debit).starts_with('-'));
        assert!(!signed_amount(n, Direction::Credit).starts_with('-'));
    }
}

#[test]
fn dates_between_csv_and_ofx() {
    let d = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    assert_eq!(csv_date(d), "03/01/2024");
    assert_eq!(parse_csv_date("03/01/2024").unwrap(), d);
    assert_eq!(ofx_date(d), "20240301000000");
    assert_eq!(csv_date_to_ofx("03/01/2024").unwrap(), "20240301000000");
    assert_eq!(
        ofx_datetime(d.and_hms_opt(14, 5, 9).unwrap()),
        "20240301140509"
    );
    assert_eq!(hh_mm(NaiveTime::from_hms_opt(8, 0, 0).unwrap()), "08:00");
    assert_eq!(hh_mm(NaiveTime::from_hms_opt(23, 59, 59).unwrap()), "23:59");
}

#[test]
fn csv_to_ofx_is_injective_over_a_year() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut seen = HashSet::new();
    for i in 0..366 {
        let d = start + Duration::days(i);
        let once = csv_date_to_ofx(&csv_date(d)).unwrap();
        let twice = csv_date_to_ofx(&csv_date(d)).unwrap();
        assert_eq!(once, twice);
        assert!(seen.insert(once));
    }
}

#[test]
fn bad_csv_dates_are_rejected() {
    for s in ["2024-03-01", "13/01/2024", "", "03/01"] {
        match parse_csv_date(s) {
            Err(Bai2QboError::DateParse(v)) => assert_eq!(v, s),
            other => panic!("{s:?}: unexpected {other:?}"),
        }
    }
}
