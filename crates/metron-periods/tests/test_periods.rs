//! Integration tests for period codes, arithmetic, ranges, containment,
//! display, and free-text parsing.

use metron_core::Error;
use metron_periods::{
    parse, period_display, period_for_date, period_range, period_start_end, validate, Date,
    Period, PeriodKind,
};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn range_codes(start: &str, stop: &str) -> Vec<String> {
    period_range(start, stop, false)
        .unwrap()
        .map(|p| p.code().to_string())
        .collect()
}

// ─── Validation ───────────────────────────────────────────────────────────────

#[test]
fn validation_matrix() {
    // Well-formed
    for code in ["W-2013-22", "M-2013-12", "Q-2013-3", "Y-2013"] {
        assert!(validate(code).is_ok(), "{code} should validate");
    }
    // Wrong shape
    for code in ["2013W22", "201312", "2013Q4", "Q-20139", "2013", "Y-20139"] {
        assert!(
            matches!(validate(code), Err(Error::MalformedCode(_)) | Err(Error::UnknownKind(_))),
            "{code} should be rejected as malformed"
        );
    }
    // Out-of-range components
    for code in ["W-2013-00", "W-2013-75", "M-2013-15", "Q-2013-5"] {
        assert!(
            matches!(validate(code), Err(Error::OutOfRange(_))),
            "{code} should be rejected as out of range"
        );
    }
    // Unknown prefix
    assert!(matches!(validate("D-2013-12"), Err(Error::UnknownKind(_))));
}

// ─── for_date ─────────────────────────────────────────────────────────────────

#[test]
fn for_date_fixtures() {
    let d = Some(date(2013, 8, 7));
    assert_eq!(period_for_date("weekly", d).unwrap().code(), "W-2013-32");
    assert_eq!(period_for_date("monthly", d).unwrap().code(), "M-2013-08");
    assert_eq!(period_for_date("quarterly", d).unwrap().code(), "Q-2013-3");
    assert_eq!(period_for_date("yearly", d).unwrap().code(), "Y-2013");
}

#[test]
fn weekly_for_date_at_iso_year_boundary() {
    // December 27, 2014 is still in week 52 of 2014 ...
    assert_eq!(
        period_for_date("weekly", Some(date(2014, 12, 27))).unwrap().code(),
        "W-2014-52"
    );
    // ... but December 30 already belongs to week 1 of 2015.
    assert_eq!(
        period_for_date("weekly", Some(date(2014, 12, 30))).unwrap().code(),
        "W-2015-01"
    );
}

#[test]
fn for_date_defaults_to_today() {
    let today = Date::today();
    let period = period_for_date("yearly", None).unwrap();
    assert_eq!(period.code(), format!("Y-{}", today.year()));
}

// ─── start_end ────────────────────────────────────────────────────────────────

#[test]
fn start_end_fixtures() {
    assert_eq!(
        period_start_end("Y-2013").unwrap(),
        (date(2013, 1, 1), date(2013, 12, 31))
    );
    assert_eq!(
        period_start_end("M-2013-08").unwrap(),
        (date(2013, 8, 1), date(2013, 8, 31))
    );
    assert_eq!(
        period_start_end("Q-2013-3").unwrap(),
        (date(2013, 7, 1), date(2013, 9, 30))
    );
    assert_eq!(
        period_start_end("W-2013-32").unwrap(),
        (date(2013, 8, 5), date(2013, 8, 11))
    );
}

#[test]
fn round_trip_spans_contain_their_date() {
    let samples = [
        date(2013, 8, 7),
        date(2014, 12, 30), // ISO week of the next year
        date(2016, 1, 1),   // ISO week of the previous year
        date(2000, 2, 29),  // leap day
        date(1999, 12, 31),
    ];
    for d in samples {
        for kind in PeriodKind::ALL {
            let period = kind.for_date(d);
            let (start, end) = period.start_end().unwrap();
            assert!(
                start <= d && d <= end,
                "{kind} period {} of {d} spans [{start}, {end}]",
                period.code()
            );
        }
    }
}

// ─── Ranges ───────────────────────────────────────────────────────────────────

#[test]
fn weekly_ranges_across_52_and_53_week_years() {
    assert_eq!(
        range_codes("W-2012-50", "W-2013-03"),
        ["W-2012-50", "W-2012-51", "W-2012-52", "W-2013-01", "W-2013-02"]
    );
    assert_eq!(
        range_codes("W-2014-50", "W-2015-03"),
        ["W-2014-50", "W-2014-51", "W-2014-52", "W-2015-01", "W-2015-02"]
    );
    // 2015 has 53 ISO weeks
    assert_eq!(
        range_codes("W-2015-50", "W-2016-03"),
        ["W-2015-50", "W-2015-51", "W-2015-52", "W-2015-53", "W-2016-01", "W-2016-02"]
    );
    // 2016 has 52
    assert_eq!(
        range_codes("W-2016-50", "W-2017-03"),
        ["W-2016-50", "W-2016-51", "W-2016-52", "W-2017-01", "W-2017-02"]
    );
}

#[test]
fn monthly_quarterly_yearly_ranges() {
    assert_eq!(
        range_codes("M-2012-11", "M-2013-03"),
        ["M-2012-11", "M-2012-12", "M-2013-01", "M-2013-02"]
    );
    assert_eq!(
        range_codes("Q-2012-3", "Q-2013-2"),
        ["Q-2012-3", "Q-2012-4", "Q-2013-1"]
    );
    assert_eq!(range_codes("Y-2010", "Y-2013"), ["Y-2010", "Y-2011", "Y-2012"]);
}

#[test]
fn range_bound_semantics() {
    // Exclusive never yields the stop code
    let codes = range_codes("M-2013-01", "M-2013-04");
    assert!(!codes.contains(&"M-2013-04".to_string()));
    // Inclusive always yields it when start <= stop
    let codes: Vec<_> = period_range("M-2013-01", "M-2013-04", true)
        .unwrap()
        .map(|p| p.code().to_string())
        .collect();
    assert_eq!(codes.last().unwrap(), "M-2013-04");
}

#[test]
fn range_with_mismatched_kinds_fails() {
    assert!(matches!(
        period_range("W-2012-50", "Y-2013", false),
        Err(Error::KindMismatch(_))
    ));
}

// ─── Containment ──────────────────────────────────────────────────────────────

fn p(code: &str) -> Period {
    Period::from_code(code).unwrap()
}

#[test]
fn containment_is_reflexive_and_one_directional() {
    let year = p("Y-2015");
    let quarter = p("Q-2015-2");
    let month = p("M-2015-05");
    let week = p("W-2015-20");

    for period in [&year, &quarter, &month, &week] {
        assert!(period.includes(period));
    }
    assert!(year.includes(&quarter));
    assert!(year.includes(&month));
    assert!(year.includes(&week));
    assert!(quarter.includes(&month));
    assert!(quarter.includes(&week));
    assert!(month.includes(&week));

    assert!(!quarter.includes(&year));
    assert!(!month.includes(&year));
    assert!(!week.includes(&year));
    assert!(!week.includes(&month));
}

#[test]
fn yearly_decomposes_into_53_weeks_in_2015() {
    let weeks = p("Y-2015").sub_periods(PeriodKind::Weekly).unwrap();
    let codes: Vec<_> = weeks.iter().map(|w| w.code().to_string()).collect();
    assert_eq!(codes.len(), 53);
    assert_eq!(codes.first().unwrap(), "W-2015-01");
    assert_eq!(codes.last().unwrap(), "W-2015-53");
    // Consecutive and non-overlapping: each week starts the day after the
    // previous one ends.
    for pair in weeks.windows(2) {
        let (_, prev_end) = pair[0].start_end().unwrap();
        let (next_start, _) = pair[1].start_end().unwrap();
        assert_eq!(next_start, prev_end + 1);
    }
}

#[test]
fn yearly_decomposes_into_quarters_and_months() {
    let quarters = p("Y-2015").sub_periods(PeriodKind::Quarterly).unwrap();
    let codes: Vec<_> = quarters.iter().map(|q| q.code().to_string()).collect();
    assert_eq!(codes, ["Q-2015-1", "Q-2015-2", "Q-2015-3", "Q-2015-4"]);

    let months = p("Y-2015").sub_periods(PeriodKind::Monthly).unwrap();
    assert_eq!(months.len(), 12);
    let displays: Vec<_> = months.iter().map(|m| m.to_string()).collect();
    assert_eq!(displays.first().unwrap(), "January 2015");
    assert_eq!(displays.last().unwrap(), "December 2015");
}

#[test]
fn illegal_containment_request_fails() {
    assert!(matches!(
        p("W-2015-20").sub_periods(PeriodKind::Monthly),
        Err(Error::Containment(_))
    ));
    assert!(matches!(
        p("Q-2015-2").sub_periods(PeriodKind::Yearly),
        Err(Error::Containment(_))
    ));
}

// ─── Ordering ─────────────────────────────────────────────────────────────────

#[test]
fn same_kind_ordering_matches_code_order() {
    assert!(p("W-2015-09") < p("W-2015-10"));
    assert!(p("M-2014-12") <= p("M-2015-01"));
    assert!(p("Q-2015-4") > p("Q-2015-1"));
    assert!(p("Y-2016") >= p("Y-2016"));
}

#[test]
fn cross_kind_comparisons_all_evaluate_false() {
    let a = p("Q-2014-4");
    let b = p("Y-2015");
    assert!(!(a < b) && !(a > b) && !(a <= b) && !(a >= b));
}

// ─── Display ──────────────────────────────────────────────────────────────────

#[test]
fn display_fixtures() {
    assert_eq!(period_display("Y-2013").unwrap(), "2013");
    assert_eq!(period_display("Q-2013-3").unwrap(), "2013Q3");
    assert_eq!(period_display("M-2013-08").unwrap(), "August 2013");
    assert_eq!(period_display("W-2013-32").unwrap(), "Week of Aug 05, 2013");
}

// ─── Free-text parsing ────────────────────────────────────────────────────────

#[test]
fn parse_fixtures() {
    let cases = [
        ("2015-W03", "W-2015-03"),
        ("2015-W3", "W-2015-03"),
        ("2015W03", "W-2015-03"),
        ("2015W3", "W-2015-03"),
        ("Jan 2015", "M-2015-01"),
        ("January 2015", "M-2015-01"),
        ("1/2015", "M-2015-01"),
        ("01/2015", "M-2015-01"),
        ("2015Q1", "Q-2015-1"),
        ("2015", "Y-2015"),
    ];
    for (input, expected) in cases {
        let period = parse(input).unwrap().unwrap_or_else(|| {
            panic!("no result for {input:?}");
        });
        assert_eq!(period.code(), expected, "parse({input:?})");
    }
}

#[test]
fn parse_failures() {
    // Branch matched, validation failed
    assert!(parse("2015Q5").is_err());
    // Nothing matched at all
    assert_eq!(parse("not-a-period").unwrap(), None);
}

// ─── Codes are the storage representation ─────────────────────────────────────

#[test]
fn codes_fit_the_storage_field() {
    // The storage collaborator persists the raw code in a 12-character field.
    for code in ["W-2015-03", "M-2015-01", "Q-2015-1", "Y-2015"] {
        assert!(code.is_ascii());
        assert!(code.len() <= 12);
        let period = p(code);
        assert_eq!(period.code(), code);
    }
}
