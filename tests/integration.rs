use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use datetime_interval::{Interval, IntervalError, NaiveInterval};
use std::cmp::Ordering;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2015, 6, 15)
        .unwrap()
        .and_hms_opt(13, 37, 0)
        .unwrap()
}

/// The same 24 hours built from each pair of start, duration and end.
fn three_ways(start: NaiveDateTime, end: NaiveDateTime) -> [NaiveInterval; 3] {
    let day = TimeDelta::days(1);
    [
        Interval::from_bounds(start, end).unwrap(),
        Interval::from_start_and_duration(start, day).unwrap(),
        Interval::from_duration_and_end(day, end).unwrap(),
    ]
}

fn assert_sequential(last: &NaiveInterval, next: &NaiveInterval) {
    assert!(!Interval::ptr_eq(last, next));
    assert_ne!(last, next);
    assert_eq!(last.compare(next), Ok(Ordering::Less));
    assert_eq!(next.compare(last), Ok(Ordering::Greater));
    assert!(last < next);
    assert!(next > last);
    assert!(last <= next);
    assert!(next >= last);
}

#[test]
fn last_and_next_24_hours_are_ordered() {
    let now = now();
    let yesterday = now - TimeDelta::days(1);
    let tomorrow = now + TimeDelta::days(1);

    let last24s = three_ways(yesterday, now);
    let next24s = three_ways(now, tomorrow);

    for group in [&last24s, &next24s] {
        for a in group.iter() {
            for b in group.iter() {
                assert_eq!(a, b);
                assert!(a <= b);
                assert!(a >= b);
                assert_eq!(a.compare(b), Ok(Ordering::Equal));
            }
        }
    }

    for last in &last24s {
        for next in &next24s {
            assert_sequential(last, next);
        }
    }

    for last in &last24s {
        assert!(last.contains(yesterday));
        assert!(last.contains(now));
        assert!(!last.contains(tomorrow));
        assert_sequential(last, &(*last + TimeDelta::days(1)));
    }

    for next in &next24s {
        assert!(!next.contains(yesterday));
        assert!(next.contains(now));
        assert!(next.contains(tomorrow));
        assert_sequential(&(*next - TimeDelta::days(1)), next);
    }
}

#[test]
fn january_and_march_intersections() {
    let date = |m, d| NaiveDate::from_ymd_opt(2015, m, d).unwrap();

    let jan_all = Interval::from_bounds(date(1, 1), date(1, 31)).unwrap();
    let jan_half = Interval::from_bounds(date(1, 1), date(1, 15)).unwrap();
    let mar_all = Interval::from_bounds(date(3, 1), date(3, 31)).unwrap();
    let jan_feb = Interval::from_bounds(date(1, 25), date(2, 10)).unwrap();

    assert_eq!(jan_all.intersection(&jan_half), jan_half.intersection(&jan_all));
    assert_eq!(jan_feb.intersection(&jan_all), jan_all.intersection(&jan_feb));
    assert_eq!(jan_all.intersection(&jan_half), Ok(jan_half));
    assert_eq!(
        jan_feb.intersection(&jan_all),
        Interval::from_bounds(jan_feb.start(), jan_all.end()).map_err(IntervalError::from)
    );

    assert_eq!(jan_all.intersection(&mar_all), Err(IntervalError::Disjoint));
    assert_eq!(mar_all.intersection(&jan_all), Err(IntervalError::Disjoint));
}

#[test]
fn errors_convert_into_the_umbrella_type() {
    fn first_week_of(month: u32) -> datetime_interval::Result<NaiveInterval> {
        let start = NaiveDate::from_ymd_opt(2015, month, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let month = Interval::from_start_and_duration(start, TimeDelta::days(28))?;
        let week = Interval::from_start_and_duration(start, TimeDelta::weeks(1))?;
        month.intersection(&week)
    }

    let week = first_week_of(2).unwrap();
    assert_eq!(week.duration(), TimeDelta::weeks(1));
}
