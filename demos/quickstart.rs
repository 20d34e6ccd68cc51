use chrono::{NaiveDate, TimeDelta};
use datetime_interval::{Interval, IntervalError};

fn main() -> Result<(), IntervalError> {
    let date = |m, d| NaiveDate::from_ymd_opt(2015, m, d).expect("valid date");

    let january = Interval::from_bounds(date(1, 1), date(1, 31))?;
    let fortnight = Interval::from_start_and_duration(date(1, 25), TimeDelta::days(14))?;
    let march = Interval::from_duration_and_end(TimeDelta::days(30), date(3, 31))?;

    println!("January:   {january}");
    println!("Fortnight: {fortnight}");
    println!("March:     {march}");

    println!("January ∩ fortnight: {}", january.intersection(&fortnight)?);
    match january.intersection(&march) {
        Ok(overlap) => println!("January ∩ March: {overlap}"),
        Err(err) => println!("January ∩ March: {err}"),
    }

    println!("January before March: {:?}", january.try_lt(&march));
    println!("January vs fortnight: {:?}", january.compare(&fortnight));
    println!("Next month: {}", january + TimeDelta::days(31));
    Ok(())
}
