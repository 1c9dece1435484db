use crate::calendar::error::CalendarError;
use crate::calendar::error::CalendarError::{InvalidDateFormat, UnsupportedDate};
use chrono::{Datelike, NaiveDate};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub mod error;

/// Offset between chrono's day count (days since 0001-01-01 CE) and the
/// Julian day number the conversion arithmetic runs on.
const JDN_OFFSET: i64 = 1_721_425;

/// Years (solar calendar) in which the 33-year leap cycle breaks. The
/// conversion is exact within the enclosed range.
const BREAK_YEARS: [i64; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// A date in the Solar Hijri calendar, as used for every date the gym staff
/// reads or types. Always structurally valid: `new` rejects impossible
/// month/day combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaliDate {
    year: i64,
    month: u32,
    day: u32,
}

impl JalaliDate {
    pub fn new(year: i64, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(InvalidDateFormat(format!("{year}/{month}/{day}")));
        }
        let length = month_length(year, month)?;
        if !(1..=length).contains(&day) {
            return Err(InvalidDateFormat(format!("{year}/{month}/{day}")));
        }

        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn from_gregorian(date: NaiveDate) -> Result<Self, CalendarError> {
        let julian_day = i64::from(date.num_days_from_ce()) + JDN_OFFSET;
        let mut year = i64::from(date.year()) - 621;
        let cycle = resolve_cycle(year)?;
        let first_of_year = gregorian_to_julian_day(cycle.gregorian_year, 3, cycle.march_day);
        let mut day_of_cycle = julian_day - first_of_year;

        if day_of_cycle >= 0 {
            if day_of_cycle <= 185 {
                return Ok(Self {
                    year,
                    month: (1 + day_of_cycle / 31) as u32,
                    day: (day_of_cycle % 31 + 1) as u32,
                });
            }
            day_of_cycle -= 186;
        } else {
            year -= 1;
            day_of_cycle += 179;
            if cycle.leap == 1 {
                day_of_cycle += 1;
            }
        }

        Ok(Self {
            year,
            month: (7 + day_of_cycle / 30) as u32,
            day: (day_of_cycle % 30 + 1) as u32,
        })
    }

    pub fn to_gregorian(&self) -> Result<NaiveDate, CalendarError> {
        let cycle = resolve_cycle(self.year)?;
        let julian_day = gregorian_to_julian_day(cycle.gregorian_year, 3, cycle.march_day)
            + i64::from(self.month - 1) * 31
            - i64::from(self.month / 7) * (i64::from(self.month) - 7)
            + i64::from(self.day)
            - 1;

        NaiveDate::from_num_days_from_ce_opt((julian_day - JDN_OFFSET) as i32)
            .ok_or_else(|| UnsupportedDate(self.to_string()))
    }
}

impl Display for JalaliDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for JalaliDate {
    type Err = CalendarError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.split(['/', '-']);
        let year = parts.next().and_then(|part| part.parse::<i64>().ok());
        let month = parts.next().and_then(|part| part.parse::<u32>().ok());
        let day = parts.next().and_then(|part| part.parse::<u32>().ok());

        match (year, month, day, parts.next()) {
            (Some(year), Some(month), Some(day), None) => Self::new(year, month, day),
            _ => Err(InvalidDateFormat(value.to_owned())),
        }
    }
}

/// Parse a date typed by the staff: slash-separated input reads as the solar
/// calendar, dash-separated input as ISO Gregorian.
pub fn parse_date_input(value: &str) -> Result<NaiveDate, CalendarError> {
    if value.contains('/') {
        JalaliDate::from_str(value)?.to_gregorian()
    } else {
        NaiveDate::from_str(value).map_err(|_| InvalidDateFormat(value.to_owned()))
    }
}

/// The solar-calendar rendition of a Gregorian date for display. Falls back
/// to the ISO form outside the supported range.
pub fn display_date(date: NaiveDate) -> String {
    JalaliDate::from_gregorian(date)
        .map(|jalali| jalali.to_string())
        .unwrap_or_else(|_| date.to_string())
}

struct Cycle {
    leap: i64,
    gregorian_year: i64,
    march_day: i64,
}

/// Locate `year` in the leap-cycle table and derive its leap status and the
/// Gregorian date of its first day (a day in March).
fn resolve_cycle(year: i64) -> Result<Cycle, CalendarError> {
    if year < BREAK_YEARS[0] || year >= BREAK_YEARS[BREAK_YEARS.len() - 1] {
        return Err(UnsupportedDate(format!("year {year}")));
    }

    let gregorian_year = year + 621;
    let mut leap_count = -14i64;
    let mut previous_break = BREAK_YEARS[0];
    let mut jump = 0;
    for &break_year in &BREAK_YEARS[1..] {
        jump = break_year - previous_break;
        if year < break_year {
            break;
        }
        leap_count += jump / 33 * 8 + jump % 33 / 4;
        previous_break = break_year;
    }

    let mut years_into_cycle = year - previous_break;
    leap_count += years_into_cycle / 33 * 8 + (years_into_cycle % 33 + 3) / 4;
    if jump % 33 == 4 && jump - years_into_cycle == 4 {
        leap_count += 1;
    }

    let gregorian_leap_count =
        gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;
    let march_day = 20 + leap_count - gregorian_leap_count;

    if jump - years_into_cycle < 6 {
        years_into_cycle = years_into_cycle - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((years_into_cycle + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Ok(Cycle {
        leap,
        gregorian_year,
        march_day,
    })
}

fn gregorian_to_julian_day(year: i64, month: i64, day: i64) -> i64 {
    let julian_day = (year + (month - 8) / 6 + 100_100) * 1461 / 4
        + (153 * ((month + 9) % 12) + 2) / 5
        + day
        - 34_840_408;

    julian_day - (year + 100_100 + (month - 8) / 6) / 100 * 3 / 4 + 752
}

// A cycle position of 0 marks a leap year; 1 to 4 count the years since.
fn is_leap_year(year: i64) -> Result<bool, CalendarError> {
    Ok(resolve_cycle(year)?.leap == 0)
}

fn month_length(year: i64, month: u32) -> Result<u32, CalendarError> {
    match month {
        1..=6 => Ok(31),
        7..=11 => Ok(30),
        12 => Ok(if is_leap_year(year)? { 30 } else { 29 }),
        _ => Err(InvalidDateFormat(format!("month {month}"))),
    }
}
