use std::fmt;

use crate::core::parse::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// A point in time with second precision. Selection only ever looks at
/// the calendar day, so two values with the same `date` are the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
}

/// Day of the week counted from Monday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weekday(pub u8);

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

pub fn weekday_of(date: Date) -> Weekday {
    // 1970-01-01 was a Thursday.
    Weekday((date.to_unix_days() + 3).rem_euclid(7) as u8)
}

pub fn validate_date(year: i32, month: u8, day: u8) -> Result<Date, ParseError> {
    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return Err(ParseError::InvalidDate { year, month, day });
    }
    Ok(Date { year, month, day })
}

pub fn validate_time(hour: u8, minute: u8, second: u8) -> Result<Time, ParseError> {
    if hour > 23 || minute > 59 || second > 59 {
        return Err(ParseError::InvalidTime {
            hour,
            minute,
            second,
        });
    }
    Ok(Time {
        hour,
        minute,
        second,
    })
}

impl Date {
    pub fn from_parts(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        validate_date(year, month, day)
    }

    /// Civil date for a count of days since 1970-01-01.
    pub fn from_unix_days(days: i64) -> Self {
        let z = days + 719468;
        let era = if z >= 0 { z } else { z - 146096 } / 146097;
        let doe = (z - era * 146097) as u32;
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
        let y = yoe as i64 + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let d = doy - (153 * mp + 2) / 5 + 1;
        let m = if mp < 10 { mp + 3 } else { mp - 9 };
        let y = if m <= 2 { y + 1 } else { y };
        Date {
            year: y as i32,
            month: m as u8,
            day: d as u8,
        }
    }

    pub fn to_unix_days(self) -> i64 {
        let y = if self.month <= 2 {
            self.year as i64 - 1
        } else {
            self.year as i64
        };
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let m = self.month as i64;
        let mp = if m > 2 { m - 3 } else { m + 9 };
        let doy = (153 * mp + 2) / 5 + self.day as i64 - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146097 + doe - 719468
    }

    /// Every day from `self` through `end`, inclusive. Empty when `end`
    /// comes before `self`.
    pub fn days_through(self, end: Date) -> DayRange {
        DayRange {
            next: self.to_unix_days(),
            last: end.to_unix_days(),
        }
    }

    pub fn at(self, time: Time) -> DateTime {
        DateTime { date: self, time }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl DateTime {
    /// UTC date and time for a unix timestamp in seconds.
    pub fn from_unix_seconds(secs: i64) -> Self {
        let days = secs.div_euclid(86400);
        let rem = secs.rem_euclid(86400);
        DateTime {
            date: Date::from_unix_days(days),
            time: Time {
                hour: (rem / 3600) as u8,
                minute: ((rem / 60) % 60) as u8,
                second: (rem % 60) as u8,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct DayRange {
    next: i64,
    last: i64,
}

impl Iterator for DayRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.next > self.last {
            return None;
        }
        let date = Date::from_unix_days(self.next);
        self.next += 1;
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.last - self.next + 1).max(0) as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for DayRange {}

/// Monday-first layout of a month, six rows of seven cells.
pub struct MonthGrid {
    pub year: i32,
    pub month: u8,

    pub cells: [[Option<u8>; 7]; 6],
}

impl MonthGrid {
    pub fn new(year: i32, month: u8) -> Self {
        let first = Date {
            year,
            month,
            day: 1,
        };
        let first_wd = weekday_of(first).0 as usize;
        let days = days_in_month(year, month) as usize;
        let mut cells = [[None; 7]; 6];
        for day in 1..=days {
            let pos = first_wd + day - 1;
            cells[pos / 7][pos % 7] = Some(day as u8);
        }
        MonthGrid { year, month, cells }
    }

    pub fn date_at(&self, row: usize, col: usize) -> Option<Date> {
        let day = (*self.cells.get(row)?.get(col)?)?;
        Some(Date {
            year: self.year,
            month: self.month,
            day,
        })
    }
}
