use regex::Regex;
use thiserror::Error;

use crate::core::calendar::{Date, DateTime, validate_date, validate_time};
use crate::core::value::DateValue;

pub mod formats {
    pub const DATE_YMD: &str = "YYYY-MM-DD";
    pub const DATE_DMY: &str = "DD/MM/YYYY";
    pub const DATE_MDY: &str = "MM/DD/YYYY";
    pub const DATETIME_YMD_HMS: &str = "YYYY-MM-DD HH:mm:ss";
    pub const DATETIME_ISO: &str = "YYYY-MM-DDTHH:mm:ss";
    pub const DATETIME_DMY_HM: &str = "DD/MM/YYYY HH:mm";

    pub const DEFAULTS: [&str; 4] = [DATE_YMD, DATETIME_YMD_HMS, DATETIME_ISO, DATE_DMY];
}

/// 0001-01-01T00:00:00Z and 9999-12-31T23:59:59Z.
const MIN_TIMESTAMP: i64 = -62_135_596_800;
const MAX_TIMESTAMP: i64 = 253_402_300_799;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("no date value supplied")]
    Missing,
    #[error("'{input}' does not match any date format")]
    Unrecognized { input: String },
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate { year: i32, month: u8, day: u8 },
    #[error("{hour:02}:{minute:02}:{second:02} is not a valid time")]
    InvalidTime { hour: u8, minute: u8, second: u8 },
    #[error("timestamp {timestamp} is outside the supported range")]
    OutOfRange { timestamp: i64 },
    #[error("date format '{pattern}' needs a year (YYYY), month (MM) and day (DD)")]
    IncompleteFormat { pattern: String },
    #[error("invalid date format '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Converts date-like values into calendar days.
pub trait DateParser {
    fn parse(&self, value: &DateValue) -> Result<Date, ParseError>;
}

impl<F> DateParser for F
where
    F: Fn(&DateValue) -> Result<Date, ParseError>,
{
    fn parse(&self, value: &DateValue) -> Result<Date, ParseError> {
        self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Token {
    /// `yyyy` and `dd` are accepted so `SimpleDateFormat`-style patterns
    /// such as `dd/MM/yyyy` work unchanged.
    const ALL: [(&'static str, Token); 8] = [
        ("YYYY", Token::Year),
        ("yyyy", Token::Year),
        ("MM", Token::Month),
        ("DD", Token::Day),
        ("dd", Token::Day),
        ("HH", Token::Hour),
        ("mm", Token::Minute),
        ("ss", Token::Second),
    ];

    fn group(self) -> &'static str {
        match self {
            Token::Year => r"(?P<year>[+-]?\d{4})",
            Token::Month => r"(?P<month>\d{1,2})",
            Token::Day => r"(?P<day>\d{1,2})",
            Token::Hour => r"(?P<hour>\d{2})",
            Token::Minute => r"(?P<minute>\d{2})",
            Token::Second => r"(?P<second>\d{2})",
        }
    }
}

#[derive(Debug, Clone)]
struct DatePattern {
    source: String,
    regex: Regex,
}

impl DatePattern {
    fn compile(pattern: &str) -> Result<Self, ParseError> {
        let mut expr = String::from("^");
        let mut rest = pattern;
        'outer: while !rest.is_empty() {
            for (text, token) in Token::ALL {
                if let Some(after) = rest.strip_prefix(text) {
                    expr.push_str(token.group());
                    rest = after;
                    continue 'outer;
                }
            }
            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                expr.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4])));
            }
            rest = chars.as_str();
        }
        expr.push('$');

        let regex = Regex::new(&expr).map_err(|source| ParseError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        let names: Vec<&str> = regex.capture_names().flatten().collect();
        if ["year", "month", "day"].iter().any(|field| !names.contains(field)) {
            return Err(ParseError::IncompleteFormat {
                pattern: pattern.to_string(),
            });
        }
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// `None` when the text has a different shape; `Some(Err)` when it has
    /// this shape but names an impossible day or time.
    fn apply(&self, text: &str) -> Option<Result<Date, ParseError>> {
        let caps = self.regex.captures(text)?;
        let field = |name: &str| caps.name(name).map(|m| m.as_str());

        let year = field("year")?.parse::<i32>().ok()?;
        let month = field("month")?.parse::<u8>().ok()?;
        let day = field("day")?.parse::<u8>().ok()?;
        let date = match validate_date(year, month, day) {
            Ok(date) => date,
            Err(err) => return Some(Err(err)),
        };

        let number = |name: &str| field(name).and_then(|v| v.parse::<u8>().ok()).unwrap_or(0);
        if let Err(err) = validate_time(number("hour"), number("minute"), number("second")) {
            return Some(Err(err));
        }
        Some(Ok(date))
    }
}

/// Parses text against an ordered list of formats built from the tokens
/// `YYYY` (or `yyyy`), `MM`, `DD` (or `dd`), `HH`, `mm` and `ss`. Any other
/// character is matched literally. The first format yielding a real
/// calendar day wins.
#[derive(Debug, Clone)]
pub struct PatternDateParser {
    patterns: Vec<DatePattern>,
}

impl PatternDateParser {
    pub fn new<I, S>(formats: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = formats
            .into_iter()
            .map(|format| DatePattern::compile(format.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|pattern| pattern.source.as_str())
    }

    fn parse_text(&self, text: &str) -> Result<Date, ParseError> {
        let trimmed = text.trim();
        let mut first_error = None;
        for pattern in &self.patterns {
            match pattern.apply(trimmed) {
                Some(Ok(date)) => return Ok(date),
                Some(Err(err)) => {
                    first_error.get_or_insert(err);
                }
                None => {}
            }
        }
        Err(first_error.unwrap_or_else(|| ParseError::Unrecognized {
            input: text.to_string(),
        }))
    }
}

impl Default for PatternDateParser {
    fn default() -> Self {
        let patterns = formats::DEFAULTS
            .iter()
            .filter_map(|format| DatePattern::compile(format).ok())
            .collect();
        Self { patterns }
    }
}

impl DateParser for PatternDateParser {
    fn parse(&self, value: &DateValue) -> Result<Date, ParseError> {
        match value {
            DateValue::None => Err(ParseError::Missing),
            DateValue::Date(date) => validate_date(date.year, date.month, date.day),
            DateValue::DateTime(dt) => validate_date(dt.date.year, dt.date.month, dt.date.day),
            DateValue::Timestamp(secs) => {
                if !(MIN_TIMESTAMP..=MAX_TIMESTAMP).contains(secs) {
                    return Err(ParseError::OutOfRange { timestamp: *secs });
                }
                Ok(DateTime::from_unix_seconds(*secs).date)
            }
            DateValue::Text(text) => self.parse_text(text),
        }
    }
}
