use crate::core::calendar::{Date, DateTime};

/// A date-like value handed to the selection model before parsing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DateValue {
    #[default]
    None,
    Date(Date),
    DateTime(DateTime),
    /// Unix timestamp in seconds; the UTC calendar day is used.
    Timestamp(i64),
    Text(String),
}

impl DateValue {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl From<Date> for DateValue {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime> for DateValue {
    fn from(value: DateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<&str> for DateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<DateValue>> From<Option<T>> for DateValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
