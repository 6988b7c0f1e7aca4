use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// At most one selected day.
    Single,
    /// One contiguous run of days.
    SingleInterval,
    /// Any number of days, built from interval unions and subtractions.
    #[default]
    MultipleInterval,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown selection mode '{0}'")]
pub struct ModeParseError(pub String);

impl SelectionMode {
    pub const SINGLE_SELECTION: u8 = 0;
    pub const SINGLE_INTERVAL_SELECTION: u8 = 1;
    pub const MULTIPLE_INTERVAL_SELECTION: u8 = 2;

    /// Legacy numeric codes; anything unknown selects multiple intervals.
    pub fn from_code(code: u8) -> Self {
        match code {
            Self::SINGLE_SELECTION => Self::Single,
            Self::SINGLE_INTERVAL_SELECTION => Self::SingleInterval,
            _ => Self::MultipleInterval,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Single => Self::SINGLE_SELECTION,
            Self::SingleInterval => Self::SINGLE_INTERVAL_SELECTION,
            Self::MultipleInterval => Self::MULTIPLE_INTERVAL_SELECTION,
        }
    }

    /// Lenient lookup used for string-typed settings: unknown names fall
    /// back to multiple intervals.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::SingleInterval => "single_interval",
            Self::MultipleInterval => "multiple_interval",
        }
    }
}

impl FromStr for SelectionMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "singleselection" | "single_selection" => Ok(Self::Single),
            "single_interval" | "singleinterval" => Ok(Self::SingleInterval),
            "multiple_interval" | "multipleinterval" | "multiple" => Ok(Self::MultipleInterval),
            _ => Err(ModeParseError(s.to_string())),
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{ModeParseError, SelectionMode};

    #[test]
    fn legacy_codes_fall_back_to_multiple() {
        assert_eq!(SelectionMode::from_code(0), SelectionMode::Single);
        assert_eq!(SelectionMode::from_code(1), SelectionMode::SingleInterval);
        assert_eq!(SelectionMode::from_code(2), SelectionMode::MultipleInterval);
        assert_eq!(SelectionMode::from_code(42), SelectionMode::MultipleInterval);
        assert_eq!(SelectionMode::SingleInterval.code(), 1);
    }

    #[test]
    fn names_parse_strictly_and_leniently() {
        assert_eq!("SingleInterval".parse::<SelectionMode>(), Ok(SelectionMode::SingleInterval));
        assert_eq!("singleselection".parse::<SelectionMode>(), Ok(SelectionMode::Single));
        assert_eq!(
            "weekly".parse::<SelectionMode>(),
            Err(ModeParseError("weekly".to_string()))
        );
        assert_eq!(SelectionMode::from_name("weekly"), SelectionMode::MultipleInterval);
        assert_eq!(SelectionMode::from_name("SINGLESELECTION"), SelectionMode::Single);
        assert_eq!(SelectionMode::default(), SelectionMode::MultipleInterval);
    }

    #[test]
    fn display_matches_serde_names() {
        let yaml = serde_yaml::to_string(&SelectionMode::SingleInterval).expect("serialize");
        assert_eq!(yaml.trim(), SelectionMode::SingleInterval.to_string());
    }
}
