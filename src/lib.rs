pub mod config;
pub mod core;
pub mod selection;

pub use crate::core::calendar;
pub use crate::core::parse;
pub use crate::core::value;

pub use config::{ConfigError, SelectionConfig};
pub use crate::core::calendar::{Date, DateTime, MonthGrid, Time};
pub use crate::core::parse::{DateParser, ParseError, PatternDateParser};
pub use crate::core::value::DateValue;
pub use selection::{
    DateSelectionEvent, DateSelectionListener, ListenerId, ModeParseError, SelectionMode,
    SelectionModel, SelectionOutcome, SkippedValue,
};
