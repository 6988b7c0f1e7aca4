use crate::core::calendar::Date;
use crate::core::parse::DateParser;
use crate::core::value::DateValue;

use super::interval::SingleInterval;
use super::mode::SelectionMode;
use super::multiple::MultipleInterval;
use super::outcome::SelectionOutcome;
use super::single::SingleSelection;

/// Parse one value, logging and recording a failure instead of returning it.
pub(super) fn parse_logged(
    parser: &dyn DateParser,
    value: &DateValue,
    index: usize,
    outcome: &mut SelectionOutcome,
    context: &str,
) -> Option<Date> {
    match parser.parse(value) {
        Ok(date) => {
            outcome.applied += 1;
            Some(date)
        }
        Err(err) => {
            log::warn!(target: "datesel", "{context}: skipping value #{index}: {err}");
            outcome.skip(index, err);
            None
        }
    }
}

#[derive(Debug, Clone)]
pub enum Strategy {
    Single(SingleSelection),
    SingleInterval(SingleInterval),
    MultipleInterval(MultipleInterval),
}

impl Strategy {
    pub fn for_mode(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(SingleSelection::default()),
            SelectionMode::SingleInterval => Self::SingleInterval(SingleInterval::default()),
            SelectionMode::MultipleInterval => Self::MultipleInterval(MultipleInterval::default()),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::SingleInterval(_) => SelectionMode::SingleInterval,
            Self::MultipleInterval(_) => SelectionMode::MultipleInterval,
        }
    }

    pub fn add_selection_interval(&mut self, from: Option<Date>, to: Option<Date>) {
        match self {
            Self::Single(s) => s.add_selection_interval(from, to),
            Self::SingleInterval(s) => s.add_selection_interval(from, to),
            Self::MultipleInterval(s) => s.add_selection_interval(from, to),
        }
    }

    /// Only multiple-interval selections can have holes cut into them.
    pub fn remove_selection_interval(&mut self, from: Option<Date>, to: Option<Date>) {
        if let Self::MultipleInterval(s) = self {
            s.remove_selection_interval(from, to);
        }
    }

    pub fn clear_selection(&mut self) {
        match self {
            Self::Single(s) => s.clear_selection(),
            Self::SingleInterval(s) => s.clear_selection(),
            Self::MultipleInterval(s) => s.clear_selection(),
        }
    }

    pub fn is_selected_date(&self, date: Date) -> bool {
        match self {
            Self::Single(s) => s.is_selected_date(date),
            Self::SingleInterval(s) => s.is_selected_date(date),
            Self::MultipleInterval(s) => s.is_selected_date(date),
        }
    }

    pub fn is_selection_empty(&self) -> bool {
        match self {
            Self::Single(s) => s.is_selection_empty(),
            Self::SingleInterval(s) => s.is_selection_empty(),
            Self::MultipleInterval(s) => s.is_selection_empty(),
        }
    }

    pub fn lead_selection_date(&self) -> Option<Date> {
        match self {
            Self::Single(s) => s.lead_selection_date(),
            Self::SingleInterval(s) => s.lead_selection_date(),
            Self::MultipleInterval(s) => s.lead_selection_date(),
        }
    }

    pub fn set_lead_selection_date(&mut self, date: Option<Date>) {
        match self {
            Self::Single(s) => s.set_lead_selection_date(date),
            Self::SingleInterval(s) => s.set_lead_selection_date(date),
            Self::MultipleInterval(s) => s.set_lead_selection_date(date),
        }
    }

    pub fn selected_date(&self) -> Option<Date> {
        match self {
            Self::Single(s) => s.selected_date(),
            Self::SingleInterval(s) => s.selected_date(),
            Self::MultipleInterval(s) => s.selected_date(),
        }
    }

    pub fn selected_dates(&self) -> Vec<Date> {
        match self {
            Self::Single(s) => s.selected_dates(),
            Self::SingleInterval(s) => s.selected_dates(),
            Self::MultipleInterval(s) => s.selected_dates(),
        }
    }

    pub fn set_selected_date(
        &mut self,
        parser: &dyn DateParser,
        value: &DateValue,
    ) -> SelectionOutcome {
        match self {
            Self::Single(s) => s.set_selected_date(parser, value),
            Self::SingleInterval(s) => s.set_selected_date(parser, value),
            Self::MultipleInterval(s) => s.set_selected_date(parser, value),
        }
    }

    pub fn set_selected_dates(
        &mut self,
        parser: &dyn DateParser,
        values: &[DateValue],
    ) -> SelectionOutcome {
        match self {
            Self::Single(s) => s.set_selected_dates(parser, values),
            Self::SingleInterval(s) => s.set_selected_dates(parser, values),
            Self::MultipleInterval(s) => s.set_selected_dates(parser, values),
        }
    }
}
