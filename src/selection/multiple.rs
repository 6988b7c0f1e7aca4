use crate::core::calendar::Date;
use crate::core::parse::DateParser;
use crate::core::value::DateValue;

use super::outcome::SelectionOutcome;
use super::strategy::parse_logged;

/// Any number of days. Adding overlapping intervals stores a day once per
/// add, while removing an interval drops a single entry per day, so a day
/// added twice needs two removals.
///
/// Entries are kept in ascending order as they are inserted, which keeps
/// `selected_dates` a plain read.
#[derive(Debug, Clone, Default)]
pub struct MultipleInterval {
    selected: Vec<Date>,
    lead: Option<Date>,
}

impl MultipleInterval {
    fn insert(&mut self, date: Date) {
        let at = self.selected.partition_point(|entry| *entry <= date);
        self.selected.insert(at, date);
    }

    pub fn add_selection_interval(&mut self, from: Option<Date>, to: Option<Date>) {
        let (Some(from), Some(to)) = (from, to) else {
            log::debug!(target: "datesel", "ignoring interval with a missing endpoint");
            return;
        };
        let (first, last) = if from < to { (from, to) } else { (to, from) };
        for day in first.days_through(last) {
            self.insert(day);
        }
        self.lead = Some(to);
    }

    pub fn remove_selection_interval(&mut self, from: Option<Date>, to: Option<Date>) {
        let (Some(from), Some(to)) = (from, to) else {
            log::debug!(target: "datesel", "ignoring removal with a missing endpoint");
            return;
        };
        let (first, last) = if from < to { (from, to) } else { (to, from) };
        for day in first.days_through(last) {
            if let Ok(at) = self.selected.binary_search(&day) {
                self.selected.remove(at);
            }
        }
        self.lead = Some(to);
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected_date(&self, date: Date) -> bool {
        self.selected.binary_search(&date).is_ok()
    }

    pub fn is_selection_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn lead_selection_date(&self) -> Option<Date> {
        self.lead
    }

    pub fn set_lead_selection_date(&mut self, date: Option<Date>) {
        self.lead = date;
    }

    /// The lead, which need not be selected itself, or `None` while
    /// nothing is selected.
    pub fn selected_date(&self) -> Option<Date> {
        if self.selected.is_empty() {
            return None;
        }
        self.lead
    }

    pub fn selected_dates(&self) -> Vec<Date> {
        self.selected.clone()
    }

    pub fn set_selected_date(
        &mut self,
        parser: &dyn DateParser,
        value: &DateValue,
    ) -> SelectionOutcome {
        self.selected.clear();
        let mut outcome = SelectionOutcome::default();
        if value.is_none() {
            return outcome;
        }
        if let Some(date) = parse_logged(parser, value, 0, &mut outcome, "set selected date") {
            self.insert(date);
        }
        outcome
    }

    pub fn set_selected_dates(
        &mut self,
        parser: &dyn DateParser,
        values: &[DateValue],
    ) -> SelectionOutcome {
        self.selected.clear();
        let mut outcome = SelectionOutcome::default();
        for (index, value) in values.iter().enumerate() {
            if let Some(date) = parse_logged(parser, value, index, &mut outcome, "set selected dates")
            {
                self.insert(date);
            }
        }
        outcome
    }
}
