use crate::core::calendar::Date;
use crate::core::parse::DateParser;
use crate::core::value::DateValue;

use super::outcome::SelectionOutcome;
use super::strategy::parse_logged;

/// One contiguous run of days plus an independently tracked lead.
#[derive(Debug, Clone, Default)]
pub struct SingleInterval {
    range: Option<(Date, Date)>,
    lead: Option<Date>,
}

impl SingleInterval {
    pub fn add_selection_interval(&mut self, from: Option<Date>, to: Option<Date>) {
        let (Some(from), Some(to)) = (from, to) else {
            self.range = None;
            return;
        };
        self.range = Some(if from > to { (to, from) } else { (from, to) });
        self.lead = Some(to);
    }

    pub fn clear_selection(&mut self) {
        self.range = None;
    }

    /// Both stored bounds always count as selected, even when they were
    /// set out of order and enclose no days.
    pub fn is_selected_date(&self, date: Date) -> bool {
        match self.range {
            Some((from, to)) => date == from || date == to || (from <= date && date <= to),
            None => false,
        }
    }

    pub fn is_selection_empty(&self) -> bool {
        self.range.is_none()
    }

    pub fn bounds(&self) -> Option<(Date, Date)> {
        self.range
    }

    pub fn lead_selection_date(&self) -> Option<Date> {
        self.lead
    }

    pub fn set_lead_selection_date(&mut self, date: Option<Date>) {
        self.lead = date;
    }

    pub fn selected_date(&self) -> Option<Date> {
        self.lead
    }

    pub fn selected_dates(&self) -> Vec<Date> {
        match self.range {
            Some((from, to)) => from.days_through(to).collect(),
            None => Vec::new(),
        }
    }

    pub fn set_selected_date(
        &mut self,
        parser: &dyn DateParser,
        value: &DateValue,
    ) -> SelectionOutcome {
        let mut outcome = SelectionOutcome::default();
        if let Some(date) = parse_logged(parser, value, 0, &mut outcome, "set selected date") {
            self.range = Some((date, date));
        }
        outcome
    }

    /// Takes the first and last values as the bounds, in the order given.
    pub fn set_selected_dates(
        &mut self,
        parser: &dyn DateParser,
        values: &[DateValue],
    ) -> SelectionOutcome {
        let mut outcome = SelectionOutcome::default();
        let (Some(first), Some(last)) = (values.first(), values.last()) else {
            self.range = None;
            return outcome;
        };
        let from = parse_logged(parser, first, 0, &mut outcome, "set selected dates");
        let to = if values.len() == 1 {
            from
        } else {
            parse_logged(parser, last, values.len() - 1, &mut outcome, "set selected dates")
        };
        if let (Some(from), Some(to)) = (from, to) {
            self.range = Some((from, to));
        } else {
            outcome.applied = 0;
        }
        outcome
    }
}
