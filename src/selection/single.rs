use crate::core::calendar::Date;
use crate::core::parse::DateParser;
use crate::core::value::DateValue;

use super::outcome::SelectionOutcome;
use super::strategy::parse_logged;

/// At most one selected day. The lead is the selection itself.
#[derive(Debug, Clone, Default)]
pub struct SingleSelection {
    selected: Option<Date>,
}

impl SingleSelection {
    pub fn add_selection_interval(&mut self, _from: Option<Date>, to: Option<Date>) {
        self.selected = to;
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_selected_date(&self, date: Date) -> bool {
        self.selected == Some(date)
    }

    pub fn is_selection_empty(&self) -> bool {
        self.selected.is_none()
    }

    pub fn lead_selection_date(&self) -> Option<Date> {
        self.selected
    }

    pub fn set_lead_selection_date(&mut self, date: Option<Date>) {
        self.selected = date;
    }

    pub fn selected_date(&self) -> Option<Date> {
        self.selected
    }

    pub fn selected_dates(&self) -> Vec<Date> {
        self.selected.into_iter().collect()
    }

    pub fn set_selected_date(
        &mut self,
        parser: &dyn DateParser,
        value: &DateValue,
    ) -> SelectionOutcome {
        let mut outcome = SelectionOutcome::default();
        if value.is_none() {
            return outcome;
        }
        if let Some(date) = parse_logged(parser, value, 0, &mut outcome, "set selected date") {
            self.selected = Some(date);
        }
        outcome
    }

    pub fn set_selected_dates(
        &mut self,
        parser: &dyn DateParser,
        values: &[DateValue],
    ) -> SelectionOutcome {
        let mut outcome = SelectionOutcome::default();
        let Some(first) = values.first() else {
            self.selected = None;
            return outcome;
        };
        if let Some(date) = parse_logged(parser, first, 0, &mut outcome, "set selected dates") {
            self.selected = Some(date);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::SingleSelection;
    use crate::core::calendar::Date;
    use crate::core::parse::PatternDateParser;
    use crate::core::value::DateValue;

    fn date(year: i32, month: u8, day: u8) -> Date {
        Date::from_parts(year, month, day).expect("valid date")
    }

    #[test]
    fn interval_keeps_only_the_end() {
        let mut single = SingleSelection::default();
        single.add_selection_interval(Some(date(2024, 1, 1)), Some(date(2024, 1, 9)));
        assert_eq!(single.selected_date(), Some(date(2024, 1, 9)));
        assert_eq!(single.selected_dates(), vec![date(2024, 1, 9)]);
        assert!(!single.is_selected_date(date(2024, 1, 1)));
        assert_eq!(single.lead_selection_date(), Some(date(2024, 1, 9)));
    }

    #[test]
    fn failed_parse_keeps_previous_selection() {
        let parser = PatternDateParser::default();
        let mut single = SingleSelection::default();
        single.set_selected_date(&parser, &"2024-05-01".into());

        let outcome = single.set_selected_date(&parser, &"soon".into());
        assert_eq!(outcome.skipped_indices(), vec![0]);
        assert_eq!(single.selected_date(), Some(date(2024, 5, 1)));

        let outcome = single.set_selected_date(&parser, &DateValue::None);
        assert!(outcome.is_complete());
        assert_eq!(single.selected_date(), Some(date(2024, 5, 1)));
    }

    #[test]
    fn set_dates_uses_first_or_clears() {
        let parser = PatternDateParser::default();
        let mut single = SingleSelection::default();
        let outcome =
            single.set_selected_dates(&parser, &["2024-02-02".into(), "2024-02-03".into()]);
        assert_eq!(outcome.applied, 1);
        assert_eq!(single.selected_dates(), vec![date(2024, 2, 2)]);

        single.set_selected_dates(&parser, &[]);
        assert!(single.is_selection_empty());
        assert!(single.selected_dates().is_empty());
    }
}
