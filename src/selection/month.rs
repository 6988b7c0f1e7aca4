use crate::core::calendar::{Date, MonthGrid, days_in_month};

use super::SelectionModel;

impl SelectionModel {
    /// Day numbers of `month` that are currently selected, ascending.
    pub fn selected_days_in_month(&self, year: i32, month: u8) -> Vec<u8> {
        if !(1..=12).contains(&month) {
            return Vec::new();
        }
        (1..=days_in_month(year, month))
            .filter(|&day| self.strategy.is_selected_date(Date { year, month, day }))
            .collect()
    }
}

impl MonthGrid {
    /// Per-cell selection flags for this grid. Empty cells are never marked.
    pub fn selection_marks(&self, model: &SelectionModel) -> [[bool; 7]; 6] {
        let mut marks = [[false; 7]; 6];
        for (row, cells) in marks.iter_mut().enumerate() {
            for (col, mark) in cells.iter_mut().enumerate() {
                *mark = self
                    .date_at(row, col)
                    .is_some_and(|date| model.is_selected_date(date));
            }
        }
        marks
    }
}
