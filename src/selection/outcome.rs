use crate::core::parse::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedValue {
    /// Position of the value in the caller's input.
    pub index: usize,
    pub error: ParseError,
}

/// What a `set_selected_date(s)` call actually applied. Values that could
/// not be parsed are skipped rather than failing the whole call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionOutcome {
    pub applied: usize,
    pub skipped: Vec<SkippedValue>,
}

impl SelectionOutcome {
    pub fn skip(&mut self, index: usize, error: ParseError) {
        self.skipped.push(SkippedValue { index, error });
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn is_partial(&self) -> bool {
        self.applied > 0 && !self.skipped.is_empty()
    }

    pub fn skipped_indices(&self) -> Vec<usize> {
        self.skipped.iter().map(|skipped| skipped.index).collect()
    }
}
