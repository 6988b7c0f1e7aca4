mod interval;
mod listeners;
mod mode;
mod month;
mod multiple;
mod outcome;
mod single;
mod strategy;

use std::fmt;

use crate::core::calendar::{Date, validate_date};
use crate::core::parse::{DateParser, PatternDateParser};
use crate::core::value::DateValue;
use listeners::ListenerRegistry;
use strategy::Strategy;

pub use interval::SingleInterval;
pub use listeners::{DateSelectionEvent, DateSelectionListener, ListenerId};
pub use mode::{ModeParseError, SelectionMode};
pub use multiple::MultipleInterval;
pub use outcome::{SelectionOutcome, SkippedValue};
pub use single::SingleSelection;

#[derive(Debug, Clone, Copy, Default)]
struct AdjustingState {
    is_adjusting: bool,
    /// Only set while `is_adjusting` is true.
    pending_notification: bool,
}

/// Which calendar days are selected, under a swappable selection mode.
///
/// Every mutation is forwarded to the active mode and then announced to
/// the registered listeners, unless the model is adjusting, in which case a
/// single notification is owed until adjusting ends.
///
/// The model is confined to the thread that created it: listeners are not
/// required to be `Send`, so the model is neither `Send` nor `Sync`.
/// Listeners only get shared access to the model, so they cannot mutate it
/// from inside a notification.
pub struct SelectionModel {
    strategy: Strategy,
    parser: Box<dyn DateParser>,
    adjusting: AdjustingState,
    listeners: ListenerRegistry,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::with_mode(SelectionMode::default())
    }

    pub fn with_mode(mode: SelectionMode) -> Self {
        Self {
            strategy: Strategy::for_mode(mode),
            parser: Box::new(PatternDateParser::default()),
            adjusting: AdjustingState::default(),
            listeners: ListenerRegistry::default(),
        }
    }

    pub fn with_parser(mut self, parser: impl DateParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    pub fn set_parser(&mut self, parser: impl DateParser + 'static) {
        self.parser = Box::new(parser);
    }

    // ── Mutations ─────────────────────────────────────────────────────────────

    /// Selects every day between the two endpoints, inclusive, in whatever
    /// way the current mode allows.
    pub fn add_selection_interval(
        &mut self,
        from: impl Into<Option<Date>>,
        to: impl Into<Option<Date>>,
    ) {
        let from = real_day(from.into(), "add selection interval");
        let to = real_day(to.into(), "add selection interval");
        self.strategy.add_selection_interval(from, to);
        self.fire_value_changed();
    }

    /// Deselects a run of days. Only multiple-interval mode changes; the
    /// notification is sent in every mode.
    pub fn remove_selection_interval(
        &mut self,
        from: impl Into<Option<Date>>,
        to: impl Into<Option<Date>>,
    ) {
        let from = real_day(from.into(), "remove selection interval");
        let to = real_day(to.into(), "remove selection interval");
        self.strategy.remove_selection_interval(from, to);
        self.fire_value_changed();
    }

    pub fn clear_selection(&mut self) {
        self.strategy.clear_selection();
        self.fire_value_changed();
    }

    pub fn set_selected_date(&mut self, value: impl Into<DateValue>) -> SelectionOutcome {
        let outcome = self
            .strategy
            .set_selected_date(self.parser.as_ref(), &value.into());
        self.fire_value_changed();
        outcome
    }

    pub fn set_selected_dates<I>(&mut self, values: I) -> SelectionOutcome
    where
        I: IntoIterator,
        I::Item: Into<DateValue>,
    {
        let values: Vec<DateValue> = values.into_iter().map(Into::into).collect();
        let outcome = self
            .strategy
            .set_selected_dates(self.parser.as_ref(), &values);
        self.fire_value_changed();
        outcome
    }

    /// Replaces the active mode with a fresh, empty one. Nothing carries
    /// over and no notification is sent.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        log::debug!(target: "datesel", "selection mode {} -> {}", self.strategy.mode(), mode);
        self.strategy = Strategy::for_mode(mode);
    }

    /// Moves the lead without announcing it.
    pub fn set_lead_selection_date(&mut self, date: impl Into<Option<Date>>) {
        self.strategy
            .set_lead_selection_date(real_day(date.into(), "set lead selection date"));
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn is_selected_date(&self, date: impl Into<Option<Date>>) -> bool {
        match date.into() {
            Some(date) => {
                validate_date(date.year, date.month, date.day).is_ok()
                    && self.strategy.is_selected_date(date)
            }
            None => false,
        }
    }

    pub fn is_selection_empty(&self) -> bool {
        self.strategy.is_selection_empty()
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.strategy.mode()
    }

    pub fn lead_selection_date(&self) -> Option<Date> {
        self.strategy.lead_selection_date()
    }

    pub fn selected_date(&self) -> Option<Date> {
        self.strategy.selected_date()
    }

    /// The whole selection in ascending order. Multiple-interval mode may
    /// list a day more than once.
    pub fn selected_dates(&self) -> Vec<Date> {
        self.strategy.selected_dates()
    }

    // ── Batching ──────────────────────────────────────────────────────────────

    pub fn set_value_is_adjusting(&mut self, adjusting: bool) {
        self.adjusting.is_adjusting = adjusting;
        if !adjusting && self.adjusting.pending_notification {
            self.adjusting.pending_notification = false;
            self.notify_listeners();
        }
    }

    pub fn value_is_adjusting(&self) -> bool {
        self.adjusting.is_adjusting
    }

    // ── Listeners ─────────────────────────────────────────────────────────────

    pub fn add_date_selection_listener(
        &mut self,
        listener: impl DateSelectionListener + 'static,
    ) -> ListenerId {
        let id = self.listeners.insert(Box::new(listener));
        log::debug!(target: "datesel", "registered listener {id:?}");
        id
    }

    pub fn remove_date_selection_listener(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.remove(id);
        log::debug!(target: "datesel", "removed listener {id:?}: {removed}");
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn fire_value_changed(&mut self) {
        if self.adjusting.is_adjusting {
            self.adjusting.pending_notification = true;
            log::debug!(target: "datesel", "deferring notification while adjusting");
            return;
        }
        self.notify_listeners();
    }

    fn notify_listeners(&self) {
        log::trace!(
            target: "datesel",
            "notifying {} selection listener(s)",
            self.listeners.len()
        );
        self.listeners.notify(&DateSelectionEvent::new(self));
    }
}

/// `Date` fields are public, so endpoints handed straight to the model can
/// name days that do not exist. Those are treated as absent.
fn real_day(date: Option<Date>, context: &str) -> Option<Date> {
    let date = date?;
    match validate_date(date.year, date.month, date.day) {
        Ok(date) => Some(date),
        Err(err) => {
            log::warn!(target: "datesel", "{context}: treating endpoint as absent: {err}");
            None
        }
    }
}

impl Default for SelectionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SelectionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionModel")
            .field("strategy", &self.strategy)
            .field("is_adjusting", &self.adjusting.is_adjusting)
            .field("pending_notification", &self.adjusting.pending_notification)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
