use indexmap::IndexMap;

use super::SelectionModel;

/// Fired after the selection changed. It carries no description of the
/// change; listeners query `source()` for the new state.
pub struct DateSelectionEvent<'a> {
    source: &'a SelectionModel,
}

impl<'a> DateSelectionEvent<'a> {
    pub(super) fn new(source: &'a SelectionModel) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &'a SelectionModel {
        self.source
    }
}

pub trait DateSelectionListener {
    fn value_changed(&self, event: &DateSelectionEvent<'_>);
}

impl<F> DateSelectionListener for F
where
    F: Fn(&DateSelectionEvent<'_>),
{
    fn value_changed(&self, event: &DateSelectionEvent<'_>) {
        self(event)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Default)]
pub(super) struct ListenerRegistry {
    listeners: IndexMap<ListenerId, Box<dyn DateSelectionListener>>,
    next_id: u64,
}

impl ListenerRegistry {
    pub fn insert(&mut self, listener: Box<dyn DateSelectionListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, listener);
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        self.listeners.shift_remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn notify(&self, event: &DateSelectionEvent<'_>) {
        for listener in self.listeners.values() {
            listener.value_changed(event);
        }
    }
}
