use crate::MirrorError;
use staffing_core::Entity;

/// Snapshot of one mirror. `extra` holds per-collection secondary caches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionState<X = ()> {
    pub items: Vec<Entity>,
    pub is_busy: bool,
    pub last_error: Option<MirrorError>,
    pub extra: X,
}

impl<X> CollectionState<X> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Loaded, idle, and error free.
    pub fn has_data(&self) -> bool {
        !self.is_busy && self.last_error.is_none() && !self.items.is_empty()
    }

    pub fn last_error_message(&self) -> Option<String> {
        self.last_error.as_ref().map(ToString::to_string)
    }
}

pub(crate) fn items_of<X>(state: &mut CollectionState<X>) -> &mut Vec<Entity> {
    &mut state.items
}
