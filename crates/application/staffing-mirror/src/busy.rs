use crate::state::CollectionState;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Marks a mirror busy for the lifetime of one operation.
///
/// Acquiring clears `last_error`; dropping clears `is_busy` on every exit path,
/// including early returns with an error. The flag is advisory: a second
/// overlapping operation is not rejected.
pub(crate) struct BusyGuard<X> {
    state: Arc<Mutex<CollectionState<X>>>,
}

impl<X> BusyGuard<X> {
    pub(crate) fn acquire(state: &Arc<Mutex<CollectionState<X>>>) -> Self {
        {
            let mut s = lock(state);
            s.is_busy = true;
            s.last_error = None;
        }
        Self {
            state: state.clone(),
        }
    }
}

impl<X> Drop for BusyGuard<X> {
    fn drop(&mut self) {
        lock(&self.state).is_busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MirrorError;

    #[test]
    fn guard_sets_and_releases_busy() {
        let state = Arc::new(Mutex::new(CollectionState::<()> {
            last_error: Some(MirrorError::NoResponse),
            ..Default::default()
        }));

        let guard = BusyGuard::acquire(&state);
        assert!(lock(&state).is_busy);
        assert_eq!(lock(&state).last_error, None);

        drop(guard);
        assert!(!lock(&state).is_busy);
    }

    #[test]
    fn guard_releases_on_early_return() {
        fn op(state: &Arc<Mutex<CollectionState<()>>>, fail: bool) -> Result<(), MirrorError> {
            let _busy = BusyGuard::acquire(state);
            if fail {
                return Err(MirrorError::UnexpectedFormat);
            }
            Ok(())
        }

        let state = Arc::new(Mutex::new(CollectionState::<()>::default()));
        assert!(op(&state, true).is_err());
        assert!(!lock(&state).is_busy);
        assert!(op(&state, false).is_ok());
        assert!(!lock(&state).is_busy);
    }
}
