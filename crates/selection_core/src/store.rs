//! The mounted state container and its two access capabilities.

use std::sync::{Arc, Weak};

use shared::error::StoreError;
use tokio::sync::watch;

use crate::reducer::{reduce, Action, AppState};

struct StoreInner {
    state: watch::Sender<AppState>,
}

/// One mounted selection container. Holds the only strong reference to the
/// underlying state; dropping the scope unmounts the container and every
/// handle obtained from it starts failing with `ContextMissing`.
pub struct SelectionScope {
    inner: Arc<StoreInner>,
}

impl SelectionScope {
    pub fn mount() -> Self {
        let (state, _) = watch::channel(AppState::default());
        Self {
            inner: Arc::new(StoreInner { state }),
        }
    }

    pub fn state_handle(&self) -> StateHandle {
        StateHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    pub fn dispatch_handle(&self) -> DispatchHandle {
        DispatchHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

/// Read capability: current-state snapshots plus a change subscription.
#[derive(Clone)]
pub struct StateHandle {
    inner: Weak<StoreInner>,
}

impl StateHandle {
    pub fn state(&self) -> Result<AppState, StoreError> {
        let inner = self.upgrade()?;
        let state = inner.state.borrow().clone();
        Ok(state)
    }

    pub fn subscribe(&self) -> Result<watch::Receiver<AppState>, StoreError> {
        Ok(self.upgrade()?.state.subscribe())
    }

    fn upgrade(&self) -> Result<Arc<StoreInner>, StoreError> {
        self.inner.upgrade().ok_or(StoreError::ContextMissing {
            accessor: "state handle",
        })
    }
}

/// Write capability: feeds actions through the reducer.
#[derive(Clone)]
pub struct DispatchHandle {
    inner: Weak<StoreInner>,
}

impl DispatchHandle {
    /// Applies one action. Transitions are serialized by the state slot, so
    /// concurrent dispatchers never observe a half-applied update.
    pub fn dispatch(&self, action: Action) -> Result<(), StoreError> {
        let inner = self.inner.upgrade().ok_or(StoreError::ContextMissing {
            accessor: "dispatch handle",
        })?;
        inner
            .state
            .send_modify(|state| *state = reduce(state, action));
        Ok(())
    }
}
