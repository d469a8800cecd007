use crate::domain::{entities::AppliedState, repositories::QueryParamStore};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Default)]
struct Inner {
    state: AppliedState,
    writes: usize,
}

/// Query parameters held in memory; clones share the same location.
#[derive(Clone, Default)]
pub struct InMemoryQueryParams {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryQueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppliedState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner { state, writes: 0 })),
        }
    }

    pub fn snapshot(&self) -> AppliedState {
        self.read()
    }

    /// Number of times the location has been rewritten.
    pub fn writes(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .writes
    }
}

impl QueryParamStore for InMemoryQueryParams {
    fn read(&self) -> AppliedState {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .state
            .clone()
    }

    fn write(&mut self, state: AppliedState) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        tracing::trace!("Rewriting query params: {:?}", state);
        inner.state = state;
        inner.writes += 1;
    }
}
