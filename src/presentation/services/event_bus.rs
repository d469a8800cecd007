use crate::domain::entities::{AppliedState, CatalogKind};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone, Debug, PartialEq)]
pub enum FilterEvent {
    Committed {
        applied: AppliedState,
        at: DateTime<Utc>,
    },
    Cleared {
        at: DateTime<Utc>,
    },
    PresetApplied {
        policy_ids: Vec<String>,
        at: DateTime<Utc>,
    },
    CatalogMaterialized {
        kind: CatalogKind,
        options: usize,
    },
}

type Listener = Box<dyn Fn(&FilterEvent) + Send + Sync>;

pub struct EventBus {
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn publish(&self, event: FilterEvent) {
        let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(&event);
        }
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&FilterEvent) + Send + Sync + 'static,
    {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(listener));
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
