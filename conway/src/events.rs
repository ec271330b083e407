// events.rs - Refresh notifications delivered after every generation

use std::sync::Arc;

use tracing::warn;

use crate::grid::Matrix;

/// Immutable copy of the cells, fresh for every notification.
pub type Snapshot = Arc<Matrix>;

pub type SubscriberError = Box<dyn std::error::Error + Send + Sync>;

type RefreshFn = Box<dyn FnMut(&Refresh) -> Result<(), SubscriberError> + Send>;

/// Payload of a refresh notification.
#[derive(Debug, Clone)]
pub struct Refresh {
    pub generation: u64,
    pub cells: Snapshot,
    /// The new state also occurred within the recent-generation window.
    pub repeated: bool,
}

/// Subscribers of one simulator, called in registration order.
#[derive(Default)]
pub struct Subscribers {
    handlers: Vec<RefreshFn>,
}

impl Subscribers {
    pub fn push<F>(&mut self, handler: F)
    where
        F: FnMut(&Refresh) -> Result<(), SubscriberError> + Send + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Invokes every handler. A failing handler is logged and skipped so the
    /// ones after it still run; the number of failures is returned.
    pub fn notify(&mut self, refresh: &Refresh) -> usize {
        let mut failed = 0;
        for (index, handler) in self.handlers.iter_mut().enumerate() {
            if let Err(err) = handler(refresh) {
                failed += 1;
                warn!(subscriber = index, generation = refresh.generation, error = %err, "refresh subscriber failed");
            }
        }
        failed
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
