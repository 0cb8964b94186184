use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};

use crate::domain::clock::clock::{Clock, SharedClock};

/// Manually driven clock. Clones share the same instant, so a test can keep
/// one handle and advance time under a store that owns another.
#[derive(Debug, Clone)]
pub struct MockClock {
    time: Arc<RwLock<DateTime<Utc>>>,
}

impl MockClock {
    pub fn new(time: DateTime<Utc>) -> MockClock {
        MockClock { time: Arc::new(RwLock::new(time)) }
    }

    pub fn advance(&self, by: Duration) {
        let mut guard = self.time.write().unwrap_or_else(PoisonError::into_inner);
        *guard += by;
    }

    pub fn shared(&self) -> SharedClock {
        self.clone_box()
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.time.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn clone_box(&self) -> SharedClock {
        SharedClock(Arc::new(self.clone()))
    }
}
