//! Lock-guarded confession for callers that share a record across threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use triadic_types::{Determination, TriadicState};

use crate::confession::ConfessionRecord;
use crate::error::ForgivenessError;
use crate::operator::ForgivenessOperator;

/// A [`ConfessionRecord`] behind a single exclusive lock.
///
/// The determination check and the authorization side effect of a release
/// happen under one lock acquisition, so concurrent releases of the same
/// record can never both observe `Unknown`.
#[derive(Clone, Debug)]
pub struct SharedConfession {
    inner: Arc<Mutex<ConfessionRecord>>,
}

impl SharedConfession {
    pub fn new(confession: ConfessionRecord) -> Self {
        Self {
            inner: Arc::new(Mutex::new(confession)),
        }
    }

    // Every mutation is a single field assignment, so a poisoned record is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, ConfessionRecord> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn witness(&self) {
        self.lock().witness();
    }

    pub fn authorize(&self, determination: Determination) -> Result<(), ForgivenessError> {
        self.lock().authorize(determination)
    }

    pub fn release(
        &self,
        operator: &ForgivenessOperator,
    ) -> Result<TriadicState, ForgivenessError> {
        let mut guard = self.lock();
        operator.release(&mut guard)
    }

    pub fn determination(&self) -> Determination {
        self.lock().determination()
    }

    /// Copy of the record as it stands now.
    pub fn snapshot(&self) -> ConfessionRecord {
        self.lock().clone()
    }
}

impl From<ConfessionRecord> for SharedConfession {
    fn from(confession: ConfessionRecord) -> Self {
        Self::new(confession)
    }
}
