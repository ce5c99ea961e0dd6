use std::collections::VecDeque;

use uuid::Uuid;

use crate::{AnalysisResult, DecodeFailure};

pub const DEFAULT_CAPACITY: usize = 8;

/// In-memory hand-off between the upload flow and the results page.
///
/// Every entry can be taken exactly once. Nothing is persisted, and once
/// `capacity` entries are waiting the oldest one is dropped.
#[derive(Debug)]
pub struct OneShotStore {
    entries: VecDeque<(Uuid, AnalysisResult)>,
    capacity: usize,
}

impl Default for OneShotStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl OneShotStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn put(&mut self, result: AnalysisResult) -> Uuid {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        let id = Uuid::new_v4();
        self.entries.push_back((id, result));
        id
    }

    pub fn take(&mut self, id: &Uuid) -> Option<AnalysisResult> {
        let index = self.entries.iter().position(|(key, _)| key == id)?;
        self.entries.remove(index).map(|(_, result)| result)
    }

    pub fn take_or_fail(&mut self, id: &Uuid) -> Result<AnalysisResult, DecodeFailure> {
        self.take(id).ok_or(DecodeFailure::UnknownHandle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_consumes_once() {
        let mut store = OneShotStore::default();
        let original = AnalysisResult::new("HEALTHY", 42.5);
        let id = store.put(original.clone());
        assert_eq!(store.len(), 1);

        let taken = store.take(&id).unwrap();
        assert_eq!(taken.classification(), original.classification());
        assert_eq!(taken.confidence, original.confidence);
        assert!(store.is_empty());
        assert_eq!(store.take_or_fail(&id), Err(DecodeFailure::UnknownHandle));
    }

    #[test]
    fn test_unknown_handle() {
        let mut store = OneShotStore::default();
        store.put(AnalysisResult::new("PARKINSON", 91.0));
        assert!(store.take(&Uuid::new_v4()).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_oldest_entry_is_evicted() {
        let mut store = OneShotStore::with_capacity(2);
        let first = store.put(AnalysisResult::new("HEALTHY", 1.0));
        let second = store.put(AnalysisResult::new("HEALTHY", 2.0));
        let third = store.put(AnalysisResult::new("PARKINSON", 3.0));

        assert_eq!(store.len(), 2);
        assert!(store.take(&first).is_none());
        assert_eq!(store.take(&second).unwrap().confidence, 2.0);
        assert_eq!(store.take(&third).unwrap().confidence, 3.0);
    }
}
