//! In-memory assessment store.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::{Assessment, Prediction};
use crate::error::Result;
use crate::port::AssessmentStore;

/// In-process [`AssessmentStore`] backed by a vector.
///
/// Reference implementation of the atomic save contract: the pair goes in
/// under one lock acquisition, so a reader never observes an assessment
/// without its prediction. Used by tests and as a stand-in until a real
/// database adapter is wired up by the surrounding application.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<(Assessment, Prediction)>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// True when nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Snapshot of all stored pairs, in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<(Assessment, Prediction)> {
        self.records.read().clone()
    }
}

#[async_trait]
impl AssessmentStore for MemoryStore {
    async fn save(&self, assessment: &Assessment, prediction: &Prediction) -> Result<()> {
        let mut stored = assessment.clone();
        if stored.created_at.is_none() {
            stored.created_at = Some(Utc::now());
        }
        self.records.write().push((stored, prediction.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cluster, RiskScore};

    fn prediction() -> Prediction {
        Prediction {
            cluster: Cluster::Mard,
            risk: RiskScore::new(45).unwrap(),
            model_version: "v1.0".into(),
            dataset_hash: String::new(),
        }
    }

    #[tokio::test]
    async fn saves_pair_and_stamps_created_at() {
        let store = MemoryStore::new();
        let a = Assessment::for_patient(4);

        store.save(&a, &prediction()).await.unwrap();

        let records = store.all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0.patient_id, 4);
        assert!(records[0].0.created_at.is_some());
        assert_eq!(records[0].1, prediction());
    }

    #[tokio::test]
    async fn preserves_caller_supplied_timestamp() {
        let store = MemoryStore::new();
        let mut a = Assessment::for_patient(9);
        let ts = Utc::now();
        a.created_at = Some(ts);

        store.save(&a, &prediction()).await.unwrap();

        assert_eq!(store.all()[0].0.created_at, Some(ts));
    }
}
