use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use study_core::model::{CompletedLessons, Plan, Profile, Progress};
use tracing::warn;

use crate::repository::{SessionStore, StorageError};

/// Keys under which the learning session is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Profile,
    Plan,
    Progress,
    CompletedLessons,
}

impl RecordKey {
    pub const ALL: [RecordKey; 4] = [
        RecordKey::Profile,
        RecordKey::Plan,
        RecordKey::Progress,
        RecordKey::CompletedLessons,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RecordKey::Profile => "study_agent_profile",
            RecordKey::Plan => "study_agent_plan",
            RecordKey::Progress => "study_agent_progress",
            RecordKey::CompletedLessons => "study_agent_completed_lessons",
        }
    }
}

/// Typed view over a [`SessionStore`].
///
/// Reads never fail: a missing, unreadable or malformed record is reported as
/// absent and logged, so a corrupt entry cannot block startup.
#[derive(Clone)]
pub struct SessionRecords {
    store: Arc<dyn SessionStore>,
}

impl SessionRecords {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn load_profile(&self) -> Option<Profile> {
        self.load(RecordKey::Profile).await
    }

    pub async fn load_plan(&self) -> Option<Plan> {
        self.load(RecordKey::Plan).await
    }

    pub async fn load_progress(&self) -> Option<Progress> {
        self.load(RecordKey::Progress).await
    }

    pub async fn load_completed(&self) -> Option<CompletedLessons> {
        self.load(RecordKey::CompletedLessons).await
    }

    /// Persist the learner profile.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the write fails.
    pub async fn save_profile(&self, profile: &Profile) -> Result<(), StorageError> {
        let value = encode(profile)?;
        self.store.put_raw(RecordKey::Profile.as_str(), value).await
    }

    /// Persist the frontier and completed set together.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the write fails.
    pub async fn save_progress_and_completed(
        &self,
        progress: Progress,
        completed: &CompletedLessons,
    ) -> Result<(), StorageError> {
        let entries = vec![
            (RecordKey::Progress.as_str().to_owned(), encode(&progress)?),
            (
                RecordKey::CompletedLessons.as_str().to_owned(),
                encode(completed)?,
            ),
        ];
        self.store.put_many(entries).await
    }

    /// Persist a freshly generated plan with its progress reset.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the write fails; in that case
    /// none of the three records change.
    pub async fn save_new_plan(&self, plan: &Plan) -> Result<(), StorageError> {
        let entries = vec![
            (RecordKey::Plan.as_str().to_owned(), encode(plan)?),
            (
                RecordKey::Progress.as_str().to_owned(),
                encode(&Progress::default())?,
            ),
            (
                RecordKey::CompletedLessons.as_str().to_owned(),
                encode(&CompletedLessons::new())?,
            ),
        ];
        self.store.put_many(entries).await
    }

    /// Remove every session record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the removal fails.
    pub async fn clear(&self) -> Result<(), StorageError> {
        let keys = RecordKey::ALL.map(RecordKey::as_str);
        self.store.remove_many(&keys).await
    }

    async fn load<T: DeserializeOwned>(&self, key: RecordKey) -> Option<T> {
        let raw = match self.store.get_raw(key.as_str()).await {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(key = key.as_str(), error = %err, "failed to read session record");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key = key.as_str(), error = %err, "discarding malformed session record");
                None
            }
        }
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))
}
