use std::sync::Arc;

use storage::records::SessionRecords;
use storage::repository::Storage;

use crate::api::{ApiConfig, HttpStudyApi, StudyApi};
use crate::error::AppServicesError;
use crate::progress::ProgressService;

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the HTTP study API.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, api: ApiConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let api: Arc<dyn StudyApi> = Arc::new(HttpStudyApi::new(api));
        Ok(Self::from_parts(&storage, api))
    }

    /// Build services over an existing storage aggregate and API client.
    #[must_use]
    pub fn from_parts(storage: &Storage, api: Arc<dyn StudyApi>) -> Self {
        let records = SessionRecords::new(Arc::clone(&storage.sessions));
        Self {
            progress: Arc::new(ProgressService::new(api, records)),
        }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}
