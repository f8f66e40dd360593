use std::rc::Rc;

use store::KeyValueStore;
use tracing::{debug, error, info, warn};

use super::Generation;
use crate::backend::DocumentBackend;
use crate::error::ApiError;
use crate::models::{sort_newest_first, Analysis, Document, DriveImport, UpdateDocument, Upload};
use crate::session::{Navigate, SessionStore};
use crate::shared::Shared;

/// What the document views render from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentsState {
    /// Newest first.
    pub documents: Vec<Document>,
    pub loading: bool,
    /// Uploads and Drive imports still running.
    pub uploads_in_flight: usize,
    /// Message from the last failed listing, cleared when a listing starts.
    pub error: Option<String>,
}

impl DocumentsState {
    pub fn uploading(&self) -> bool {
        self.uploads_in_flight > 0
    }
}

/// The signed-in user's documents, cached and re-listed after every change.
pub struct DocumentSync<B, S, N> {
    backend: Rc<B>,
    session: SessionStore<S>,
    navigator: N,
    state: Shared<DocumentsState>,
    generation: Generation,
}

impl<B, S: Clone, N: Clone> Clone for DocumentSync<B, S, N> {
    fn clone(&self) -> Self {
        Self {
            backend: Rc::clone(&self.backend),
            session: self.session.clone(),
            navigator: self.navigator.clone(),
            state: self.state.clone(),
            generation: self.generation.clone(),
        }
    }
}

/// Decrements the in-flight upload count when dropped.
struct InFlight<'a>(&'a Shared<DocumentsState>);

impl<'a> InFlight<'a> {
    fn start(state: &'a Shared<DocumentsState>) -> Self {
        state.update(|s| s.uploads_in_flight += 1);
        Self(state)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0
            .update(|s| s.uploads_in_flight = s.uploads_in_flight.saturating_sub(1));
    }
}

impl<B, S, N> DocumentSync<B, S, N>
where
    B: DocumentBackend,
    S: KeyValueStore,
    N: Navigate,
{
    pub fn new(backend: B, session: SessionStore<S>, navigator: N) -> Self {
        Self {
            backend: Rc::new(backend),
            session,
            navigator,
            state: Shared::new(DocumentsState::default()),
            generation: Generation::default(),
        }
    }

    pub fn state(&self) -> DocumentsState {
        self.state.get()
    }

    pub fn documents(&self) -> Vec<Document> {
        self.state.with(|s| s.documents.clone())
    }

    /// Call `listener` after every state change.
    pub fn subscribe(&self, listener: impl Fn(&DocumentsState) + 'static) {
        self.state.subscribe(listener);
    }

    fn token(&self) -> Result<String, ApiError> {
        self.session.credential().ok_or(ApiError::NotAuthenticated)
    }

    /// Replace the cache with the server's list.
    ///
    /// Without a credential this only clears `loading`. A response that lost
    /// the race to a newer listing is dropped. Failures other than 401 land in
    /// `error` and leave the cached list untouched.
    pub async fn fetch_all(&self) -> Result<(), ApiError> {
        let Some(token) = self.session.credential() else {
            debug!("no credential, skipping document listing");
            self.state.update(|s| s.loading = false);
            return Ok(());
        };

        let generation = self.generation.next();
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.backend.list_documents(&token).await;
        let result = self.session.intercept(result, &token, &self.navigator);

        if !self.generation.is_current(generation) {
            debug!(generation, "discarding stale document listing");
            return result.map(|_| ());
        }

        match result {
            Ok(mut documents) => {
                sort_newest_first(&mut documents);
                info!(count = documents.len(), "documents loaded");
                self.state.update(|s| {
                    s.documents = documents;
                    s.loading = false;
                });
                Ok(())
            }
            Err(ApiError::Unauthorized) => {
                self.state.update(|s| s.loading = false);
                Err(ApiError::Unauthorized)
            }
            Err(err) => {
                error!("Error fetching documents: {}", err);
                let message = err.to_string();
                self.state.update(|s| {
                    s.error = Some(message);
                    s.loading = false;
                });
                Err(err)
            }
        }
    }

    /// Re-list after a successful mutation. Listing failures are already in
    /// `state.error`, so the mutation itself still counts as done.
    async fn refresh(&self) {
        let _ = self.fetch_all().await;
    }

    fn finish<T>(
        &self,
        result: Result<T, ApiError>,
        token: &str,
        action: &str,
    ) -> Result<T, ApiError> {
        self.session
            .intercept(result, token, &self.navigator)
            .inspect_err(|err| warn!("{action} failed: {}", err))
    }

    /// Fetch one document without touching the cache.
    pub async fn get(&self, id: &str) -> Result<Document, ApiError> {
        let token = self.token()?;
        let result = self.backend.get_document(&token, id).await;
        self.finish(result, &token, "loading document")
    }

    pub async fn update(&self, id: &str, patch: &UpdateDocument) -> Result<(), ApiError> {
        let token = self.token()?;
        let result = self.backend.update_document(&token, id, patch).await;
        self.finish(result, &token, "updating document")?;
        self.refresh().await;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let token = self.token()?;
        let result = self.backend.delete_document(&token, id).await;
        self.finish(result, &token, "deleting document")?;
        self.refresh().await;
        Ok(())
    }

    /// Upload a local file. Overlapping uploads are independent; `uploading()`
    /// stays true until the last one has finished and re-listed.
    pub async fn upload(&self, upload: &Upload) -> Result<(), ApiError> {
        let token = self.token()?;
        let _in_flight = InFlight::start(&self.state);
        let result = self.backend.upload_document(&token, upload).await;
        self.finish(result, &token, "uploading file")?;
        info!(filename = %upload.filename, "file uploaded");
        self.refresh().await;
        Ok(())
    }

    /// Hand a Google Drive file to the backend for import.
    pub async fn import_from_drive(&self, import: &DriveImport) -> Result<(), ApiError> {
        let token = self.token()?;
        let _in_flight = InFlight::start(&self.state);
        let result = self.backend.import_from_drive(&token, import).await;
        self.finish(result, &token, "importing from Drive")?;
        self.refresh().await;
        Ok(())
    }

    pub async fn analyze(&self, document: &Document) -> Result<Analysis, ApiError> {
        let token = self.token()?;
        let result = self.backend.analyze_document(&token, document).await;
        self.finish(result, &token, "analyzing document")
    }
}
