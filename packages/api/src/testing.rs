//! In-process fakes shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use serde_json::{json, Value};
use store::{KeyValueStore, MemoryStore};
use tokio::sync::oneshot;

use crate::backend::{AuthBackend, ChatBackend, DocumentBackend, UserBackend};
use crate::error::ApiError;
use crate::models::{
    Analysis, AuthResponse, ChatRequest, Document, DriveImport, LoginRequest, NewUser,
    ProfilePatch, RegisterRequest, Role, UpdateDocument, Upload, UserInfo,
};

pub(crate) fn sample_user() -> UserInfo {
    UserInfo {
        id: "1".into(),
        username: "A".into(),
        email: "a@b.com".into(),
        role: Role::Empleado,
    }
}

pub(crate) fn sample_admin() -> UserInfo {
    UserInfo {
        id: "0".into(),
        username: "root".into(),
        email: "root@b.com".into(),
        role: Role::Admin,
    }
}

pub(crate) fn sample_auth() -> AuthResponse {
    AuthResponse {
        access_token: "tok1".into(),
        user: sample_user(),
    }
}

pub(crate) fn doc(id: &str, created_at: &str) -> Document {
    Document {
        id: id.into(),
        filename: format!("{id}.pdf"),
        s3_url: format!("https://bucket/{id}.pdf"),
        user_id: "1".into(),
        created_at: created_at.into(),
    }
}

/// MemoryStore that logs every removal into a shared event list.
#[derive(Clone)]
pub(crate) struct RecordingStore {
    inner: MemoryStore,
    events: Rc<RefCell<Vec<String>>>,
}

impl RecordingStore {
    pub(crate) fn new(events: Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            inner: MemoryStore::new(),
            events,
        }
    }
}

impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) {
        self.events.borrow_mut().push(format!("remove {key}"));
        self.inner.remove(key)
    }
}

/// A scripted stand-in for the backend.
///
/// Holds server-side documents and users and applies mutations to them.
/// `fail_next` errors are consumed by the next call of any kind. `hold_next_list`
/// and `hold_next_ask` make the next listing or question wait until the
/// returned sender fires; a held call takes its queued failure only once it is
/// released, so a test can script the response while the call is waiting.
#[derive(Default)]
pub(crate) struct FakeBackend {
    pub documents: RefCell<Vec<Document>>,
    pub users: RefCell<Vec<UserInfo>>,
    pub passwords: RefCell<HashMap<String, String>>,
    pub calls: RefCell<Vec<String>>,
    failures: RefCell<VecDeque<ApiError>>,
    list_gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    ask_gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    uploads: Cell<u32>,
}

impl FakeBackend {
    pub(crate) fn with_documents(documents: Vec<Document>) -> Rc<Self> {
        let backend = Self::default();
        *backend.documents.borrow_mut() = documents;
        Rc::new(backend)
    }

    pub(crate) fn fail_next(&self, err: ApiError) {
        self.failures.borrow_mut().push_back(err);
    }

    pub(crate) fn hold_next_list(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.list_gates.borrow_mut().push_back(rx);
        tx
    }

    pub(crate) fn hold_next_ask(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.ask_gates.borrow_mut().push_back(rx);
        tx
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        self.take_failure()
    }

    fn take_failure(&self) -> Result<(), ApiError> {
        match self.failures.borrow_mut().pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Log `call`, wait on the first gate in `gates` if there is one, then
    /// answer with the next queued failure or success.
    async fn record_gated(
        &self,
        call: String,
        gates: &RefCell<VecDeque<oneshot::Receiver<()>>>,
    ) -> Result<(), ApiError> {
        let gate = gates.borrow_mut().pop_front();
        let Some(gate) = gate else {
            return self.record(call);
        };
        self.calls.borrow_mut().push(call);
        let _ = gate.await;
        self.take_failure()
    }
}

impl AuthBackend for Rc<FakeBackend> {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.record(format!("login {}", request.email))?;
        let known = self.passwords.borrow().get(&request.email).cloned();
        match known {
            Some(password) if password == request.password => Ok(sample_auth()),
            _ => Err(ApiError::InvalidCredentials),
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.record(format!("register {}", request.email))?;
        if self.passwords.borrow().contains_key(&request.email) {
            return Err(ApiError::Conflict);
        }
        self.passwords
            .borrow_mut()
            .insert(request.email.clone(), request.password.clone());
        Ok(())
    }
}

impl DocumentBackend for Rc<FakeBackend> {
    async fn list_documents(&self, token: &str) -> Result<Vec<Document>, ApiError> {
        let snapshot = self.documents.borrow().clone();
        self.record_gated(format!("list {token}"), &self.list_gates)
            .await?;
        Ok(snapshot)
    }

    async fn get_document(&self, token: &str, id: &str) -> Result<Document, ApiError> {
        self.record(format!("get {id} {token}"))?;
        let found = self.documents.borrow().iter().find(|d| d.id == id).cloned();
        found.ok_or(ApiError::Status {
            status: 404,
            message: "Error loading document".into(),
        })
    }

    async fn update_document(
        &self,
        token: &str,
        id: &str,
        patch: &UpdateDocument,
    ) -> Result<(), ApiError> {
        self.record(format!("update {id} {token}"))?;
        for d in self.documents.borrow_mut().iter_mut().filter(|d| d.id == id) {
            if let Some(filename) = &patch.filename {
                d.filename = filename.clone();
            }
            if let Some(user_id) = &patch.user_id {
                d.user_id = user_id.clone();
            }
        }
        Ok(())
    }

    async fn delete_document(&self, token: &str, id: &str) -> Result<(), ApiError> {
        self.record(format!("delete {id} {token}"))?;
        self.documents.borrow_mut().retain(|d| d.id != id);
        Ok(())
    }

    async fn upload_document(&self, token: &str, upload: &Upload) -> Result<(), ApiError> {
        self.record(format!("upload {} {token}", upload.filename))?;
        let n = self.uploads.get() + 1;
        self.uploads.set(n);
        let mut document = doc(&format!("up{n}"), &format!("2030-01-{n:02}"));
        document.filename = upload.filename.clone();
        self.documents.borrow_mut().push(document);
        Ok(())
    }

    async fn import_from_drive(&self, token: &str, import: &DriveImport) -> Result<(), ApiError> {
        self.record(format!("drive {} {token}", import.file_id))?;
        let mut document = doc(&format!("drive-{}", import.file_id), "2031-01-01");
        document.filename = format!("{}.pdf", import.file_id);
        self.documents.borrow_mut().push(document);
        Ok(())
    }

    async fn analyze_document(&self, token: &str, document: &Document) -> Result<Analysis, ApiError> {
        self.record(format!("analyze {} {token}", document.id))?;
        Ok(Analysis {
            id: document.id.clone(),
            filename: document.filename.clone(),
            respuesta: format!("summary of {}", document.filename),
        })
    }
}

impl UserBackend for Rc<FakeBackend> {
    async fn list_users(&self, token: &str) -> Result<Vec<UserInfo>, ApiError> {
        self.record(format!("list-users {token}"))?;
        Ok(self.users.borrow().clone())
    }

    async fn create_user(&self, token: &str, user: &NewUser) -> Result<(), ApiError> {
        self.record(format!("create-user {} {token}", user.email))?;
        let id = format!("u{}", self.users.borrow().len() + 1);
        self.users.borrow_mut().push(UserInfo {
            id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
        });
        Ok(())
    }

    async fn update_role(&self, token: &str, id: &str, role: Role) -> Result<(), ApiError> {
        self.record(format!("update-role {id} {} {token}", role.as_str()))?;
        for u in self.users.borrow_mut().iter_mut().filter(|u| u.id == id) {
            u.role = role;
        }
        Ok(())
    }

    async fn update_profile(
        &self,
        token: &str,
        id: &str,
        patch: &ProfilePatch,
    ) -> Result<(), ApiError> {
        self.record(format!("update-profile {id} {token}"))?;
        for u in self.users.borrow_mut().iter_mut().filter(|u| u.id == id) {
            u.username = patch.username.clone();
            u.email = patch.email.clone();
        }
        Ok(())
    }

    async fn delete_user(&self, token: &str, id: &str) -> Result<(), ApiError> {
        self.record(format!("delete-user {id} {token}"))?;
        self.users.borrow_mut().retain(|u| u.id != id);
        Ok(())
    }
}

impl ChatBackend for Rc<FakeBackend> {
    async fn ask(&self, token: &str, request: &ChatRequest) -> Result<Value, ApiError> {
        self.record_gated(format!("ask {} {token}", request.document_id), &self.ask_gates)
            .await?;
        Ok(json!({ "awnser": format!("echo: {}", request.question) }))
    }
}

/// Navigator that counts how often it was sent to login.
#[derive(Clone, Default)]
pub(crate) struct CountingNavigator(pub Rc<Cell<u32>>);

impl CountingNavigator {
    pub(crate) fn count(&self) -> u32 {
        self.0.get()
    }
}

impl crate::session::Navigate for CountingNavigator {
    fn to_login(&self) {
        self.0.set(self.0.get() + 1);
    }
}
