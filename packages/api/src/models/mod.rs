pub mod chat;
pub mod document;
pub mod user;

pub use chat::{extract_answer, Analysis, AnalyzeRequest, ChatRequest};
pub use document::{sort_newest_first, Document, DriveImport, UpdateDocument, Upload};
pub use user::{
    AuthResponse, LoginRequest, NewUser, ProfilePatch, RegisterRequest, Role, RolePatch, UserInfo,
};
