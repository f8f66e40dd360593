mod layout;
pub use layout::{AppLayout, NotFound, Shell};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod documents;
pub use documents::Documents;

mod document_detail;
pub use document_detail::DocumentDetail;

mod chats;
pub use chats::Chats;

mod chat;
pub use chat::Chat;

mod users;
pub use users::Users;

mod settings;
pub use settings::Settings;
