mod auth;
mod credentials;

pub use auth::EXPIRY_MARGIN_SECS;
pub use auth::TokenManager;
pub use credentials::CredentialStore;
pub use credentials::FileCredentialStore;
pub use credentials::MemoryCredentialStore;
