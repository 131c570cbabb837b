use std::sync::Arc;

use tokio::sync::RwLock;

pub mod credential_store;
pub mod credential_store_err;
pub mod session_cache;
pub mod session_cache_err;

pub use credential_store::CredentialStore;
pub use credential_store_err::CredentialStoreError;
pub use session_cache::SessionCache;
pub use session_cache_err::SessionCacheError;

// Using type aliases to improve readability!
pub type CredentialStoreHandle = Arc<RwLock<dyn CredentialStore>>;
pub type SessionCacheHandle = Arc<RwLock<dyn SessionCache>>;
