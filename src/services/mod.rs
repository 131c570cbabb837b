pub mod data_stores;
pub mod hashmap_credential_store;
pub mod hashmap_session_cache;
pub mod session;

pub use hashmap_credential_store::*;
pub use hashmap_session_cache::*;
pub use session::*;
