pub mod redis_service;
pub mod redis_session_cache;

pub use redis_service::*;
pub use redis_session_cache::*;
