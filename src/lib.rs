//! Token-based authentication and session lifecycle.
//!
//! The `SessionService` in [`services`] drives sign-up, login, access-token
//! refresh, and logout over two injected stores: a credential store holding
//! salted password hashes and a TTL'd session cache that gives every issued
//! token a revocable record. Tokens are RS256 JWTs signed with separate
//! access and refresh key pairs; the stateless codec lives in
//! [`utils::token`].
//!
//! A token is honored only while its signature verifies, it is unexpired,
//! and its session record is still in the cache.

pub mod domain;
pub mod errors;
pub mod services;
pub mod utils;
pub mod validation;
