pub mod data_stores;
pub mod identity;
pub mod issued_token;
pub mod token_claims;

pub use data_stores::*;
pub use identity::*;
pub use issued_token::*;
pub use token_claims::*;
