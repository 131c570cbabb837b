pub mod name;
pub mod password;

pub use name::*;
pub use password::*;
