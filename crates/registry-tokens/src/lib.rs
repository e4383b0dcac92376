pub mod errors;
mod issuer;
pub mod types;


pub use errors::*;
pub use issuer::TokenIssuer;
pub use types::*;
