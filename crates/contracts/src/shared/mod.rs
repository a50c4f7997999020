pub mod error;

pub use error::{ContractError, ValidationError};
