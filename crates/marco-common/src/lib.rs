pub mod errors;
pub mod id;

pub use errors::{ConfigError, MarcoError};
pub use id::{new_correlation_id, ExchangeId};

pub type Result<T> = std::result::Result<T, MarcoError>;
