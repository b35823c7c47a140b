mod config;
pub mod debounce;
pub mod device;
mod env;
mod fit;
mod screen;

pub use config::*;
pub use env::*;
pub use fit::*;
pub use screen::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("element {0:?} not found")]
    ElementNotFound(String),
    #[error("environment call failed: {0}")]
    Environment(String),
}

pub type Result<T> = std::result::Result<T, Error>;
