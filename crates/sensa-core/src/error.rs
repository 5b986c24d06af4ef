use thiserror::Error;

use crate::Kind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("value of kind {actual} does not fit a sensor of kind {expected}")]
    KindMismatch { expected: Kind, actual: Kind },
}

pub type Result<T> = std::result::Result<T, Error>;
