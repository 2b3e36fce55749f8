use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaskError {
    #[error("mask pattern must not be empty")]
    EmptyPattern,
}
