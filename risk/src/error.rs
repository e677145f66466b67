use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RiskError {
    #[error("empty batch of samples")]
    EmptyBatch,
    #[error("empty price path")]
    EmptyPath,
    #[error("division by 0")]
    ZeroDivision,
}
