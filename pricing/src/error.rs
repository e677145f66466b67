use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("invalid parameter {name}: {value}")]
    InvalidParameters { name: &'static str, value: f64 },
}
