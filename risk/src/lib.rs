pub mod error;
pub mod histogram;
pub mod payoff;
