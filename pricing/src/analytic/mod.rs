mod black_scholes;
mod curve;

pub use black_scholes::{BlackScholesMerton, OptionPrice};
pub use curve::{profit_loss_curve, sweep_curve, CurvePoint, SweepVariable};
