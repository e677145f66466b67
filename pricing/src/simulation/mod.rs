mod european_option;
mod gbm;
mod monte_carlo;

pub use european_option::MonteCarloEuropeanOption;
pub use gbm::GeometricBrownianMotion;
pub use monte_carlo::{MonteCarloPathSimulator, Path, PathEvaluator, PathSampler};
