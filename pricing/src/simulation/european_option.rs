use crate::common::models::DerivativeParameter;
use crate::simulation::gbm::GeometricBrownianMotion;
use crate::simulation::monte_carlo::{MonteCarloPathSimulator, Path, PathEvaluator};

/// Monte Carlo valuation of the standard European option: the discounted
/// average payoff over simulated risk-neutral price paths.
pub struct MonteCarloEuropeanOption {
    option_params: DerivativeParameter,
    mc_simulator: MonteCarloPathSimulator,
    seed_nr: u64,
}

impl MonteCarloEuropeanOption {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
        nr_paths: usize,
        nr_steps: usize,
        seed_nr: u64,
    ) -> Self {
        let option_params =
            DerivativeParameter::new(asset_price, strike, time_to_expiration, rfr, vola);
        let mc_simulator = MonteCarloPathSimulator::new(nr_paths, nr_steps);
        Self {
            option_params,
            mc_simulator,
            seed_nr,
        }
    }

    fn dt(&self) -> f64 {
        self.option_params.time_to_expiration / self.mc_simulator.nr_steps as f64
    }

    fn discount_factor(&self, t: f64) -> f64 {
        (-t * self.option_params.rfr).exp()
    }

    fn call_payoff(&self, strike: f64, disc_factor: f64, path: &[f64]) -> Option<f64> {
        path.last().map(|p| (p - strike).max(0.0) * disc_factor)
    }

    fn put_payoff(&self, strike: f64, disc_factor: f64, path: &[f64]) -> Option<f64> {
        path.last().map(|p| (strike - p).max(0.0) * disc_factor)
    }

    pub fn sample_payoffs(&self, pay_off: impl Fn(&Path) -> Option<f64>) -> Option<f64> {
        let stock_gbm: GeometricBrownianMotion = self.into();
        let paths = self.mc_simulator.simulate_paths(self.seed_nr, &stock_gbm);
        let path_evaluator = PathEvaluator::new(&paths);
        path_evaluator.evaluate_average(pay_off)
    }

    /// The batch of simulated risk-neutral terminal prices, the shape a
    /// payoff analysis consumes.
    pub fn simulate_terminal_prices(&self) -> Vec<f64> {
        let stock_gbm: GeometricBrownianMotion = self.into();
        self.mc_simulator
            .simulate_terminal_prices(self.seed_nr, &stock_gbm)
    }

    /// The price (theoretical value) of the standard European call option.
    pub fn call(&self) -> Option<f64> {
        let disc_factor = self.discount_factor(self.option_params.time_to_expiration);
        self.sample_payoffs(|path| self.call_payoff(self.option_params.strike, disc_factor, path))
    }

    /// The price (theoretical value) of the standard European put option.
    pub fn put(&self) -> Option<f64> {
        let disc_factor = self.discount_factor(self.option_params.time_to_expiration);
        self.sample_payoffs(|path| self.put_payoff(self.option_params.strike, disc_factor, path))
    }
}

impl From<&MonteCarloEuropeanOption> for GeometricBrownianMotion {
    fn from(mceo: &MonteCarloEuropeanOption) -> Self {
        // under the risk neutral measure we have mu = r
        let drift = mceo.option_params.rfr;
        GeometricBrownianMotion::new(
            mceo.option_params.asset_price,
            drift,
            mceo.option_params.vola,
            mceo.dt(),
        )
    }
}
