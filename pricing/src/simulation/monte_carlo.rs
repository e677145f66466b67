use rand::SeedableRng;
use rand_hc::Hc128Rng;

pub type Path = Vec<f64>;

/// Draws sample paths or terminal prices of a stochastic process, consuming
/// one standard normal increment per step.
pub trait PathSampler {
    fn sample_path(&self, rn_generator: &mut Hc128Rng, nr_steps: usize) -> Path;

    fn sample_terminal_price(&self, rn_generator: &mut Hc128Rng, nr_steps: usize) -> f64;
}

pub struct MonteCarloPathSimulator {
    pub nr_paths: usize,
    pub nr_steps: usize,
}

impl MonteCarloPathSimulator {
    pub fn new(nr_paths: usize, nr_steps: usize) -> Self {
        Self { nr_paths, nr_steps }
    }

    /// Simulates `nr_paths` paths of `nr_steps` steps each.
    /// The same seed reproduces the same batch.
    pub fn simulate_paths(&self, seed_nr: u64, sampler: &impl PathSampler) -> Vec<Path> {
        let mut rn_generator = Hc128Rng::seed_from_u64(seed_nr);
        (0..self.nr_paths)
            .map(|_| sampler.sample_path(&mut rn_generator, self.nr_steps))
            .collect()
    }

    /// Samples only the price at the end of the horizon of each path.
    pub fn simulate_terminal_prices(&self, seed_nr: u64, sampler: &impl PathSampler) -> Vec<f64> {
        let mut rn_generator = Hc128Rng::seed_from_u64(seed_nr);
        (0..self.nr_paths)
            .map(|_| sampler.sample_terminal_price(&mut rn_generator, self.nr_steps))
            .collect()
    }
}

pub struct PathEvaluator<'a> {
    paths: &'a [Path],
}

impl<'a> PathEvaluator<'a> {
    pub fn new(paths: &'a [Path]) -> Self {
        Self { paths }
    }

    pub fn evaluate(&self, path_fn: impl Fn(&'a Path) -> Option<f64>) -> Vec<Option<f64>> {
        self.paths.iter().map(path_fn).collect()
    }

    /// The average of `path_fn` over all paths; `None` for an empty batch.
    pub fn evaluate_average(&self, path_fn: impl Fn(&'a Path) -> Option<f64>) -> Option<f64> {
        if self.paths.is_empty() {
            return None;
        }
        let total = self.paths.iter().fold(None, |acc, path| {
            if let Some(path_value) = path_fn(path) {
                Some(acc.unwrap_or(0.0) + path_value)
            } else {
                acc
            }
        });
        total.map(|total| total / self.paths.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::gbm::GeometricBrownianMotion;
    use assert_approx_eq::assert_approx_eq;

    /// NOTE: the tolerance will depend on the number of sample paths and other params like steps and the volatility
    const TOLERANCE: f64 = 1e-1;

    #[test]
    fn same_seed_reproduces_the_batch() {
        let stock_gbm = GeometricBrownianMotion::new(100.0, 0.05, 0.2, 0.01);
        let mc_simulator = MonteCarloPathSimulator::new(100, 50);

        let paths = mc_simulator.simulate_paths(42, &stock_gbm);
        let paths_again = mc_simulator.simulate_paths(42, &stock_gbm);
        assert_eq!(paths, paths_again);

        let prices = mc_simulator.simulate_terminal_prices(42, &stock_gbm);
        let prices_again = mc_simulator.simulate_terminal_prices(42, &stock_gbm);
        assert_eq!(prices, prices_again);

        let other_seed = mc_simulator.simulate_paths(43, &stock_gbm);
        assert_ne!(paths, other_seed);
    }

    #[test]
    fn path_shape() {
        let stock_gbm = GeometricBrownianMotion::new(100.0, 0.05, 0.2, 0.01);
        let mc_simulator = MonteCarloPathSimulator::new(1_000, 100);

        let paths = mc_simulator.simulate_paths(42, &stock_gbm);
        assert_eq!(paths.len(), 1_000);
        for path in &paths {
            assert_eq!(path.len(), 101);
            assert_eq!(path[0], 100.0);
        }

        let prices = mc_simulator.simulate_terminal_prices(42, &stock_gbm);
        assert_eq!(prices.len(), 1_000);
        assert!(prices.iter().all(|p| *p > 0.0));
    }

    #[test]
    fn stock_price_simulation() {
        let nr_paths = 100_000;
        let nr_steps = 100;
        let drift = -0.2;
        let vola = 0.4;
        let s0 = 100.0;
        let tte = 5.0;
        let dt = tte / nr_steps as f64;

        let stock_gbm = GeometricBrownianMotion::new(s0, drift, vola, dt);
        let mc_simulator = MonteCarloPathSimulator::new(nr_paths, nr_steps);
        let paths = mc_simulator.simulate_paths(42, &stock_gbm);

        // the expected log return equals the analytic solution
        let path_eval = PathEvaluator::new(&paths);
        let avg_delta =
            path_eval.evaluate_average(|path| path.last().cloned().map(|p| (p / s0).ln()));
        let exp_delta = tte * (drift - vola.powi(2) / 2.0);
        assert_approx_eq!(avg_delta.unwrap(), exp_delta, TOLERANCE);
    }

    #[test]
    fn terminal_price_simulation() {
        let nr_paths = 100_000;
        let nr_steps = 100;
        let drift = -0.2;
        let vola = 0.4;
        let s0 = 100.0;
        let tte = 5.0;
        let dt = tte / nr_steps as f64;

        let stock_gbm = GeometricBrownianMotion::new(s0, drift, vola, dt);
        let mc_simulator = MonteCarloPathSimulator::new(nr_paths, nr_steps);
        let prices = mc_simulator.simulate_terminal_prices(42, &stock_gbm);

        let avg_delta =
            prices.iter().map(|p| (p / s0).ln()).sum::<f64>() / nr_paths as f64;
        let exp_delta = tte * (drift - vola.powi(2) / 2.0);
        assert_approx_eq!(avg_delta, exp_delta, TOLERANCE);
    }

    #[test]
    fn path_eval() {
        let paths = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![]];
        let path_eval = PathEvaluator::new(&paths);
        let avg = path_eval.evaluate_average(|_| Some(1.0_f64));
        assert_eq!(avg.unwrap(), (1.0 + 1.0 + 1.0) / 3.0);

        let avg = path_eval.evaluate_average(|path| path.first().cloned());
        assert_eq!(avg.unwrap(), (1.0 + 3.0) / 3.0);

        let avg = path_eval.evaluate_average(|path| path.last().cloned());
        assert_eq!(avg.unwrap(), (2.0 + 4.0) / 3.0);

        let values = path_eval.evaluate(|path| path.last().cloned());
        assert_eq!(values, vec![Some(2.0), Some(4.0), None]);

        let empty: Vec<Path> = vec![];
        let path_eval = PathEvaluator::new(&empty);
        assert!(path_eval.evaluate_average(|path| path.last().cloned()).is_none());
    }
}
