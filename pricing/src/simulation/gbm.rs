use rand::Rng;
use rand_distr::StandardNormal;
use rand_hc::Hc128Rng;

use crate::simulation::monte_carlo::{Path, PathSampler};

/// Model params for the SDE
/// '''math
/// dS_t / S_t = mu dt + sigma dW_t
/// ''', where $dW_t ~ N(0, sqrt(dt))$
/// https://en.wikipedia.org/wiki/Geometric_Brownian_motion
pub struct GeometricBrownianMotion {
    initial_value: f64,
    /// drift term
    mu: f64,
    /// volatility
    sigma: f64,
    /// change in time
    dt: f64,
}

impl GeometricBrownianMotion {
    pub fn new(initial_value: f64, drift: f64, vola: f64, dt: f64) -> Self {
        Self {
            initial_value,
            mu: drift,
            sigma: vola,
            dt,
        }
    }

    /// One step of the exact solution of the SDE over `dt`.
    pub fn step(&self, st: f64, z: f64) -> f64 {
        let ret = self.dt * (self.mu - self.sigma.powi(2) / 2.0) + self.dt.sqrt() * self.sigma * z;
        st * ret.exp()
    }

    /// The value at the end of a horizon of `t` years, reached in a single step.
    pub fn terminal_price(&self, t: f64, z: f64) -> f64 {
        let ret = t * (self.mu - self.sigma.powi(2) / 2.0) + t.sqrt() * self.sigma * z;
        self.initial_value * ret.exp()
    }

    /// The generated path starts at the initial value, followed by one entry
    /// per standard normal increment.
    pub fn generate_path(&self, standard_normals: &[f64]) -> Path {
        let mut path = Vec::with_capacity(standard_normals.len() + 1);
        let mut curr_p = self.initial_value;
        path.push(curr_p);
        for z in standard_normals {
            curr_p = self.step(curr_p, *z);
            path.push(curr_p);
        }
        path
    }
}

impl PathSampler for GeometricBrownianMotion {
    fn sample_path(&self, rn_generator: &mut Hc128Rng, nr_steps: usize) -> Path {
        let standard_normals: Vec<f64> = rn_generator
            .sample_iter(StandardNormal)
            .take(nr_steps)
            .collect();
        self.generate_path(&standard_normals)
    }

    fn sample_terminal_price(&self, rn_generator: &mut Hc128Rng, nr_steps: usize) -> f64 {
        let horizon = self.dt * nr_steps as f64;
        self.terminal_price(horizon, rn_generator.sample(StandardNormal))
    }
}
