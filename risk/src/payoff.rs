use crate::error::RiskError;

/// The price at expiry of a simulated price path: its last element.
/// The path is ordered in time, starting at the initial price.
pub fn terminal_price(path: &[f64]) -> Result<f64, RiskError> {
    path.last().copied().ok_or(RiskError::EmptyPath)
}

/// The terminal prices of a batch of paths, in batch order.
pub fn terminal_prices(paths: &[Vec<f64>]) -> Result<Vec<f64>, RiskError> {
    paths.iter().map(|path| terminal_price(path)).collect()
}

/// A contract side's settlement terms: the strike it exercises at and the
/// premium paid for it. The premium is an opaque input; it may come from an
/// analytic pricer or from a market quote, this crate never derives it.
#[derive(Clone, Debug, PartialEq)]
pub struct PayoffProfile {
    pub strike: f64,
    pub premium: f64,
}

impl PayoffProfile {
    pub fn new(strike: f64, premium: f64) -> Self {
        Self { strike, premium }
    }

    pub fn call_payoff(&self, terminal_price: f64) -> f64 {
        (terminal_price - self.strike).max(0.0)
    }

    pub fn put_payoff(&self, terminal_price: f64) -> f64 {
        (self.strike - terminal_price).max(0.0)
    }

    pub fn profit_loss(&self, payoff: f64) -> f64 {
        payoff - self.premium
    }

    /// Per-sample profit or loss of the long call, in batch order.
    pub fn call_profit_losses(&self, terminal_prices: &[f64]) -> Vec<f64> {
        terminal_prices
            .iter()
            .map(|&p| self.profit_loss(self.call_payoff(p)))
            .collect()
    }

    /// Per-sample profit or loss of the long put, in batch order.
    pub fn put_profit_losses(&self, terminal_prices: &[f64]) -> Vec<f64> {
        terminal_prices
            .iter()
            .map(|&p| self.profit_loss(self.put_payoff(p)))
            .collect()
    }

    pub fn call_summary(&self, terminal_prices: &[f64]) -> Result<ProfitLossSummary, RiskError> {
        summarize(&self.call_profit_losses(terminal_prices))
    }

    pub fn put_summary(&self, terminal_prices: &[f64]) -> Result<ProfitLossSummary, RiskError> {
        summarize(&self.put_profit_losses(terminal_prices))
    }
}

/// Counts and fractions of profitable and losing samples in a batch.
/// The counts always add up to the batch size.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfitLossSummary {
    pub profitable_count: usize,
    pub losing_count: usize,
    pub profitable_fraction: f64,
    pub loss_fraction: f64,
}

/// Classifies each profit/loss value of a batch. A value of exactly zero
/// counts as losing: the position never recovered its premium.
pub fn summarize(profit_losses: &[f64]) -> Result<ProfitLossSummary, RiskError> {
    if profit_losses.is_empty() {
        return Err(RiskError::EmptyBatch);
    }
    let profitable_count = profit_losses.iter().filter(|&&pl| pl > 0.0).count();
    let losing_count = profit_losses.len() - profitable_count;
    let nr_samples = profit_losses.len() as f64;
    Ok(ProfitLossSummary {
        profitable_count,
        losing_count,
        profitable_fraction: profitable_count as f64 / nr_samples,
        loss_fraction: losing_count as f64 / nr_samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn terminal_price_of_path() {
        assert_eq!(terminal_price(&[42.0]), Ok(42.0));
        assert_eq!(terminal_price(&[100.0, 104.5, 98.2, 111.0]), Ok(111.0));
        assert_eq!(terminal_price(&[]), Err(RiskError::EmptyPath));
    }

    #[test]
    fn terminal_prices_of_batch() {
        let paths = vec![vec![100.0, 104.5], vec![100.0, 91.0, 97.5]];
        assert_eq!(terminal_prices(&paths), Ok(vec![104.5, 97.5]));

        let with_empty = vec![vec![100.0, 104.5], vec![]];
        assert_eq!(terminal_prices(&with_empty), Err(RiskError::EmptyPath));
    }

    #[test]
    fn payoffs_never_negative() {
        let profile = PayoffProfile::new(100.0, 10.0);
        for p in [0.1, 50.0, 99.9, 100.0, 100.1, 150.0, 1000.0] {
            assert!(profile.call_payoff(p) >= 0.0);
            assert!(profile.put_payoff(p) >= 0.0);
        }
        assert_eq!(profile.call_payoff(110.0), 10.0);
        assert_eq!(profile.call_payoff(90.0), 0.0);
        assert_eq!(profile.put_payoff(90.0), 10.0);
        assert_eq!(profile.put_payoff(110.0), 0.0);
    }

    #[test]
    fn call_scenario() {
        let profile = PayoffProfile::new(100.0, 10.0);
        let batch = [90.0, 100.0, 110.0, 120.0];

        let profit_losses = profile.call_profit_losses(&batch);
        assert_eq!(profit_losses, vec![-10.0, -10.0, 0.0, 10.0]);

        // the break-even sample at 110 counts as losing
        let summary = profile.call_summary(&batch).unwrap();
        assert_eq!(summary.profitable_count, 1);
        assert_eq!(summary.losing_count, 3);
        assert_eq!(summary.profitable_fraction, 0.25);
        assert_eq!(summary.loss_fraction, 0.75);
    }

    #[test]
    fn put_scenario() {
        let profile = PayoffProfile::new(100.0, 10.0);
        let batch = [90.0, 100.0, 110.0, 120.0];

        let profit_losses = profile.put_profit_losses(&batch);
        assert_eq!(profit_losses, vec![0.0, -10.0, -10.0, -10.0]);

        let summary = profile.put_summary(&batch).unwrap();
        assert_eq!(summary.profitable_count, 0);
        assert_eq!(summary.losing_count, 4);
        assert_eq!(summary.profitable_fraction, 0.0);
        assert_eq!(summary.loss_fraction, 1.0);
    }

    #[test]
    fn summary_completeness() {
        let batches: [&[f64]; 3] = [
            &[1.0],
            &[-0.5, 0.0, 0.5],
            &[-3.0, -2.0, -1.0, 1.0, 2.0, 3.0, 4.0],
        ];
        for profit_losses in batches {
            let summary = summarize(profit_losses).unwrap();
            assert_eq!(
                summary.profitable_count + summary.losing_count,
                profit_losses.len()
            );
            assert_approx_eq!(
                summary.profitable_fraction + summary.loss_fraction,
                1.0,
                1e-12
            );
        }
    }

    #[test]
    fn empty_batch_is_rejected() {
        assert_eq!(summarize(&[]), Err(RiskError::EmptyBatch));

        let profile = PayoffProfile::new(100.0, 10.0);
        assert_eq!(profile.call_summary(&[]), Err(RiskError::EmptyBatch));
        assert_eq!(profile.put_summary(&[]), Err(RiskError::EmptyBatch));
    }
}
