use crate::common::models::{DerivativeParameter, Greeks};
use crate::error::PricingError;
use probability::distribution::{Continuous, Distribution, Gaussian};

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub(crate) fn pdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.density(d)
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> Result<f64, PricingError>;
    fn call(params: &Self::Params) -> Result<f64, PricingError>;
}

/// European Put and Call option prices and greeks for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl BlackScholesMerton {
    fn d1_d2(dp: &DerivativeParameter) -> (f64, f64) {
        let sigma_exp = dp.vola * dp.time_to_expiration.sqrt();
        let d1 = ((dp.asset_price / dp.strike).ln()
            + (dp.rfr + dp.vola.powi(2) / 2.0) * dp.time_to_expiration)
            / sigma_exp;
        (d1, d1 - sigma_exp)
    }

    fn discount_factor(dp: &DerivativeParameter) -> f64 {
        (-dp.rfr * dp.time_to_expiration).exp()
    }

    /// The greeks of the European call option.
    pub fn call_greeks(dp: &DerivativeParameter) -> Result<Greeks, PricingError> {
        dp.validate()?;
        let (d1, d2) = Self::d1_d2(dp);
        let sqrt_t = dp.time_to_expiration.sqrt();
        let disc_strike = dp.strike * Self::discount_factor(dp);
        Ok(Greeks {
            delta: cdf(d1),
            gamma: pdf(d1) / (dp.asset_price * dp.vola * sqrt_t),
            theta: -dp.asset_price * pdf(d1) * dp.vola / (2.0 * sqrt_t)
                - dp.rfr * disc_strike * cdf(d2),
            vega: dp.asset_price * sqrt_t * pdf(d1),
            rho: dp.time_to_expiration * disc_strike * cdf(d2),
        })
    }

    /// The greeks of the European put option.
    pub fn put_greeks(dp: &DerivativeParameter) -> Result<Greeks, PricingError> {
        dp.validate()?;
        let (d1, d2) = Self::d1_d2(dp);
        let sqrt_t = dp.time_to_expiration.sqrt();
        let disc_strike = dp.strike * Self::discount_factor(dp);
        Ok(Greeks {
            delta: cdf(d1) - 1.0,
            gamma: pdf(d1) / (dp.asset_price * dp.vola * sqrt_t),
            theta: -dp.asset_price * pdf(d1) * dp.vola / (2.0 * sqrt_t)
                + dp.rfr * disc_strike * cdf(-d2),
            vega: dp.asset_price * sqrt_t * pdf(d1),
            rho: -dp.time_to_expiration * disc_strike * cdf(-d2),
        })
    }
}

impl OptionPrice for BlackScholesMerton {
    type Params = DerivativeParameter;

    fn call(dp: &DerivativeParameter) -> Result<f64, PricingError> {
        dp.validate()?;
        let (d1, d2) = Self::d1_d2(dp);
        Ok(cdf(d1) * dp.asset_price - cdf(d2) * dp.strike * Self::discount_factor(dp))
    }

    fn put(dp: &DerivativeParameter) -> Result<f64, PricingError> {
        dp.validate()?;
        let (d1, d2) = Self::d1_d2(dp);
        Ok(cdf(-d2) * dp.strike * Self::discount_factor(dp) - cdf(-d1) * dp.asset_price)
    }
}
