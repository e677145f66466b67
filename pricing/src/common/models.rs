use crate::error::PricingError;

/// average number of days per year in the Gregorian calendar
const DAYS_PER_YEAR: f64 = 365.2425;

#[derive(Clone, Debug)]
pub struct DerivativeParameter {
    /// the asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized risk-free interest rate
    pub rfr: f64,
    /// the annualized standard deviation of the stock's returns
    pub vola: f64,
}

impl DerivativeParameter {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
    ) -> Self {
        Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
        }
    }

    /// Checks the invariants the closed-form formulas rely on:
    /// asset price, strike, time to expiration and vola must be strictly
    /// positive, and `vola * sqrt(time_to_expiration)` appears as a divisor
    /// in d1 so it must not underflow to zero.
    pub fn validate(&self) -> Result<(), PricingError> {
        strictly_positive("asset_price", self.asset_price)?;
        strictly_positive("strike", self.strike)?;
        strictly_positive("time_to_expiration", self.time_to_expiration)?;
        strictly_positive("vola", self.vola)?;
        if !self.rfr.is_finite() {
            return Err(PricingError::InvalidParameters {
                name: "rfr",
                value: self.rfr,
            });
        }
        let sigma_exp = self.vola * self.time_to_expiration.sqrt();
        if sigma_exp == 0.0 || !sigma_exp.is_finite() {
            return Err(PricingError::InvalidParameters {
                name: "vola * sqrt(time_to_expiration)",
                value: sigma_exp,
            });
        }
        Ok(())
    }

    /// The remaining contract life in calendar days.
    pub fn days_to_expiration(&self) -> u32 {
        (self.time_to_expiration * DAYS_PER_YEAR) as u32
    }
}

fn strictly_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::InvalidParameters { name, value })
    }
}

/// Sensitivities of the option price, one set per parameter set and side.
#[derive(Clone, Debug, PartialEq)]
pub struct Greeks {
    /// sensitivity to the asset price
    pub delta: f64,
    /// sensitivity of delta to the asset price
    pub gamma: f64,
    /// sensitivity to the passage of time
    pub theta: f64,
    /// sensitivity to the vola
    pub vega: f64,
    /// sensitivity to the risk-free rate
    pub rho: f64,
}
