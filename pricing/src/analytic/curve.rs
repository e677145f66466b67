use crate::common::models::DerivativeParameter;
use crate::error::PricingError;

/// One evaluated sweep step: the swept input and the computed quantity.
#[derive(Clone, Debug, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// The parameter a curve sweeps while all others stay fixed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SweepVariable {
    AssetPrice,
    TimeToExpiration,
}

impl SweepVariable {
    fn apply(&self, base: &DerivativeParameter, value: f64) -> DerivativeParameter {
        let mut params = base.clone();
        match self {
            SweepVariable::AssetPrice => params.asset_price = value,
            SweepVariable::TimeToExpiration => params.time_to_expiration = value,
        }
        params
    }
}

/// Evaluates `quantity` (a price or a greek accessor) at each swept value,
/// holding the other parameters of `base` fixed. Yields one point per input
/// value in input order; the first invalid sweep value aborts the sweep.
pub fn sweep_curve(
    base: &DerivativeParameter,
    variable: SweepVariable,
    values: &[f64],
    quantity: impl Fn(&DerivativeParameter) -> Result<f64, PricingError>,
) -> Result<Vec<CurvePoint>, PricingError> {
    values
        .iter()
        .map(|&x| quantity(&variable.apply(base, x)).map(|y| CurvePoint { x, y }))
        .collect()
}

/// The price curve over the swept asset prices, shifted by the at-the-money
/// price so it reads zero where the asset price equals the strike.
pub fn profit_loss_curve(
    base: &DerivativeParameter,
    asset_prices: &[f64],
    price: impl Fn(&DerivativeParameter) -> Result<f64, PricingError>,
) -> Result<Vec<CurvePoint>, PricingError> {
    let variable = SweepVariable::AssetPrice;
    let at_the_money = price(&variable.apply(base, base.strike))?;
    asset_prices
        .iter()
        .map(|&x| {
            price(&variable.apply(base, x)).map(|p| CurvePoint {
                x,
                y: p - at_the_money,
            })
        })
        .collect()
}
