// src/sweep.rs
//! Parametric sweeps of price and Greeks
//!
//! A sweep overrides exactly one input (spot or maturity) with each value of an
//! ordered list, holding every other parameter fixed, and evaluates the engine
//! once per value. Evaluation runs on the rayon pool; `collect` on an indexed
//! parallel iterator keeps the output aligned with the input positionally.

use crate::analytics::bs_analytic;
use crate::analytics::greeks::{Quantity, Valuation};
use crate::error::{validation::*, PricerError, PricerResult};
use crate::option::{days_to_years, OptionParameters};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Input swept along the x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepField {
    /// Spot price S
    Spot,
    /// Time to maturity T, in years
    Maturity,
}

impl SweepField {
    /// Short column label (`S` or `T`)
    pub fn symbol(&self) -> &'static str {
        match self {
            SweepField::Spot => "S",
            SweepField::Maturity => "T",
        }
    }

    /// Copy of `base` with this field replaced by `value`
    pub fn apply(&self, base: &OptionParameters, value: f64) -> OptionParameters {
        match self {
            SweepField::Spot => base.with_spot(value),
            SweepField::Maturity => base.with_maturity(value),
        }
    }
}

impl fmt::Display for SweepField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepField::Spot => f.write_str("spot"),
            SweepField::Maturity => f.write_str("maturity"),
        }
    }
}

impl FromStr for SweepField {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spot" | "s" => Ok(SweepField::Spot),
            "maturity" | "t" => Ok(SweepField::Maturity),
            _ => Err(PricerError::invalid_argument(
                "field",
                s,
                "'spot' or 'maturity'",
            )),
        }
    }
}

/// One output quantity evaluated across one swept input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSeries {
    pub field: SweepField,
    pub quantity: Quantity,
    pub points: Vec<(f64, f64)>,
}

impl SweepSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|(x, _)| *x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|(_, y)| *y).collect()
    }
}

/// Evaluate one quantity for each override value of `field`
///
/// Fails with the domain error of the first invalid override in input order.
pub fn sweep(
    params: &OptionParameters,
    field: SweepField,
    values: &[f64],
    quantity: Quantity,
) -> PricerResult<SweepSeries> {
    debug!(
        "sweeping {} over {} {} values",
        quantity,
        values.len(),
        field
    );
    let results: Vec<PricerResult<f64>> = values
        .par_iter()
        .map(|&x| bs_analytic::quantity(&field.apply(params, x), quantity))
        .collect();

    let points = values
        .iter()
        .zip(results)
        .map(|(&x, y)| y.map(|y| (x, y)))
        .collect::<PricerResult<Vec<_>>>()?;

    Ok(SweepSeries {
        field,
        quantity,
        points,
    })
}

/// Full price-and-Greeks rows for each override value of `field`
pub fn sweep_valuations(
    params: &OptionParameters,
    field: SweepField,
    values: &[f64],
) -> PricerResult<Vec<(f64, Valuation)>> {
    debug!("evaluating {} rows over {}", values.len(), field);
    let results: Vec<PricerResult<Valuation>> = values
        .par_iter()
        .map(|&x| bs_analytic::evaluate(&field.apply(params, x)))
        .collect();

    values
        .iter()
        .zip(results)
        .map(|(&x, v)| v.map(|v| (x, v)))
        .collect()
}

/// Largest number of points [`linear_grid`] will produce
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Evenly stepped grid `start, start + step, ...` up to and including `end`
///
/// Fails with a domain error on `step` when the grid would exceed
/// [`MAX_GRID_POINTS`].
pub fn linear_grid(start: f64, end: f64, step: f64) -> PricerResult<Vec<f64>> {
    validate_finite("start", start)?;
    validate_finite("end", end)?;
    validate_positive("step", step)?;
    if end < start {
        return Err(PricerError::Domain {
            field: "end".to_string(),
            value: end,
            constraint: format!("must not be below start ({})", start),
        });
    }
    // Tolerance keeps an end point that is a whole number of steps away
    let steps = ((end - start) / step * (1.0 + 1e-12) + 1e-9).floor();
    if !steps.is_finite() || steps >= MAX_GRID_POINTS as f64 {
        return Err(PricerError::Domain {
            field: "step".to_string(),
            value: step,
            constraint: format!(
                "too small for [{}, {}], grid limited to {} points",
                start, end, MAX_GRID_POINTS
            ),
        });
    }
    let n = steps as usize;
    Ok((0..=n).map(|i| start + i as f64 * step).collect())
}

/// Spot grid, e.g. 50..=150 in steps of 1
pub fn spot_range(start: f64, end: f64, step: f64) -> PricerResult<Vec<f64>> {
    linear_grid(start, end, step)
}

/// Maturity grid given in days, returned as year fractions (ACT/365)
pub fn maturity_days_range(start_days: f64, end_days: f64, step_days: f64) -> PricerResult<Vec<f64>> {
    Ok(linear_grid(start_days, end_days, step_days)?
        .into_iter()
        .map(days_to_years)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::OptionType;

    fn base() -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap()
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("Spot".parse::<SweepField>().unwrap(), SweepField::Spot);
        assert_eq!("maturity".parse::<SweepField>().unwrap(), SweepField::Maturity);
        assert!(matches!(
            "strike".parse::<SweepField>(),
            Err(PricerError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_sweep_holds_other_fields() {
        let p = base();
        let series = sweep(&p, SweepField::Maturity, &[0.25, 0.5, 1.0], Quantity::Vega).unwrap();
        for (t, y) in &series.points {
            let expected = bs_analytic::vega(&p.with_maturity(*t)).unwrap();
            assert_eq!(*y, expected);
        }
    }

    #[test]
    fn test_sweep_reports_first_invalid_value() {
        let err = sweep(&base(), SweepField::Spot, &[100.0, -1.0, 0.0], Quantity::Price).unwrap_err();
        match err {
            PricerError::Domain { field, value, .. } => {
                assert_eq!(field, "s");
                assert_eq!(value, -1.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_sweep() {
        let series = sweep(&base(), SweepField::Spot, &[], Quantity::Delta).unwrap();
        assert!(series.is_empty());
        assert!(sweep_valuations(&base(), SweepField::Spot, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_default_grids() {
        let spots = spot_range(50.0, 150.0, 1.0).unwrap();
        assert_eq!(spots.len(), 101);
        assert_eq!(spots[0], 50.0);
        assert_eq!(spots[100], 150.0);

        let maturities = maturity_days_range(30.0, 365.0, 5.0).unwrap();
        assert_eq!(maturities.len(), 68);
        assert_eq!(maturities[0], 30.0 / 365.0);
        assert_eq!(*maturities.last().unwrap(), 365.0 / 365.0);
    }

    #[test]
    fn test_grid_rejects_bad_bounds() {
        assert!(linear_grid(10.0, 5.0, 1.0).is_err());
        assert!(linear_grid(0.0, 5.0, 0.0).is_err());
        assert_eq!(linear_grid(1.0, 1.0, 1.0).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_grid_point_limit() {
        match linear_grid(0.0, 1.0, 1e-300) {
            Err(PricerError::Domain { field, value, .. }) => {
                assert_eq!(field, "step");
                assert_eq!(value, 1e-300);
            }
            other => panic!("expected domain error on step, got {:?}", other),
        }
        assert!(linear_grid(-1e308, 1e308, 1.0).is_err());
        assert!(maturity_days_range(0.0, 1.0, 1e-12).is_err());

        let largest = linear_grid(0.0, (MAX_GRID_POINTS - 1) as f64, 1.0).unwrap();
        assert_eq!(largest.len(), MAX_GRID_POINTS);
    }
}
