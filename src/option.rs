// src/option.rs
//! European vanilla option contract and model parameters
//!
//! [`OptionParameters`] is a plain value type: it is built fresh for every
//! evaluation and validated by the engine on each call, so a struct literal
//! holding bad numbers is rejected with a [`PricerError::Domain`] rather than
//! producing NaN.

use crate::error::{validation::*, PricerError, PricerResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day-count basis used to convert calendar days to year fractions
pub const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricerError::invalid_argument(
                "option_type",
                s,
                "'call' or 'put'",
            )),
        }
    }
}

/// Black-Scholes inputs for a single European option
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    pub s: f64,     // Spot price
    pub k: f64,     // Strike price
    pub t: f64,     // Time to maturity in years
    pub r: f64,     // Continuously compounded risk-free rate
    pub sigma: f64, // Annualized volatility
    pub option_type: OptionType,
}

impl OptionParameters {
    /// Build a validated parameter set
    pub fn new(
        s: f64,
        k: f64,
        t: f64,
        r: f64,
        sigma: f64,
        option_type: OptionType,
    ) -> PricerResult<Self> {
        let params = OptionParameters {
            s,
            k,
            t,
            r,
            sigma,
            option_type,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn call(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricerResult<Self> {
        Self::new(s, k, t, r, sigma, OptionType::Call)
    }

    pub fn put(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricerResult<Self> {
        Self::new(s, k, t, r, sigma, OptionType::Put)
    }

    /// Check the positivity invariants; the first violated field is reported
    pub fn validate(&self) -> PricerResult<()> {
        validate_positive("s", self.s)?;
        validate_positive("k", self.k)?;
        validate_positive("t", self.t)?;
        validate_finite("r", self.r)?;
        validate_positive("sigma", self.sigma)?;
        Ok(())
    }

    pub fn with_spot(self, s: f64) -> Self {
        OptionParameters { s, ..self }
    }

    pub fn with_maturity(self, t: f64) -> Self {
        OptionParameters { t, ..self }
    }

    pub fn with_option_type(self, option_type: OptionType) -> Self {
        OptionParameters {
            option_type,
            ..self
        }
    }

    /// Discount factor e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.r * self.t).exp()
    }

    /// Time to maturity expressed in calendar days
    pub fn maturity_days(&self) -> f64 {
        self.t * DAYS_PER_YEAR
    }
}

/// Convert a number of calendar days to a year fraction (ACT/365)
pub fn days_to_years(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}

/// Year fraction from `as_of` to `expiry` (ACT/365)
///
/// An expiry on or before the valuation date has no time value left and is
/// rejected as a domain error on `t`.
pub fn maturity_from_expiry(as_of: NaiveDate, expiry: NaiveDate) -> PricerResult<f64> {
    let days = (expiry - as_of).num_days();
    if days <= 0 {
        return Err(PricerError::Domain {
            field: "t".to_string(),
            value: days_to_years(days as f64),
            constraint: format!("must be positive (> 0): expiry {} is not after {}", expiry, as_of),
        });
    }
    Ok(days_to_years(days as f64))
}
