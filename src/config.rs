// src/config.rs
//
// Front-end configuration: default inputs, the ranges the front end accepts
// before calling the engine, sweep grids and display locale. Loaded from TOML;
// every section is optional.

use crate::error::{validation::*, PricerError, PricerResult};
use crate::i18n::Locale;
use crate::option::{days_to_years, OptionParameters, OptionType, DAYS_PER_YEAR};
use crate::sweep::{maturity_days_range, spot_range, SweepField};
use serde::Deserialize;
use std::fs;
use std::path::Path;

// =============================================================================
// Configuration Types
// =============================================================================

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricerConfig {
    /// Display language for the front end
    pub locale: Locale,
    pub defaults: DefaultInputs,
    pub limits: InputLimits,
    pub sweep: SweepGrid,
}

/// Inputs used when the user does not supply one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultInputs {
    pub spot: f64,
    pub strike: f64,
    pub maturity_days: f64,
    pub rate: f64,
    pub volatility: f64,
    pub option_type: OptionType,
}

impl Default for DefaultInputs {
    fn default() -> Self {
        DefaultInputs {
            spot: 100.0,
            strike: 100.0,
            maturity_days: 365.0,
            rate: 0.05,
            volatility: 0.2,
            option_type: OptionType::Call,
        }
    }
}

impl DefaultInputs {
    pub fn to_params(&self) -> PricerResult<OptionParameters> {
        OptionParameters::new(
            self.spot,
            self.strike,
            days_to_years(self.maturity_days),
            self.rate,
            self.volatility,
            self.option_type,
        )
    }
}

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Bounds { min, max }
    }

    pub fn check(&self, name: &str, value: f64) -> PricerResult<()> {
        validate_range(name, value, self.min, self.max)
    }
}

/// Accepted input ranges. The engine itself only requires positivity; these
/// tighter bounds are what the front end lets a user enter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputLimits {
    pub spot: Bounds,
    pub strike: Bounds,
    pub maturity_days: Bounds,
    pub rate: Bounds,
    pub volatility: Bounds,
}

impl Default for InputLimits {
    fn default() -> Self {
        InputLimits {
            spot: Bounds::new(20.0, 1000.0),
            strike: Bounds::new(20.0, 1000.0),
            maturity_days: Bounds::new(7.0, 730.0),
            rate: Bounds::new(0.0, 0.2),
            volatility: Bounds::new(0.01, 1.0),
        }
    }
}

impl InputLimits {
    /// Report the first field outside its range
    pub fn check(&self, params: &OptionParameters) -> PricerResult<()> {
        self.spot.check("s", params.s)?;
        self.strike.check("k", params.k)?;
        // Compare in days; rounding keeps e.g. 7/365 years inside [7, 730]
        let days = (params.t * DAYS_PER_YEAR * 1e9).round() / 1e9;
        self.maturity_days.check("t", days)?;
        self.rate.check("r", params.r)?;
        self.volatility.check("sigma", params.sigma)?;
        Ok(())
    }
}

/// Default sweep grids.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepGrid {
    pub spot_start: f64,
    pub spot_end: f64,
    pub spot_step: f64,
    pub maturity_start_days: f64,
    pub maturity_end_days: f64,
    pub maturity_step_days: f64,
}

impl Default for SweepGrid {
    fn default() -> Self {
        SweepGrid {
            spot_start: 50.0,
            spot_end: 150.0,
            spot_step: 1.0,
            maturity_start_days: 30.0,
            maturity_end_days: 365.0,
            maturity_step_days: 5.0,
        }
    }
}

impl SweepGrid {
    /// Override values for `field`; maturities are returned in years
    pub fn values(&self, field: SweepField) -> PricerResult<Vec<f64>> {
        match field {
            SweepField::Spot => spot_range(self.spot_start, self.spot_end, self.spot_step),
            SweepField::Maturity => maturity_days_range(
                self.maturity_start_days,
                self.maturity_end_days,
                self.maturity_step_days,
            ),
        }
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

impl PricerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> PricerResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            PricerError::Config(format!(
                "failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> PricerResult<Self> {
        toml::from_str(s).map_err(|e| PricerError::Config(format!("failed to parse config: {}", e)))
    }
}
