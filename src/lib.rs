//! # bs-pricer: Closed-Form Black-Scholes Pricing and Greeks
//!
//! Prices European vanilla options under the Black-Scholes model and computes
//! their sensitivities, plus parametric sweeps over spot and maturity.
//!
//! ## Key Features
//!
//! - **Closed form only**: price, Delta, Gamma, Vega, Theta and Rho from d₁/d₂
//! - **Typed inputs**: invalid S, K, T or σ is a [`PricerError::Domain`], never NaN
//! - **Sweeps**: order-preserving parallel evaluation over spot or maturity grids
//! - **Export**: stable `Price,Delta,Gamma,Vega,Theta,Rho` CSV table
//! - **Localizable front end**: English and French message catalogs
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_pricer::analytics::bs_analytic;
//! use bs_pricer::option::OptionParameters;
//!
//! let call = OptionParameters::call(100.0, 100.0, 1.0, 0.0, 0.2).expect("Valid parameters");
//! let price = bs_analytic::price(&call).expect("Valid parameters");
//! assert!((price - 7.9656).abs() < 1e-4);
//!
//! let greeks = bs_analytic::greeks(&call).expect("Valid parameters");
//! assert!(greeks.delta > 0.5 && greeks.delta < 0.55);
//! ```
//!
//! ## Units
//!
//! Vega is per unit of volatility, Theta per year and Rho per unit of rate.
//! Divide by 100 (or 365 for Theta) for the per-point and per-day conventions.

// Module declarations
pub mod error;
pub mod math_utils;
pub mod option;
pub mod analytics;
pub mod sweep;
pub mod output;
pub mod config;
pub mod i18n;

// Re-export commonly used types for convenience
pub use analytics::bs_analytic::{delta, evaluate, gamma, greeks, price, quantity, rho, theta, vega};
pub use analytics::greeks::{GreekSet, Quantity, QuantitySet, Valuation};
pub use error::{PricerError, PricerResult};
pub use option::{OptionParameters, OptionType};
pub use sweep::{sweep, sweep_valuations, SweepField, SweepSeries};
