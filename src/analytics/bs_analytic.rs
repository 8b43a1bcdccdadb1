// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! For European options, this has closed-form solutions involving
//! the cumulative normal distribution function Φ(x).
//!
//! Every function validates its [`OptionParameters`] before touching the
//! logarithm or the square root, so S, K, T or σ ≤ 0 surfaces as a
//! [`PricerError::Domain`](crate::error::PricerError::Domain).

use crate::analytics::greeks::{GreekSet, Quantity, Valuation};
use crate::error::{PricerError, PricerResult};
use crate::math_utils::{norm_cdf, norm_pdf};
use crate::option::{OptionParameters, OptionType};
use log::trace;

/// Intermediate terms shared by the price and every Greek
///
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct D1D2 {
    pub d1: f64,
    pub d2: f64,
    pub sqrt_t: f64,
    pub discount: f64,
}

impl D1D2 {
    pub fn compute(p: &OptionParameters) -> PricerResult<Self> {
        p.validate()?;
        let sqrt_t = p.t.sqrt();
        let vol_sqrt_t = p.sigma * sqrt_t;
        let d1 = ((p.s / p.k).ln() + (p.r + 0.5 * p.sigma * p.sigma) * p.t) / vol_sqrt_t;
        // σ√T or S·σ√T can underflow for tiny but positive inputs
        if p.s * vol_sqrt_t == 0.0 || !d1.is_finite() {
            return Err(PricerError::Domain {
                field: "sigma".to_string(),
                value: p.sigma,
                constraint: format!("with T = {} gives a degenerate σ√T", p.t),
            });
        }
        let d2 = d1 - vol_sqrt_t;
        trace!("d1={} d2={} for {:?}", d1, d2, p);
        Ok(D1D2 {
            d1,
            d2,
            sqrt_t,
            discount: p.discount_factor(),
        })
    }
}

/// Black-Scholes European option price
///
/// # Formula
/// ```text
/// C = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// P = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
///
/// Call and put satisfy put-call parity: C - P = S - K*e^(-rT).
pub fn price(p: &OptionParameters) -> PricerResult<f64> {
    let d = D1D2::compute(p)?;
    Ok(price_from(p, &d))
}

/// Black-Scholes Delta (∂V/∂S)
///
/// # Formula
/// ```text
/// Δ_call = Φ(d₁)
/// Δ_put  = Φ(d₁) - 1
/// ```
///
/// Range: [0, 1] for calls, [-1, 0] for puts.
pub fn delta(p: &OptionParameters) -> PricerResult<f64> {
    let d = D1D2::compute(p)?;
    Ok(delta_from(p, &d))
}

/// Black-Scholes Gamma (∂²V/∂S²)
///
/// # Formula
/// ```text
/// Γ = φ(d₁) / (S * σ * √T)
/// ```
///
/// Same for calls and puts. Maximum near the money.
pub fn gamma(p: &OptionParameters) -> PricerResult<f64> {
    let d = D1D2::compute(p)?;
    Ok(gamma_from(p, &d))
}

/// Black-Scholes Vega (∂V/∂σ)
///
/// # Formula
/// ```text
/// ν = S * φ(d₁) * √T
/// ```
///
/// Same for calls and puts. Units: price change per unit of volatility
/// (divide by 100 for a one-point move).
pub fn vega(p: &OptionParameters) -> PricerResult<f64> {
    let d = D1D2::compute(p)?;
    Ok(vega_from(p, &d))
}

/// Black-Scholes Theta (∂V/∂t)
///
/// # Formula
/// ```text
/// Θ_call = -S*φ(d₁)*σ/(2√T) - r*K*e^(-rT)*Φ(d₂)
/// Θ_put  = -S*φ(d₁)*σ/(2√T) + r*K*e^(-rT)*Φ(-d₂)
/// ```
///
/// Units: price change per year. Negative for a typical long call.
pub fn theta(p: &OptionParameters) -> PricerResult<f64> {
    let d = D1D2::compute(p)?;
    Ok(theta_from(p, &d))
}

/// Black-Scholes Rho (∂V/∂r)
///
/// # Formula
/// ```text
/// ρ_call =  K * T * e^(-rT) * Φ(d₂)
/// ρ_put  = -K * T * e^(-rT) * Φ(-d₂)
/// ```
///
/// Units: price change per unit of rate.
pub fn rho(p: &OptionParameters) -> PricerResult<f64> {
    let d = D1D2::compute(p)?;
    Ok(rho_from(p, &d))
}

/// All five Greeks from a single d₁/d₂ evaluation
pub fn greeks(p: &OptionParameters) -> PricerResult<GreekSet> {
    let d = D1D2::compute(p)?;
    Ok(greeks_from(p, &d))
}

/// Price and Greeks from a single d₁/d₂ evaluation
pub fn evaluate(p: &OptionParameters) -> PricerResult<Valuation> {
    let d = D1D2::compute(p)?;
    Ok(Valuation {
        price: price_from(p, &d),
        greeks: greeks_from(p, &d),
    })
}

/// Evaluate one selected output quantity
pub fn quantity(p: &OptionParameters, q: Quantity) -> PricerResult<f64> {
    let d = D1D2::compute(p)?;
    Ok(match q {
        Quantity::Price => price_from(p, &d),
        Quantity::Delta => delta_from(p, &d),
        Quantity::Gamma => gamma_from(p, &d),
        Quantity::Vega => vega_from(p, &d),
        Quantity::Theta => theta_from(p, &d),
        Quantity::Rho => rho_from(p, &d),
    })
}

fn price_from(p: &OptionParameters, d: &D1D2) -> f64 {
    match p.option_type {
        OptionType::Call => p.s * norm_cdf(d.d1) - p.k * d.discount * norm_cdf(d.d2),
        OptionType::Put => p.k * d.discount * norm_cdf(-d.d2) - p.s * norm_cdf(-d.d1),
    }
}

fn delta_from(p: &OptionParameters, d: &D1D2) -> f64 {
    match p.option_type {
        OptionType::Call => norm_cdf(d.d1),
        OptionType::Put => norm_cdf(d.d1) - 1.0,
    }
}

fn gamma_from(p: &OptionParameters, d: &D1D2) -> f64 {
    norm_pdf(d.d1) / (p.s * p.sigma * d.sqrt_t)
}

fn vega_from(p: &OptionParameters, d: &D1D2) -> f64 {
    p.s * norm_pdf(d.d1) * d.sqrt_t
}

fn theta_from(p: &OptionParameters, d: &D1D2) -> f64 {
    let decay = -(p.s * norm_pdf(d.d1) * p.sigma) / (2.0 * d.sqrt_t);
    match p.option_type {
        OptionType::Call => decay - p.r * p.k * d.discount * norm_cdf(d.d2),
        OptionType::Put => decay + p.r * p.k * d.discount * norm_cdf(-d.d2),
    }
}

fn rho_from(p: &OptionParameters, d: &D1D2) -> f64 {
    match p.option_type {
        OptionType::Call => p.k * p.t * d.discount * norm_cdf(d.d2),
        OptionType::Put => -p.k * p.t * d.discount * norm_cdf(-d.d2),
    }
}

fn greeks_from(p: &OptionParameters, d: &D1D2) -> GreekSet {
    GreekSet {
        delta: delta_from(p, d),
        gamma: gamma_from(p, d),
        vega: vega_from(p, d),
        theta: theta_from(p, d),
        rho: rho_from(p, d),
    }
}
