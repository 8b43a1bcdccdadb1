// src/analytics/greeks.rs
//! Greek snapshots and output-quantity selectors

use crate::error::{PricerError, PricerResult};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First and second order sensitivities for one parameter set
///
/// Units: Vega per unit of volatility, Theta per year, Rho per unit of rate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GreekSet {
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

/// Price together with its Greeks: one row of the export table
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Valuation {
    pub price: f64,
    pub greeks: GreekSet,
}

impl Valuation {
    pub fn get(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Price => self.price,
            Quantity::Delta => self.greeks.delta,
            Quantity::Gamma => self.greeks.gamma,
            Quantity::Vega => self.greeks.vega,
            Quantity::Theta => self.greeks.theta,
            Quantity::Rho => self.greeks.rho,
        }
    }
}

/// Output quantity produced by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    Price,
    Delta,
    Gamma,
    Vega,
    Theta,
    Rho,
}

impl Quantity {
    pub const ALL: [Quantity; 6] = [
        Quantity::Price,
        Quantity::Delta,
        Quantity::Gamma,
        Quantity::Vega,
        Quantity::Theta,
        Quantity::Rho,
    ];

    /// The five sensitivities, without the price
    pub const GREEKS: [Quantity; 5] = [
        Quantity::Delta,
        Quantity::Gamma,
        Quantity::Vega,
        Quantity::Theta,
        Quantity::Rho,
    ];

    /// Column name used in exported tables
    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Price => "Price",
            Quantity::Delta => "Delta",
            Quantity::Gamma => "Gamma",
            Quantity::Vega => "Vega",
            Quantity::Theta => "Theta",
            Quantity::Rho => "Rho",
        }
    }

    pub fn flag(&self) -> QuantitySet {
        match self {
            Quantity::Price => QuantitySet::PRICE,
            Quantity::Delta => QuantitySet::DELTA,
            Quantity::Gamma => QuantitySet::GAMMA,
            Quantity::Vega => QuantitySet::VEGA,
            Quantity::Theta => QuantitySet::THETA,
            Quantity::Rho => QuantitySet::RHO,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quantity {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(Quantity::Price),
            "delta" => Ok(Quantity::Delta),
            "gamma" => Ok(Quantity::Gamma),
            "vega" => Ok(Quantity::Vega),
            "theta" => Ok(Quantity::Theta),
            "rho" => Ok(Quantity::Rho),
            _ => Err(PricerError::invalid_argument(
                "quantity",
                s,
                "one of price, delta, gamma, vega, theta, rho",
            )),
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct QuantitySet: u32 {
        const NONE  = 0;
        const PRICE = 1 << 0;
        const DELTA = 1 << 1;
        const GAMMA = 1 << 2;
        const VEGA  = 1 << 3;
        const THETA = 1 << 4;
        const RHO   = 1 << 5;
        const GREEKS = Self::DELTA.bits() | Self::GAMMA.bits() | Self::VEGA.bits()
            | Self::THETA.bits() | Self::RHO.bits();
        const ALL = Self::PRICE.bits() | Self::GREEKS.bits();
    }
}

impl QuantitySet {
    /// Selected quantities in canonical column order
    pub fn quantities(&self) -> Vec<Quantity> {
        Quantity::ALL
            .into_iter()
            .filter(|q| self.contains(q.flag()))
            .collect()
    }

    /// Parse a comma-separated list such as `price,delta`
    pub fn parse_list(list: &str) -> PricerResult<Self> {
        list.split(',')
            .filter(|item| !item.trim().is_empty())
            .try_fold(QuantitySet::NONE, |set, item| {
                Ok(set | item.parse::<Quantity>()?.flag())
            })
    }
}
