// src/i18n.rs
//! Message catalog for the presentation layer
//!
//! The engine carries no user-facing strings. Front ends look labels up here by
//! [`Locale`]; adding a language means adding one more `Messages` table.

use crate::analytics::greeks::Quantity;
use crate::error::PricerError;
use crate::option::OptionType;
use crate::sweep::SweepField;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Fr => &FR,
        }
    }
}

impl FromStr for Locale {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "fr" | "french" | "français" => Ok(Locale::Fr),
            _ => Err(PricerError::invalid_argument("locale", s, "'en' or 'fr'")),
        }
    }
}

/// Every label a front end needs, for one language
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub parameters: &'static str,
    pub spot: &'static str,
    pub strike: &'static str,
    pub maturity_days: &'static str,
    pub rate: &'static str,
    pub volatility: &'static str,
    pub option_type: &'static str,
    pub call: &'static str,
    pub put: &'static str,
    pub option_price: &'static str,
    pub greeks: &'static str,
    pub price: &'static str,
    /// Chart title suffixes, e.g. "Delta as a function of time (T)"
    pub vs_spot: &'static str,
    pub vs_time: &'static str,
    pub export_results: &'static str,
    pub export_written: &'static str,
    pub error: &'static str,
}

impl Messages {
    pub fn quantity(&self, q: Quantity) -> &'static str {
        match q {
            Quantity::Price => self.price,
            // Greek names are not translated
            _ => q.name(),
        }
    }

    pub fn option_type_label(&self, t: OptionType) -> &'static str {
        match t {
            OptionType::Call => self.call,
            OptionType::Put => self.put,
        }
    }

    /// Axis label for a swept field (maturity is shown in days)
    pub fn axis(&self, field: SweepField) -> &'static str {
        match field {
            SweepField::Spot => self.spot,
            SweepField::Maturity => self.maturity_days,
        }
    }

    /// Chart title for one quantity against one field
    pub fn chart_title(&self, quantity: Quantity, field: SweepField) -> String {
        let subject = match quantity {
            Quantity::Price => self.option_price,
            _ => self.quantity(quantity),
        };
        let suffix = match field {
            SweepField::Spot => self.vs_spot,
            SweepField::Maturity => self.vs_time,
        };
        format!("{} {}", subject, suffix)
    }
}

pub static EN: Messages = Messages {
    title: "Black-Scholes Pricer",
    parameters: "Parameters",
    spot: "Spot price (S)",
    strike: "Strike price (K)",
    maturity_days: "Maturity (days)",
    rate: "Risk-free rate (r)",
    volatility: "Volatility (σ)",
    option_type: "Option type",
    call: "Call",
    put: "Put",
    option_price: "Option price",
    greeks: "Greeks",
    price: "Price",
    vs_spot: "as a function of S",
    vs_time: "as a function of time (T)",
    export_results: "Export results",
    export_written: "Results written to",
    error: "Error",
};

pub static FR: Messages = Messages {
    title: "Pricer Black-Scholes",
    parameters: "Paramètres",
    spot: "Prix spot (S)",
    strike: "Prix d'exercice (K)",
    maturity_days: "Maturité (jours)",
    rate: "Taux sans risque (r)",
    volatility: "Volatilité (σ)",
    option_type: "Type d’option",
    call: "Call",
    put: "Put",
    option_price: "Prix de l’option",
    greeks: "Greeks",
    price: "Prix",
    vs_spot: "en fonction de S",
    vs_time: "en fonction du temps (T)",
    export_results: "Export des résultats",
    export_written: "Résultats écrits dans",
    error: "Erreur",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("fr".parse::<Locale>().unwrap(), Locale::Fr);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn test_price_label_is_localized() {
        assert_eq!(Locale::En.messages().quantity(Quantity::Price), "Price");
        assert_eq!(Locale::Fr.messages().quantity(Quantity::Price), "Prix");
        assert_eq!(Locale::Fr.messages().quantity(Quantity::Vega), "Vega");
    }

    #[test]
    fn test_chart_titles() {
        let en = Locale::En.messages();
        assert_eq!(
            en.chart_title(Quantity::Price, SweepField::Spot),
            "Option price as a function of S"
        );
        assert_eq!(
            en.chart_title(Quantity::Theta, SweepField::Maturity),
            "Theta as a function of time (T)"
        );
        assert_eq!(
            Locale::Fr.messages().chart_title(Quantity::Delta, SweepField::Maturity),
            "Delta en fonction du temps (T)"
        );
        assert_eq!(
            Locale::Fr.messages().chart_title(Quantity::Price, SweepField::Spot),
            "Prix de l’option en fonction de S"
        );
    }
}
