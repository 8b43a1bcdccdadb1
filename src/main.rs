// src/main.rs
//
// Command-line front end for the Black-Scholes pricer.
// Each subcommand mirrors one screen of the interactive pricer: price & Greeks,
// a sweep chart as a table, and the CSV export.

use bs_pricer::analytics::bs_analytic;
use bs_pricer::config::PricerConfig;
use bs_pricer::i18n::{Locale, Messages};
use bs_pricer::option::{days_to_years, maturity_from_expiry, OptionParameters, OptionType, DAYS_PER_YEAR};
use bs_pricer::output::{self, DEFAULT_EXPORT_FILENAME};
use bs_pricer::sweep::{self, SweepField};
use bs_pricer::{PricerResult, Quantity, QuantitySet, Valuation};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use log::{debug, error, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bs-pricer")]
#[command(about = "Black-Scholes price, Greeks and parameter sweeps for European options")]
struct Cli {
    /// Path to configuration file (TOML)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Display language (en, fr); overrides the configuration file
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Price and Greeks for one parameter set
    Price {
        #[command(flatten)]
        option: OptionArgs,

        /// Comma-separated quantities to show
        #[arg(long, default_value = "price,delta,gamma,vega,theta,rho")]
        show: String,
    },

    /// One quantity across a spot or maturity grid
    Sweep {
        #[command(flatten)]
        option: OptionArgs,

        /// Swept input: spot or maturity
        #[arg(long, default_value = "spot")]
        field: String,

        /// Output quantity: price, delta, gamma, vega, theta or rho
        #[arg(long, default_value = "price")]
        quantity: String,

        /// Comma-separated override values (spot, or maturity in days).
        /// Defaults to the configured grid.
        #[arg(long, value_delimiter = ',')]
        values: Option<Vec<f64>>,

        /// Write the series as CSV instead of printing it
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Write price and Greeks as CSV
    Export {
        #[command(flatten)]
        option: OptionArgs,

        /// Destination file
        #[arg(long, short, default_value = DEFAULT_EXPORT_FILENAME)]
        output: PathBuf,

        /// Write one row per grid value of this field (spot or maturity)
        #[arg(long)]
        field: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
struct OptionArgs {
    /// Spot price S
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price K
    #[arg(long)]
    strike: Option<f64>,

    /// Time to maturity in calendar days
    #[arg(long, conflicts_with = "expiry")]
    maturity_days: Option<f64>,

    /// Expiry date (YYYY-MM-DD), counted from --as-of
    #[arg(long)]
    expiry: Option<NaiveDate>,

    /// Valuation date for --expiry (defaults to today)
    #[arg(long, requires = "expiry")]
    as_of: Option<NaiveDate>,

    /// Continuously compounded risk-free rate
    #[arg(long, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Annualized volatility
    #[arg(long)]
    volatility: Option<f64>,

    /// Option type: call or put
    #[arg(long = "type")]
    option_type: Option<String>,

    /// Only enforce the model constraints, not the configured input limits
    #[arg(long)]
    no_limits: bool,
}

impl OptionArgs {
    fn resolve(&self, cfg: &PricerConfig) -> PricerResult<OptionParameters> {
        let defaults = &cfg.defaults;
        let t = match self.expiry {
            Some(expiry) => {
                let as_of = self.as_of.unwrap_or_else(|| Local::now().date_naive());
                maturity_from_expiry(as_of, expiry)?
            }
            None => days_to_years(self.maturity_days.unwrap_or(defaults.maturity_days)),
        };
        let option_type = match &self.option_type {
            Some(text) => text.parse::<OptionType>()?,
            None => defaults.option_type,
        };
        let params = OptionParameters::new(
            self.spot.unwrap_or(defaults.spot),
            self.strike.unwrap_or(defaults.strike),
            t,
            self.rate.unwrap_or(defaults.rate),
            self.volatility.unwrap_or(defaults.volatility),
            option_type,
        )?;
        if !self.no_limits {
            cfg.limits.check(&params)?;
        }
        debug!("resolved parameters: {:?}", params);
        Ok(params)
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        let locale = cli
            .locale
            .as_deref()
            .and_then(|l| l.parse::<Locale>().ok())
            .unwrap_or_default();
        error!("{}", e);
        eprintln!("{}: {}", locale.messages().error, e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> PricerResult<()> {
    let cfg = match &cli.config {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            PricerConfig::from_file(path)?
        }
        None => PricerConfig::default(),
    };
    let locale = match &cli.locale {
        Some(text) => text.parse::<Locale>()?,
        None => cfg.locale,
    };
    let msg = locale.messages();

    match &cli.command {
        Command::Price { option, show } => {
            let params = option.resolve(&cfg)?;
            let selection = QuantitySet::parse_list(show)?;
            let valuation = bs_analytic::evaluate(&params)?;
            print_parameters(msg, &params);
            print_valuation(msg, &params, &valuation, selection);
        }
        Command::Sweep {
            option,
            field,
            quantity,
            values,
            output: out_path,
        } => {
            let params = option.resolve(&cfg)?;
            let field = field.parse::<SweepField>()?;
            let quantity = quantity.parse::<Quantity>()?;
            let xs = grid_values(&cfg, field, values.as_deref())?;
            let series = sweep::sweep(&params, field, &xs, quantity)?;

            match out_path {
                Some(path) => {
                    output::write_series_to_csv(path, &series)?;
                    info!("wrote {} points to {}", series.len(), path.display());
                    println!("{} {}", msg.export_written, path.display());
                }
                None => {
                    let title = msg.chart_title(quantity, field);
                    println!("{}", title);
                    println!("{}", "=".repeat(title.chars().count()));
                    println!("{:>18}  {:>14}", msg.axis(field), msg.quantity(quantity));
                    for (x, y) in &series.points {
                        println!("{:>18.4}  {:>14.6}", display_x(field, *x), y);
                    }
                }
            }
        }
        Command::Export {
            option,
            output: out_path,
            field,
        } => {
            let params = option.resolve(&cfg)?;
            let rows: Vec<Valuation> = match field {
                Some(text) => {
                    let field = text.parse::<SweepField>()?;
                    let xs = cfg.sweep.values(field)?;
                    sweep::sweep_valuations(&params, field, &xs)?
                        .into_iter()
                        .map(|(_, v)| v)
                        .collect()
                }
                None => vec![bs_analytic::evaluate(&params)?],
            };
            output::write_valuations_to_csv(out_path, &rows)?;
            info!("wrote {} rows to {}", rows.len(), out_path.display());
            println!("{}", msg.export_results);
            println!("{} {}", msg.export_written, out_path.display());
        }
    }
    Ok(())
}

/// Override values for a sweep; user-supplied maturities are in days
fn grid_values(cfg: &PricerConfig, field: SweepField, values: Option<&[f64]>) -> PricerResult<Vec<f64>> {
    match (values, field) {
        (Some(v), SweepField::Spot) => Ok(v.to_vec()),
        (Some(v), SweepField::Maturity) => Ok(v.iter().map(|d| days_to_years(*d)).collect()),
        (None, _) => cfg.sweep.values(field),
    }
}

/// Maturity is displayed in days, as on the chart axis
fn display_x(field: SweepField, x: f64) -> f64 {
    match field {
        SweepField::Spot => x,
        SweepField::Maturity => x * DAYS_PER_YEAR,
    }
}

fn print_parameters(msg: &Messages, p: &OptionParameters) {
    println!("{}", msg.title);
    println!("{}", "=".repeat(msg.title.chars().count()));
    println!("{}", msg.parameters);
    println!("  {}: {:.4}", msg.spot, p.s);
    println!("  {}: {:.4}", msg.strike, p.k);
    println!("  {}: {:.0}", msg.maturity_days, p.maturity_days());
    println!("  {}: {:.4}", msg.rate, p.r);
    println!("  {}: {:.4}", msg.volatility, p.sigma);
    println!("  {}: {}", msg.option_type, msg.option_type_label(p.option_type));
    println!();
}

fn print_valuation(msg: &Messages, p: &OptionParameters, v: &Valuation, selection: QuantitySet) {
    if selection.contains(QuantitySet::PRICE) {
        println!("{}", msg.option_price);
        println!("  {} = {:.4}", msg.option_type_label(p.option_type), v.price);
    }
    let greeks: Vec<Quantity> = selection
        .quantities()
        .into_iter()
        .filter(|q| *q != Quantity::Price)
        .collect();
    if !greeks.is_empty() {
        println!("{}", msg.greeks);
        for q in greeks {
            println!("  {}: {:.4}", msg.quantity(q), v.get(q));
        }
    }
}
