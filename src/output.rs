// src/output.rs
//! CSV export of valuations and sweep series
//!
//! The valuation table is consumed by downstream tooling and must stay
//! byte-stable: header `Price,Delta,Gamma,Vega,Theta,Rho`, one row per
//! evaluation, `\n` line endings, UTF-8. Floats are written the way Python's
//! `repr` writes them (shortest round-trip digits, `1e-05`, `1e+16`, `100.0`).

use crate::analytics::greeks::Valuation;
use crate::error::PricerResult;
use crate::sweep::SweepSeries;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default file name offered for downloads
pub const DEFAULT_EXPORT_FILENAME: &str = "greeks_result.csv";

/// Column names of the valuation table, independent of display locale
pub const VALUATION_HEADER: [&str; 6] = ["Price", "Delta", "Gamma", "Vega", "Theta", "Rho"];

/// Format a float like Python's `repr`
///
/// Digits are the shortest that round-trip. Scientific notation is used when
/// the decimal exponent is below -4 or at least 16, with a signed exponent of
/// at least two digits. Fixed notation always carries a fractional part.
/// NaN is written as an empty field.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return String::new();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value == 0.0 {
        return format!("{}0.0", sign);
    }

    let mut buffer = ryu::Buffer::new();
    let (digits, exp) = decimal_digits(buffer.format_finite(value.abs()));

    if !(-4..16).contains(&exp) {
        let (head, tail) = digits.split_at(1);
        let mantissa = if tail.is_empty() {
            head.to_string()
        } else {
            format!("{}.{}", head, tail)
        };
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return format!("{}{}e{}{:02}", sign, mantissa, exp_sign, exp.abs());
    }

    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("{}0.{}{}", sign, zeros, digits);
    }
    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{}{}{}.0", sign, digits, zeros)
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{}{}.{}", sign, int_part, frac_part)
    }
}

/// Significant digits and decimal exponent of a positive ryu rendering,
/// so that the value is `0.d1d2d3... * 10^(exp + 1)`
fn decimal_digits(text: &str) -> (String, i32) {
    let (mantissa, exp) = match text.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (text, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all = format!("{}{}", int_part, frac_part);
    let leading = all.len() - all.trim_start_matches('0').len();
    let digits = all.trim_matches('0').to_string();
    let exp = exp + int_part.len() as i32 - leading as i32 - 1;
    (digits, exp)
}

fn valuation_record(v: &Valuation) -> [String; 6] {
    [
        format_float(v.price),
        format_float(v.greeks.delta),
        format_float(v.greeks.gamma),
        format_float(v.greeks.vega),
        format_float(v.greeks.theta),
        format_float(v.greeks.rho),
    ]
}

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

/// Write the valuation table, header included even when `rows` is empty
pub fn write_valuations<W: Write>(writer: W, rows: &[Valuation]) -> PricerResult<()> {
    let mut wtr = csv_writer(writer);
    wtr.write_record(VALUATION_HEADER)?;
    for row in rows {
        wtr.write_record(valuation_record(row))?;
    }
    wtr.flush()?;
    debug!("wrote {} valuation rows", rows.len());
    Ok(())
}

/// Valuation table as UTF-8 bytes, ready to hand to a download
pub fn valuations_to_csv(rows: &[Valuation]) -> PricerResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_valuations(&mut buf, rows)?;
    Ok(buf)
}

pub fn write_valuations_to_csv<P: AsRef<Path>>(path: P, rows: &[Valuation]) -> PricerResult<()> {
    let file = File::create(path.as_ref())?;
    write_valuations(BufWriter::new(file), rows)
}

/// Two-column series table: `S,Price`, `T,Delta`, ...
pub fn write_series<W: Write>(writer: W, series: &SweepSeries) -> PricerResult<()> {
    let mut wtr = csv_writer(writer);
    wtr.write_record([series.field.symbol(), series.quantity.name()])?;
    for (x, y) in &series.points {
        wtr.write_record([format_float(*x), format_float(*y)])?;
    }
    wtr.flush()?;
    debug!(
        "wrote {} points of {} vs {}",
        series.len(),
        series.quantity,
        series.field
    );
    Ok(())
}

pub fn write_series_to_csv<P: AsRef<Path>>(path: P, series: &SweepSeries) -> PricerResult<()> {
    let file = File::create(path.as_ref())?;
    write_series(BufWriter::new(file), series)
}
