// scripts/benchmark.rs
use bs_pricer::analytics::bs_analytic;
use bs_pricer::math_utils::Timer;
use bs_pricer::option::{OptionParameters, OptionType};
use bs_pricer::sweep::{self, linear_grid, SweepField};
use bs_pricer::{PricerResult, Quantity};
use log::info;
use serde::Serialize;
use std::env;
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        let rust_version = Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string());

        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rust_version,
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

#[derive(Debug, Serialize)]
struct BenchmarkResult {
    #[serde(rename = "Benchmark")]
    name: String,
    #[serde(rename = "Evaluations")]
    evaluations: usize,
    #[serde(rename = "Time_ms")]
    time_ms: f64,
    #[serde(rename = "Throughput_evals_per_sec")]
    throughput: f64,
    /// Last value produced, so the work cannot be optimized away
    #[serde(rename = "Checksum")]
    checksum: f64,
}

impl BenchmarkResult {
    fn new(name: String, evaluations: usize, time_ms: f64, checksum: f64) -> Self {
        BenchmarkResult {
            name,
            evaluations,
            time_ms,
            throughput: evaluations as f64 / (time_ms / 1000.0).max(f64::MIN_POSITIVE),
            checksum,
        }
    }
}

fn base_params() -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).expect("Valid parameters")
}

fn run_single_evaluation_benchmarks() -> PricerResult<Vec<BenchmarkResult>> {
    let mut results = Vec::new();
    let n = 1_000_000;
    let params = base_params();
    let mut timer = Timer::new();

    for q in [Quantity::Price, Quantity::Theta] {
        timer.start();
        let mut acc = 0.0;
        for i in 0..n {
            let p = params.with_spot(50.0 + (i % 100) as f64);
            acc += bs_analytic::quantity(&p, q)?;
        }
        results.push(BenchmarkResult::new(format!("Sequential {}", q), n, timer.elapsed_ms(), acc));
    }

    timer.start();
    let mut acc = 0.0;
    for i in 0..n {
        let p = params.with_spot(50.0 + (i % 100) as f64);
        acc += bs_analytic::evaluate(&p)?.greeks.gamma;
    }
    results.push(BenchmarkResult::new("Sequential full valuation".to_string(), n, timer.elapsed_ms(), acc));

    Ok(results)
}

fn run_sweep_benchmarks() -> PricerResult<Vec<BenchmarkResult>> {
    let mut results = Vec::new();
    let params = base_params();
    let mut timer = Timer::new();

    for &points in &[1_000usize, 100_000, 1_000_000] {
        println!("Running sweeps with {} points...", points);
        let spots = linear_grid(1.0, 1000.0, 999.0 / (points - 1) as f64)?;

        timer.start();
        let series = sweep::sweep(&params, SweepField::Spot, &spots, Quantity::Price)?;
        let checksum = series.points.last().map(|p| p.1).unwrap_or_default();
        results.push(BenchmarkResult::new(
            format!("Spot sweep Price ({} pts)", series.len()),
            series.len(),
            timer.elapsed_ms(),
            checksum,
        ));

        let maturities = linear_grid(1.0 / 365.0, 10.0, (10.0 - 1.0 / 365.0) / (points - 1) as f64)?;
        timer.start();
        let rows = sweep::sweep_valuations(&params, SweepField::Maturity, &maturities)?;
        let checksum = rows.last().map(|(_, v)| v.greeks.vega).unwrap_or_default();
        results.push(BenchmarkResult::new(
            format!("Maturity sweep valuations ({} pts)", rows.len()),
            rows.len(),
            timer.elapsed_ms(),
            checksum,
        ));
    }

    Ok(results)
}

fn write_results_to_csv(results: &[BenchmarkResult], system_info: &SystemInfo, filename: &str) -> PricerResult<()> {
    use std::io::Write;

    let mut file = std::fs::File::create(filename)?;

    // System information as comments
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;

    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);
    for result in results {
        wtr.serialize(result)?;
    }
    wtr.flush()?;

    info!("wrote {} benchmark rows to {}", results.len(), filename);
    Ok(())
}

fn main() {
    env_logger::init();

    println!("bs-pricer Benchmark Suite");
    println!("=========================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let mut all_results = match run_single_evaluation_benchmarks() {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Single evaluation benchmark failed: {}", e);
            std::process::exit(1);
        }
    };
    match run_sweep_benchmarks() {
        Ok(results) => all_results.extend(results),
        Err(e) => {
            eprintln!("Sweep benchmark failed: {}", e);
            std::process::exit(1);
        }
    }

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<40} {:>10} {:>12} {:>15}",
        "Benchmark", "Evals", "Time (ms)", "Evals/sec"
    );
    println!("{:-<80}", "");
    for result in &all_results {
        println!(
            "{:<40} {:>10} {:>12.2} {:>15.0}",
            result.name, result.evaluations, result.time_ms, result.throughput
        );
    }
    println!("{:=<80}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    match write_results_to_csv(&all_results, &system_info, &filename) {
        Ok(_) => println!("\nResults saved to: {}", filename),
        Err(e) => eprintln!("Error writing benchmark results: {}", e),
    }
    println!("Run again with: cargo run --bin benchmark --release");
}
