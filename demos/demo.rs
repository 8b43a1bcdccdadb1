// demos/demo.rs
use bs_pricer::analytics::bs_analytic;
use bs_pricer::config::PricerConfig;
use bs_pricer::i18n::Locale;
use bs_pricer::math_utils::Timer;
use bs_pricer::option::{OptionParameters, OptionType};
use bs_pricer::output;
use bs_pricer::sweep::{self, SweepField};
use bs_pricer::Quantity;

fn main() {
    env_logger::init();

    let locale = std::env::args()
        .nth(1)
        .and_then(|l| l.parse::<Locale>().ok())
        .unwrap_or_default();
    let msg = locale.messages();
    let cfg = PricerConfig::default();

    println!("{}\n", msg.title);

    let s = 100.0;
    let k = 100.0;
    let t = 1.0;
    let r = 0.05;
    let sigma = 0.2;

    let call = OptionParameters::new(s, k, t, r, sigma, OptionType::Call).expect("Valid parameters");
    let put = call.with_option_type(OptionType::Put);

    // --- Price & Greeks ---
    for p in [&call, &put] {
        let v = bs_analytic::evaluate(p).expect("Valid parameters");
        println!("--- {} ---", msg.option_type_label(p.option_type));
        println!("{}: {:.4}", msg.option_price, v.price);
        for q in Quantity::GREEKS {
            println!("  {}: {:.4}", msg.quantity(q), v.get(q));
        }
        println!();
    }

    let call_price = bs_analytic::price(&call).expect("Valid parameters");
    let put_price = bs_analytic::price(&put).expect("Valid parameters");
    let parity_gap = (call_price - put_price) - (s - k * (-r * t).exp());
    println!("Put-call parity gap: {:e}\n", parity_gap);

    // --- Price as a function of S ---
    let spots = cfg.sweep.values(SweepField::Spot).expect("Valid grid");
    let mut timer = Timer::new();
    timer.start();
    let price_curve = sweep::sweep(&call, SweepField::Spot, &spots, Quantity::Price).expect("Valid sweep");
    let elapsed = timer.elapsed_ms();

    println!("{}", msg.chart_title(Quantity::Price, SweepField::Spot));
    for (x, y) in price_curve.points.iter().step_by(10) {
        println!("  S = {:>6.1}  ->  {:>9.4}", x, y);
    }
    println!("({} points in {:.3} ms)\n", price_curve.len(), elapsed);

    // --- Each Greek as a function of T ---
    let maturities = cfg.sweep.values(SweepField::Maturity).expect("Valid grid");
    for q in Quantity::GREEKS {
        let series = sweep::sweep(&call, SweepField::Maturity, &maturities, q).expect("Valid sweep");
        let first = series.points.first().map(|p| p.1).unwrap_or_default();
        let last = series.points.last().map(|p| p.1).unwrap_or_default();
        println!(
            "{}: {:.4} at {:.0} days, {:.4} at {:.0} days",
            msg.chart_title(q, SweepField::Maturity),
            first,
            maturities[0] * 365.0,
            last,
            maturities[maturities.len() - 1] * 365.0
        );
    }

    // --- CSV export ---
    let valuation = bs_analytic::evaluate(&call).expect("Valid parameters");
    let csv = output::valuations_to_csv(&[valuation]).expect("CSV serialization");
    println!("\n{}", msg.export_results);
    print!("{}", String::from_utf8_lossy(&csv));

    let results_dir = std::path::Path::new("results");
    if let Err(e) = std::fs::create_dir_all(results_dir) {
        eprintln!("Error creating results directory: {}", e);
        return;
    }
    let path = results_dir.join(output::DEFAULT_EXPORT_FILENAME);
    match output::write_valuations_to_csv(&path, &[valuation]) {
        Ok(_) => println!("{} {}", msg.export_written, path.display()),
        Err(e) => eprintln!("Error writing results: {}", e),
    }

    let curve_path = results_dir.join("price_vs_spot.csv");
    match output::write_series_to_csv(&curve_path, &price_curve) {
        Ok(_) => println!("{} {}", msg.export_written, curve_path.display()),
        Err(e) => eprintln!("Error writing price curve: {}", e),
    }
}
