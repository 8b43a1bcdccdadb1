// demos/error_handling_demo.rs
use bs_pricer::analytics::bs_analytic;
use bs_pricer::config::{InputLimits, PricerConfig};
use bs_pricer::error::PricerError;
use bs_pricer::option::{OptionParameters, OptionType};
use bs_pricer::sweep::{self, SweepField};
use bs_pricer::Quantity;

fn main() {
    println!("Error Handling Demo for bs-pricer");
    println!("=================================\n");

    // Test 1: Zero maturity
    println!("1. Testing zero time to maturity...");

    match OptionParameters::call(100.0, 100.0, 0.0, 0.05, 0.2) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Zero volatility in a struct literal, caught by the engine itself
    println!("\n2. Testing zero volatility passed straight to the engine...");

    let flat_vol = OptionParameters {
        s: 100.0,
        k: 100.0,
        t: 1.0,
        r: 0.05,
        sigma: 0.0,
        option_type: OptionType::Call,
    };

    match bs_analytic::price(&flat_vol) {
        Ok(price) => println!("   Unexpected: Should have failed! price = {}", price),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Unrecognized selectors
    println!("\n3. Testing unrecognized option type, quantity and sweep field...");

    for result in [
        "straddle".parse::<OptionType>().map(|_| ()),
        "vanna".parse::<Quantity>().map(|_| ()),
        "strike".parse::<SweepField>().map(|_| ()),
    ] {
        match result {
            Ok(_) => println!("   Unexpected: Should have failed!"),
            Err(e) => println!("   ✓ Caught error: {}", e),
        }
    }

    // Test 4: Sweep with one bad override value
    println!("\n4. Testing a sweep containing a negative spot...");

    let base = OptionParameters::put(100.0, 100.0, 1.0, 0.05, 0.2).expect("Valid parameters");
    match sweep::sweep(&base, SweepField::Spot, &[90.0, -10.0, 110.0], Quantity::Price) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 5: Valid for the model but outside the front-end limits
    println!("\n5. Testing input limits...");

    let long_dated = base.with_maturity(5.0);
    match InputLimits::default().check(&long_dated) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }
    match bs_analytic::price(&long_dated) {
        Ok(price) => println!("   ✓ Engine still prices it: {:.4}", price),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 6: Malformed configuration
    println!("\n6. Testing malformed configuration...");

    match PricerConfig::from_toml_str("[defaults]\nspot = \"one hundred\"") {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 7: Error type matching
    println!("\n7. Testing error type matching...");

    match OptionParameters::call(100.0, -100.0, 1.0, 0.05, 0.2) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(PricerError::Domain { field, value, constraint }) => {
            println!("   ✓ Caught Domain: {} = {} ({})", field, value, constraint);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
    println!("All error cases were properly caught and handled.");
}
