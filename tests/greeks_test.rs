// tests/greeks_test.rs
use approx::assert_abs_diff_eq;
use bs_pricer::analytics::bs_analytic;
use bs_pricer::option::{OptionParameters, OptionType};
use bs_pricer::{PricerError, Quantity};
use proptest::prelude::*;

fn params(s: f64, k: f64, t: f64, r: f64, sigma: f64, option_type: OptionType) -> OptionParameters {
    OptionParameters::new(s, k, t, r, sigma, option_type).expect("Valid parameters")
}

#[test]
fn test_atm_zero_rate_reference_case() {
    let call = params(100.0, 100.0, 1.0, 0.0, 0.2, OptionType::Call);
    let put = call.with_option_type(OptionType::Put);

    let call_price = bs_analytic::price(&call).unwrap();
    let put_price = bs_analytic::price(&put).unwrap();

    println!("\nCall: {} Put: {}", call_price, put_price);

    assert_abs_diff_eq!(call_price, 7.9656, epsilon = 1e-4);
    assert_abs_diff_eq!(put_price, 7.9656, epsilon = 1e-4);
    assert_abs_diff_eq!(call_price, put_price, epsilon = 1e-12);
    assert_abs_diff_eq!(bs_analytic::delta(&call).unwrap(), 0.5398, epsilon = 1e-4);

    // d1 = 0.1, d2 = -0.1
    assert_abs_diff_eq!(bs_analytic::gamma(&call).unwrap(), 0.01984762737385059, epsilon = 1e-12);
    assert_abs_diff_eq!(bs_analytic::vega(&call).unwrap(), 39.69525474770118, epsilon = 1e-9);
    assert_abs_diff_eq!(bs_analytic::theta(&call).unwrap(), -3.969525474770118, epsilon = 1e-9);
    assert_abs_diff_eq!(bs_analytic::rho(&call).unwrap(), 46.0172162722971, epsilon = 1e-9);
}

#[test]
fn test_bs_call_reference_values() {
    let call = params(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);

    let expected = [
        (Quantity::Price, 10.450583572185565),
        (Quantity::Delta, 0.6368306511756191),
        (Quantity::Gamma, 0.018762017345846895),
        (Quantity::Vega, 37.52403469169379),
        (Quantity::Theta, -6.414027546438197),
        (Quantity::Rho, 53.232481545376345),
    ];

    for (q, value) in expected {
        let analytic = bs_analytic::quantity(&call, q).unwrap();
        let rel_error = (analytic - value).abs() / value.abs();
        println!("{}: {} (expected {}, rel error {:e})", q, analytic, value, rel_error);
        assert!(rel_error < 1e-9, "Relative error for {} exceeds tolerance: {}", q, rel_error);
    }
}

#[test]
fn test_gamma_and_vega_do_not_depend_on_type() {
    let call = params(95.0, 105.0, 0.75, 0.03, 0.35, OptionType::Call);
    let put = call.with_option_type(OptionType::Put);

    assert_eq!(bs_analytic::gamma(&call).unwrap(), bs_analytic::gamma(&put).unwrap());
    assert_eq!(bs_analytic::vega(&call).unwrap(), bs_analytic::vega(&put).unwrap());
}

#[test]
fn test_greeks_match_finite_differences() {
    let p = params(105.0, 100.0, 0.5, 0.04, 0.25, OptionType::Put);
    let h = 1e-4;
    let price = |q: OptionParameters| bs_analytic::price(&q).unwrap();

    let fd_delta = (price(OptionParameters { s: p.s + h, ..p }) - price(OptionParameters { s: p.s - h, ..p })) / (2.0 * h);
    let fd_gamma = (price(OptionParameters { s: p.s + h, ..p }) - 2.0 * price(p)
        + price(OptionParameters { s: p.s - h, ..p }))
        / (h * h);
    let fd_vega = (price(OptionParameters { sigma: p.sigma + h, ..p })
        - price(OptionParameters { sigma: p.sigma - h, ..p }))
        / (2.0 * h);
    // Theta is the sensitivity to calendar time, i.e. minus the maturity derivative
    let fd_theta = -(price(OptionParameters { t: p.t + h, ..p }) - price(OptionParameters { t: p.t - h, ..p })) / (2.0 * h);
    let fd_rho = (price(OptionParameters { r: p.r + h, ..p }) - price(OptionParameters { r: p.r - h, ..p })) / (2.0 * h);

    let g = bs_analytic::greeks(&p).unwrap();
    assert_abs_diff_eq!(g.delta, fd_delta, epsilon = 1e-6);
    assert_abs_diff_eq!(g.gamma, fd_gamma, epsilon = 1e-4);
    assert_abs_diff_eq!(g.vega, fd_vega, epsilon = 1e-5);
    assert_abs_diff_eq!(g.theta, fd_theta, epsilon = 1e-5);
    assert_abs_diff_eq!(g.rho, fd_rho, epsilon = 1e-5);
}

#[test]
fn test_theta_negative_for_long_call() {
    for s in [80.0, 100.0, 120.0] {
        let call = params(s, 100.0, 0.5, 0.05, 0.2, OptionType::Call);
        assert!(bs_analytic::theta(&call).unwrap() < 0.0);
    }
}

#[test]
fn test_domain_rejection() {
    let base = params(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
    let cases = [
        (OptionParameters { t: 0.0, ..base }, "t"),
        (OptionParameters { t: -0.5, ..base }, "t"),
        (OptionParameters { sigma: 0.0, ..base }, "sigma"),
        (OptionParameters { s: 0.0, ..base }, "s"),
        (OptionParameters { k: -100.0, ..base }, "k"),
        (OptionParameters { s: f64::NAN, ..base }, "s"),
    ];

    for (p, field) in cases {
        match bs_analytic::price(&p) {
            Err(PricerError::Domain { field: f, .. }) => assert_eq!(f, field),
            other => panic!("expected domain error on {}, got {:?}", field, other),
        }
        for q in Quantity::ALL {
            assert!(matches!(bs_analytic::quantity(&p, q), Err(PricerError::Domain { .. })));
        }
        assert!(bs_analytic::evaluate(&p).is_err());
    }
}

#[test]
fn test_unknown_option_type_is_invalid_argument() {
    let err = "binary".parse::<OptionType>().unwrap_err();
    assert!(matches!(err, PricerError::InvalidArgument { .. }));
}

#[test]
fn test_deep_out_of_the_money_is_finite() {
    let put = params(1000.0, 20.0, 7.0 / 365.0, 0.0, 0.01, OptionType::Put);
    let v = bs_analytic::evaluate(&put).unwrap();
    assert_eq!(v.price, 0.0);
    assert_eq!(v.greeks.gamma, 0.0);
    assert!(v.greeks.delta.is_finite());
    assert!(v.greeks.delta <= 0.0 && v.greeks.delta >= -1.0);
}

#[test]
fn test_idempotence() {
    let p = params(87.5, 92.0, 0.3, 0.015, 0.45, OptionType::Put);
    let first = bs_analytic::evaluate(&p).unwrap();
    for _ in 0..10 {
        let again = bs_analytic::evaluate(&p).unwrap();
        assert_eq!(first.price.to_bits(), again.price.to_bits());
        assert_eq!(first.greeks.theta.to_bits(), again.greeks.theta.to_bits());
        assert_eq!(first, again);
    }
}

fn valid_inputs() -> impl Strategy<Value = (f64, f64, f64, f64, f64)> {
    (
        1.0f64..1000.0,  // s
        1.0f64..1000.0,  // k
        0.01f64..5.0,    // t
        -0.05f64..0.25,  // r
        0.01f64..1.5,    // sigma
    )
}

proptest! {
    #[test]
    fn prop_put_call_parity((s, k, t, r, sigma) in valid_inputs()) {
        let call = params(s, k, t, r, sigma, OptionType::Call);
        let put = call.with_option_type(OptionType::Put);
        let lhs = bs_analytic::price(&call).unwrap() - bs_analytic::price(&put).unwrap();
        let rhs = s - k * (-r * t).exp();
        prop_assert!((lhs - rhs).abs() < 1e-6, "parity gap {}", (lhs - rhs).abs());
    }

    #[test]
    fn prop_delta_bounds((s, k, t, r, sigma) in valid_inputs()) {
        let call = params(s, k, t, r, sigma, OptionType::Call);
        let put = call.with_option_type(OptionType::Put);
        let dc = bs_analytic::delta(&call).unwrap();
        let dp = bs_analytic::delta(&put).unwrap();
        prop_assert!((0.0..=1.0).contains(&dc));
        prop_assert!((-1.0..=0.0).contains(&dp));
    }

    #[test]
    fn prop_gamma_vega_non_negative((s, k, t, r, sigma) in valid_inputs()) {
        for option_type in [OptionType::Call, OptionType::Put] {
            let p = params(s, k, t, r, sigma, option_type);
            let g = bs_analytic::greeks(&p).unwrap();
            prop_assert!(g.gamma >= 0.0);
            prop_assert!(g.vega >= 0.0);
        }
    }

    #[test]
    fn prop_prices_within_no_arbitrage_bounds((s, k, t, r, sigma) in valid_inputs()) {
        let call = params(s, k, t, r, sigma, OptionType::Call);
        let price = bs_analytic::price(&call).unwrap();
        let intrinsic = (s - k * (-r * t).exp()).max(0.0);
        prop_assert!(price >= intrinsic - 1e-9);
        prop_assert!(price <= s + 1e-9);
    }
}
