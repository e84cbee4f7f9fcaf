use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{PI, TAU};
use wave_avg::{
    DEFAULT_SUBINTERVALS, Rule, SignalParams, SignalType, average_with, calculate_avg, f, g,
};

#[test]
fn test_shapes_are_bounded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10_000 {
        let x = rng.gen_range(-1.0e4..1.0e4);
        for ty in SignalType::ALL {
            let y = g(x, ty);
            assert!((-1.0..=1.0).contains(&y), "{ty} at {x} gave {y}");
        }
    }
}

#[test]
fn test_shapes_are_periodic() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10_000 {
        let x = rng.gen_range(-100.0..100.0);
        assert!((g(x, SignalType::Sine) - g(x + TAU, SignalType::Sine)).abs() < 1e-9);
        assert!((g(x, SignalType::Triangle) - g(x + TAU, SignalType::Triangle)).abs() < 1e-9);
        // rounding can flip the level right at a zero crossing
        if x.sin().abs() > 1e-6 {
            assert_eq!(g(x, SignalType::Square), g(x + TAU, SignalType::Square));
        }
    }
}

#[test]
fn test_unit_sine_matches_truncated_formula() {
    let params = SignalParams::new(1.0, 1.0, 0.0, 0.0).unwrap();
    let n = DEFAULT_SUBINTERVALS;
    let t = 1.0;
    let avg = calculate_avg(&params, SignalType::Sine, t, n);

    let dt = t / n as f64;
    let mut sum = 0.0;
    for i in 0..n - 1 {
        let t1 = i as f64 * dt;
        let t2 = (i + 1) as f64 * dt;
        let f1 = 1.0 * (2.0 * PI * 1.0 * t1 + 0.0).sin() + 0.0;
        let f2 = 1.0 * (2.0 * PI * 1.0 * t2 + 0.0).sin() + 0.0;
        sum += (f1 + f2) * 0.5 * dt;
    }
    let expected = sum / t;

    assert!((avg - expected).abs() < 1e-15);
    assert_eq!(format!("{avg:.5}"), "0.00000");
}

#[test]
fn test_truncated_sum_uses_library_signal() {
    let params = SignalParams::new(-2.0, 3.0, 0.4, 0.75).unwrap();
    let n = 250;
    let t = params.period();
    let dt = t / n as f64;
    let mut sum = 0.0;
    for i in 0..n - 1 {
        let t1 = i as f64 * dt;
        let t2 = (i + 1) as f64 * dt;
        sum += (f(t1, &params, SignalType::Triangle) + f(t2, &params, SignalType::Triangle))
            * 0.5
            * dt;
    }
    assert_eq!(calculate_avg(&params, SignalType::Triangle, t, n), sum / t);
}

#[test]
fn test_square_average_is_offset() {
    for offset in [-4.0, 0.0, 2.5] {
        let params = SignalParams::new(1.0, 1.0, 0.0, offset).unwrap();
        let avg = calculate_avg(&params, SignalType::Square, 1.0, DEFAULT_SUBINTERVALS);
        assert!((avg - offset).abs() < 0.01, "offset {offset} gave {avg}");
    }
}

#[test]
fn test_average_converges_to_offset() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..20 {
        let params = SignalParams::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(0.5..500.0),
            rng.gen_range(-PI..PI),
            rng.gen_range(-10.0..10.0),
        )
        .unwrap();
        for ty in SignalType::ALL {
            let avg = calculate_avg(&params, ty, params.period(), 100_000);
            assert!(
                (avg - params.offset()).abs() < 1e-3,
                "{ty} {params:?} gave {avg}"
            );
        }
    }
}

#[test]
fn test_more_subintervals_is_closer() {
    let params = SignalParams::new(3.0, 10.0, 0.3, 1.0).unwrap();
    let t = params.period();
    let coarse = calculate_avg(&params, SignalType::Sine, t, 100);
    let fine = calculate_avg(&params, SignalType::Sine, t, 10_000);
    assert!((fine - 1.0).abs() < (coarse - 1.0).abs());
}

#[test]
fn test_full_period_rule_removes_bias() {
    let params = SignalParams::new(1.0, 1.0, 0.0, 2.0).unwrap();
    let signal = params.signal(SignalType::Sine);
    let truncated = average_with(&signal, 1.0, DEFAULT_SUBINTERVALS, Rule::Truncated);
    let full = average_with(&signal, 1.0, DEFAULT_SUBINTERVALS, Rule::FullPeriod);
    assert!((full - 2.0).abs() < 1e-12);
    // the missing last slice costs C / N
    assert!((truncated - 1.998).abs() < 1e-5);
}
