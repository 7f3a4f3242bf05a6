//! Integration test: polynomial data is recovered exactly.
//!
//! A degree-d polynomial sampled at d+1 (or more) distinct nodes is its own
//! interpolant, so evaluating anywhere must reproduce the polynomial to
//! floating tolerance, including outside the node range, where the
//! barycentric form extrapolates the same polynomial.

use approx::assert_relative_eq;
use baryon_core::{barycentric_interpolate, BarycentricInterpolator};
use ndarray::{s, Array1, Ix0};

fn quartic(x: f64) -> f64 {
    -2.0 * x.powi(4) + 3.0 * x.powi(3) + x.powi(2) + 5.0 * x - 4.0
}

fn quartic_2(x: f64) -> f64 {
    -x.powi(4) + 2.0 * x.powi(3) + 6.0 * x.powi(2) - 3.0 * x + 2.0
}

fn scalar(out: ndarray::ArrayD<f64>) -> f64 {
    out.into_dimensionality::<Ix0>().unwrap().into_scalar()
}

#[test]
fn recovers_quartic_across_the_interval() {
    let nodes = Array1::linspace(-5.0, 5.0, 5);
    let ys = nodes.mapv(quartic);
    let interp = BarycentricInterpolator::with_values(nodes, ys).unwrap();

    let xs = Array1::linspace(-5.0, 5.0, 100);
    let out = interp.evaluate(&xs).unwrap();

    let mut worst = 0.0_f64;
    for (i, &x) in xs.iter().enumerate() {
        let expected = quartic(x);
        let err = (out[[i]] - expected).abs() / expected.abs().max(1.0);
        worst = worst.max(err);
        assert_relative_eq!(out[[i]], expected, max_relative = 1e-8, epsilon = 1e-8);
    }
    eprintln!("quartic recovery: worst relative error {worst:.2e} over 100 points");
}

#[test]
fn reproduces_sampled_values_at_the_nodes() {
    let nodes = Array1::linspace(-5.0, 5.0, 5);
    let ys = nodes.mapv(quartic);
    let interp = BarycentricInterpolator::with_values(nodes.clone(), ys.clone()).unwrap();

    let out = interp.evaluate(&nodes).unwrap();
    for i in 0..nodes.len() {
        // Exact node hits copy the stored value, bit for bit.
        assert_eq!(out[[i]], ys[i]);
    }
}

#[test]
fn extrapolates_the_same_polynomial() {
    // Nodes confined to [-1, 1], evaluation far outside at x = 7.
    let nodes = Array1::linspace(-1.0, 1.0, 10);
    let ys = nodes.mapv(quartic_2);
    let interp = BarycentricInterpolator::with_values(nodes, ys).unwrap();

    let y = scalar(interp.evaluate_at(7.0).unwrap());
    assert_relative_eq!(y, quartic_2(7.0), max_relative = 1e-8);
}

#[test]
fn staged_addition_matches_one_shot_construction() {
    let nodes = Array1::linspace(-5.0, 5.0, 5);
    let ys = nodes.mapv(quartic);

    let one_shot = BarycentricInterpolator::with_values(nodes.clone(), ys.clone()).unwrap();

    // Same union of nodes, delivered in three batches.
    let mut staged = BarycentricInterpolator::with_values(
        nodes.slice(s![..2]).to_owned(),
        ys.slice(s![..2]).to_owned(),
    )
    .unwrap();
    staged
        .add_points_with_values(
            nodes.slice(s![2..4]).to_owned(),
            ys.slice(s![2..4]).to_owned(),
        )
        .unwrap();
    staged
        .add_points_with_values(
            nodes.slice(s![4..]).to_owned(),
            ys.slice(s![4..]).to_owned(),
        )
        .unwrap();

    let xs = Array1::linspace(-5.0, 5.0, 100);
    let a = one_shot.evaluate(&xs).unwrap();
    let b = staged.evaluate(&xs).unwrap();
    for i in 0..xs.len() {
        assert_relative_eq!(a[[i]], b[[i]], max_relative = 1e-12, epsilon = 1e-12);
    }
}

#[test]
fn delayed_value_assignment() {
    let nodes = Array1::linspace(-5.0, 5.0, 5);
    let ys = nodes.mapv(quartic);

    let mut interp = BarycentricInterpolator::new(nodes).unwrap();
    interp.set_values(ys).unwrap();

    let xs = Array1::linspace(-5.0, 5.0, 100);
    let out = interp.evaluate(&xs).unwrap();
    for (i, &x) in xs.iter().enumerate() {
        assert_relative_eq!(out[[i]], quartic(x), max_relative = 1e-8, epsilon = 1e-8);
    }
}

#[test]
fn one_shot_helper_matches_explicit_construction() {
    let nodes = Array1::linspace(-2.0, 2.0, 5);
    let ys = nodes.mapv(quartic);
    let xs = Array1::linspace(-2.0, 2.0, 5);

    let via_helper = barycentric_interpolate(&nodes, &ys, &xs).unwrap();
    let via_struct = BarycentricInterpolator::with_values(nodes, ys)
        .unwrap()
        .evaluate(&xs)
        .unwrap();

    for i in 0..xs.len() {
        assert_eq!(via_helper[[i]], via_struct[[i]]);
    }
}

#[test]
fn linear_data_is_recovered_regardless_of_order() {
    // Ten nodes fit a degree-9 interpolant, but the sampled data is linear,
    // so the interpolant collapses to the line y = x / 1000.
    let nodes = Array1::from_iter((1..=10).map(|i| 1000.0 * i as f64));
    let ys = Array1::from_iter((1..=10).map(|i| i as f64));

    let out = barycentric_interpolate(&nodes, &ys, &ndarray::arr0(9500.0)).unwrap();
    let y = scalar(out);
    assert!((y - 9.5).abs() < 1e-8, "expected 9.5, got {y}");
}
