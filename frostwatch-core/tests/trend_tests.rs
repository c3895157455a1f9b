// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use frostwatch_core::Trend;

const EPSILON: f64 = 1e-9;

fn assert_normal_equations(points: &[(f64, f64)], trend: Trend) {
    // d/db: sum(residual) = 0, d/dm: sum(x * residual) = 0
    let residual_sum: f64 = points.iter().map(|(x, y)| y - trend.at(*x)).sum();
    let weighted_sum: f64 = points.iter().map(|(x, y)| x * (y - trend.at(*x))).sum();

    assert!(residual_sum.abs() < EPSILON, "sum of residuals {residual_sum}");
    assert!(weighted_sum.abs() < EPSILON, "weighted residuals {weighted_sum}");
}

#[test]
fn test_fit_requires_two_points() {
    assert_eq!(Trend::fit(&[]), None);
    assert_eq!(Trend::fit(&[(0.0, -17.3)]), None);
}

#[test]
fn test_fit_with_identical_x_is_undefined() {
    assert_eq!(Trend::fit(&[(1.0, -17.0), (1.0, -16.0)]), None);
}

#[test]
fn test_fit_two_points_passes_through_both() {
    let trend = Trend::fit(&[(0.0, -17.5), (1.0, -16.5)]).expect("two points fit a line");

    assert!((trend.slope - 1.0).abs() < EPSILON);
    assert!((trend.intercept + 17.5).abs() < EPSILON);
}

#[test]
fn test_fit_flat_series_has_zero_slope() {
    let points = [(0.0, -17.0), (1.0, -17.0), (2.0, -17.0), (3.0, -17.0)];

    let trend = Trend::fit(&points).expect("flat series fits");

    assert_eq!(trend.slope, 0.0);
    assert_eq!(trend.intercept, -17.0);
}

#[test]
fn test_fit_satisfies_normal_equations() {
    let series = [
        vec![(0.0, -17.3), (1.0, -16.2), (2.0, -17.9), (3.0, -16.8), (4.0, -17.1)],
        vec![(0.0, -16.0), (1.0, -18.0)],
        vec![(0.0, -17.7), (1.0, -17.6), (2.0, -16.1), (3.0, -16.4), (4.0, -17.2), (5.0, -16.9)],
    ];

    for points in series {
        let trend = Trend::fit(&points).expect("at least two points");
        assert_normal_equations(&points, trend);
    }
}

#[test]
fn test_end_to_end_window_slope_and_intercept() {
    let trend = Trend::fit(&[(0.0, -17.0), (1.0, -16.0), (2.0, -15.0)]).expect("fit");

    assert_eq!(trend, Trend { slope: 1.0, intercept: -17.0 });
}

#[test]
fn test_fitted_points_follow_the_line() {
    let trend = Trend {
        slope: 0.5,
        intercept: -17.0,
    };

    assert_eq!(
        trend.fitted(3),
        vec![(0.0, -17.0), (1.0, -16.5), (2.0, -16.0)]
    );
    assert!(trend.fitted(0).is_empty());
}
