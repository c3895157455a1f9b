// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Least-squares line fitted to `(x, y)` points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub slope: f64,
    pub intercept: f64,
}

impl Trend {
    /// Fit `y = slope * x + intercept` by simple linear regression.
    ///
    /// Returns `None` for fewer than two points, or when every `x` is equal
    /// and the slope is undefined.
    ///
    /// ```
    /// use frostwatch_core::Trend;
    ///
    /// let trend = Trend::fit(&[(0.0, -17.0), (1.0, -16.0), (2.0, -15.0)]).unwrap();
    /// assert_eq!(trend.slope, 1.0);
    /// assert_eq!(trend.intercept, -17.0);
    ///
    /// assert!(Trend::fit(&[(0.0, -17.0)]).is_none());
    /// ```
    #[must_use]
    pub fn fit(points: &[(f64, f64)]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (covariance, variance) = points.iter().fold((0.0, 0.0), |(cov, var), (x, y)| {
            let dx = x - mean_x;
            (cov + dx * (y - mean_y), var + dx * dx)
        });

        if variance == 0.0 {
            return None;
        }

        let slope = covariance / variance;
        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }

    /// Points on the line at `x = 0, 1, .., n - 1`.
    #[must_use]
    pub fn fitted(&self, n: usize) -> Vec<(f64, f64)> {
        (0..n)
            .map(|index| {
                let x = index as f64;
                (x, self.at(x))
            })
            .collect()
    }
}
