//! Ordinary least squares on two variables

/// Straight-line fit `y = slope·x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Fitted slope
    pub slope: f64,
    /// Fitted intercept
    pub intercept: f64,
    /// Pearson correlation coefficient, `0` when either variable is constant
    pub correlation: f64,
    /// Number of points fitted
    pub count: usize,
}

impl LinearFit {
    /// Evaluate the fitted line
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Two-point line spanning the x extent of `points`, for plotting
    pub fn line(&self, points: &[(f64, f64)]) -> Option<[(f64, f64); 2]> {
        let min_x = points.iter().map(|p| p.0).reduce(f64::min)?;
        let max_x = points.iter().map(|p| p.0).reduce(f64::max)?;
        Some([(min_x, self.predict(min_x)), (max_x, self.predict(max_x))])
    }
}

/// Fit a straight line through `points` by ordinary least squares
///
/// Returns `None` with fewer than two distinct x values, where the slope is
/// undefined.
pub fn least_squares(points: &[(f64, f64)]) -> Option<LinearFit> {
    let (first_x, _) = *points.first()?;
    if points.iter().all(|&(x, _)| x == first_x) {
        return None;
    }

    let n = points.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2, mut sum_y2) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for &(x, y) in points {
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
        sum_y2 += y * y;
    }

    let numerator = n * sum_xy - sum_x * sum_y;
    let spread_x = n * sum_x2 - sum_x * sum_x;
    let spread_y = n * sum_y2 - sum_y * sum_y;
    if spread_x == 0.0 {
        return None;
    }

    let slope = numerator / spread_x;
    let intercept = (sum_y - slope * sum_x) / n;

    let denominator = libm::sqrt(spread_x * spread_y);
    let correlation = if denominator > 0.0 && denominator.is_finite() {
        (numerator / denominator).clamp(-1.0, 1.0)
    } else {
        0.0
    };

    if !slope.is_finite() || !intercept.is_finite() {
        return None;
    }

    Some(LinearFit {
        slope,
        intercept,
        correlation,
        count: points.len(),
    })
}
