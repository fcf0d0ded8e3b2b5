//! Descriptive statistics for result panels

/// Mean and spread of a sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of values
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

/// Mean and population standard deviation, `None` for an empty sample
pub fn describe(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;

    Some(Summary {
        count: values.len(),
        mean,
        std_dev: libm::sqrt(variance),
    })
}

/// Smallest and largest value, `None` for an empty sample
pub fn value_range(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |range, v| match range {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_statistics() {
        let summary = describe(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();

        assert_eq!(summary.count, 8);
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.std_dev, 2.0);
    }

    #[test]
    fn empty_sample() {
        assert_eq!(describe(&[]), None);
        assert_eq!(value_range(core::iter::empty()), None);
    }

    #[test]
    fn range_of_values() {
        assert_eq!(value_range([3.0, -1.0, 8.5]), Some((-1.0, 8.5)));
    }
}
