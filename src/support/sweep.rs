//! Evenly spaced sample generation for parameter sweeps.

/// Returns `points` evenly spaced values over the closed interval `[start, stop]`.
///
/// Both endpoints are included and reproduced exactly.
/// A request for zero points yields an empty vector and a single point yields `[start]`.
///
/// # Example
///
/// ```
/// use electrolyser_models::support::sweep::linspace;
///
/// let samples = linspace(500.0, 5000.0, 4);
/// assert_eq!(samples, vec![500.0, 2000.0, 3500.0, 5000.0]);
/// ```
#[must_use]
pub fn linspace(start: f64, stop: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (stop - start) / (points - 1) as f64;

            #[allow(clippy::cast_precision_loss)]
            let mut samples: Vec<f64> = (0..points).map(|k| start + k as f64 * step).collect();

            samples[points - 1] = stop;
            samples
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert_eq!(linspace(1.0, 2.0, 2), vec![1.0, 2.0]);
    }

    #[test]
    fn reference_sweep() {
        let samples = linspace(500.0, 5000.0, 20);

        assert_eq!(samples.len(), 20);
        assert_eq!(samples[0], 500.0);
        assert_eq!(samples[19], 5000.0);

        for pair in samples.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 4500.0 / 19.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn descending_interval() {
        let samples = linspace(10.0, 0.0, 3);
        assert_eq!(samples, vec![10.0, 5.0, 0.0]);
    }
}
