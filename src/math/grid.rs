/// `samples` evenly spaced values over `[start, end]`, both ends included.
///
/// The last value is `end` exactly rather than an accumulated approximation.
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (samples - 1) as f64;
            let mut values: Vec<f64> = (0..samples - 1)
                .map(|i| start + step * i as f64)
                .collect();
            values.push(end);
            values
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        let values = linspace(0.0, std::f64::consts::TAU, 7);
        assert_eq!(values.len(), 7);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[6], std::f64::consts::TAU);
    }

    #[test]
    fn test_even_spacing() {
        let values = linspace(-1.0, 1.0, 5);
        assert_eq!(values, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_degenerate_sample_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 4.0, 1), vec![3.0]);
    }

    #[test]
    fn test_descending_range() {
        let values = linspace(2.0, 0.0, 3);
        assert_eq!(values, vec![2.0, 1.0, 0.0]);
    }
}
