use argminmax::ArgMinMax;

/// Index of the largest key. Ties go to the first occurrence.
pub(crate) fn position_max_by_key<T>(items: &[T], key: impl Fn(&T) -> f64) -> Option<usize> {
    let keys: Vec<f64> = items.iter().map(key).collect();
    if keys.is_empty() {
        return None;
    }
    Some(keys.as_slice().argmax())
}

/// Index of the smallest key. Ties go to the first occurrence.
pub(crate) fn position_min_by_key<T>(items: &[T], key: impl Fn(&T) -> f64) -> Option<usize> {
    let keys: Vec<f64> = items.iter().map(key).collect();
    if keys.is_empty() {
        return None;
    }
    Some(keys.as_slice().argmin())
}

/// Rounds half away from zero to `decimals` places.
#[inline]
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Linearly maps a value from one range to another while preserving its relative proportion.
pub(crate) fn remap(val: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    if in_max == in_min {
        return out_min;
    }
    let t = (val - in_min) / (in_max - in_min);
    out_min + t * (out_max - out_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_ties_resolve_to_first_occurrence() {
        let costs = [1600.0, 5000.0, 500.0, 5000.0];
        assert_eq!(position_max_by_key(&costs, |c| *c), Some(1));
    }

    #[test]
    fn min_ties_resolve_to_first_occurrence() {
        let co2 = [40.0, 20.0, 20.0, 90.0];
        assert_eq!(position_min_by_key(&co2, |c| *c), Some(1));
    }

    #[test]
    fn extremes_of_empty_slice_are_none() {
        let empty: [f64; 0] = [];
        assert_eq!(position_max_by_key(&empty, |c| *c), None);
        assert_eq!(position_min_by_key(&empty, |c| *c), None);
    }

    #[test]
    fn rounds_to_requested_places() {
        assert_eq!(round_to(4.8333, 1), 4.8);
        assert_eq!(round_to(362.5, 2), 362.5);
        assert_eq!(round_to(1.005, 0), 1.0);
    }

    #[test]
    fn remap_handles_degenerate_input_range() {
        assert_eq!(remap(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(remap(5.0, 2.0, 2.0, 0.0, 100.0), 0.0);
    }
}
