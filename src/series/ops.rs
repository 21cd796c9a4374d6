//! Aggregator Module
//! Pure slot-wise operators deriving new series from aligned ones.
//!
//! All operators run time-key-by-time-key over the shared canonical axis
//! and return a series of the same length as their inputs. Missing is a
//! first-class value state: division by zero or by a missing operand yields
//! the missing marker, never NaN or infinity.

/// One value slot per axis entry; `None` is the explicit missing marker.
pub type Slots = Vec<Option<f64>>;

/// How `share` treats a missing sibling at a time key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePolicy {
    /// A missing sibling contributes nothing to the denominator. This is the
    /// source data's historical behavior and can overstate the remaining
    /// shares when a competitor's year is absent.
    ExcludeMissing,
    /// Any missing sibling makes the slot missing: no share is reported
    /// against an incomplete total.
    PropagateMissing,
}

/// Count-based average of the non-missing inputs at each time key.
/// Missing only when every input is missing at that key.
pub fn mean(inputs: &[&[Option<f64>]]) -> Slots {
    let len = inputs.first().map(|s| s.len()).unwrap_or(0);
    (0..len)
        .map(|t| {
            let mut sum = 0.0;
            let mut count = 0usize;
            for series in inputs {
                if let Some(v) = series.get(t).copied().flatten() {
                    sum += v;
                    count += 1;
                }
            }
            if count > 0 {
                Some(sum / count as f64)
            } else {
                None
            }
        })
        .collect()
}

/// Percent share of the slot-wise sum: `value(t) / sum(t) * 100`.
///
/// `all` is the full sibling set including `target`. Missing when the target
/// is missing, when the sum is zero, or (under `PropagateMissing`) when any
/// sibling is missing.
pub fn share(target: &[Option<f64>], all: &[&[Option<f64>]], policy: SharePolicy) -> Slots {
    (0..target.len())
        .map(|t| {
            let value = target[t]?;
            let mut sum = 0.0;
            for series in all {
                match series.get(t).copied().flatten() {
                    Some(v) => sum += v,
                    None => {
                        if policy == SharePolicy::PropagateMissing {
                            return None;
                        }
                    }
                }
            }
            if sum == 0.0 {
                None
            } else {
                Some(value / sum * 100.0)
            }
        })
        .collect()
}

/// Slot-wise `num / den`; missing when either operand is missing or the
/// denominator is zero.
pub fn ratio(num: &[Option<f64>], den: &[Option<f64>]) -> Slots {
    num.iter()
        .zip(den.iter())
        .map(|(n, d)| match (n, d) {
            (Some(n), Some(d)) if *d != 0.0 => Some(n / d),
            _ => None,
        })
        .collect()
}

/// Running sum of `value(t) * rate` over increasing t.
///
/// A missing input slot contributes 0 but does not reset the accumulator;
/// the accumulated value is still emitted at that slot.
pub fn cumulative(series: &[Option<f64>], rate: f64) -> Slots {
    let mut acc = 0.0;
    series
        .iter()
        .map(|v| {
            if let Some(v) = v {
                acc += v * rate;
            }
            Some(acc)
        })
        .collect()
}

/// Elementwise multiply; missing stays missing.
pub fn scale(series: &[Option<f64>], factor: f64) -> Slots {
    series.iter().map(|v| v.map(|v| v * factor)).collect()
}

/// Value at the final axis slot (used by the KPI row).
pub fn last_value(series: &[Option<f64>]) -> Option<f64> {
    series.last().copied().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_ignores_missing_inputs_per_slot() {
        let a = vec![Some(2.0), None, Some(4.0)];
        let b = vec![None, None, Some(8.0)];
        let m = mean(&[&a, &b]);
        // A slot present for only one input averages over that one input.
        assert_eq!(m, vec![Some(2.0), None, Some(6.0)]);
    }

    #[test]
    fn mean_of_all_missing_is_missing() {
        let a = vec![None, None];
        let b = vec![None, None];
        assert_eq!(mean(&[&a, &b]), vec![None, None]);
    }

    #[test]
    fn share_is_percent_of_slot_sum() {
        let a = vec![Some(10.0)];
        let b = vec![Some(30.0)];
        let shares_a = share(&a, &[&a, &b], SharePolicy::PropagateMissing);
        let shares_b = share(&b, &[&a, &b], SharePolicy::PropagateMissing);
        assert_eq!(shares_a, vec![Some(25.0)]);
        assert_eq!(shares_b, vec![Some(75.0)]);
    }

    #[test]
    fn share_policies_differ_on_missing_sibling() {
        let a = vec![Some(10.0)];
        let b = vec![None];
        let keep = share(&a, &[&a, &b], SharePolicy::ExcludeMissing);
        let drop = share(&a, &[&a, &b], SharePolicy::PropagateMissing);
        assert_eq!(keep, vec![Some(100.0)]);
        assert_eq!(drop, vec![None]);
    }

    #[test]
    fn share_of_zero_total_is_missing() {
        let a = vec![Some(0.0)];
        let b = vec![Some(0.0)];
        assert_eq!(share(&a, &[&a, &b], SharePolicy::PropagateMissing), vec![None]);
    }

    #[test]
    fn ratio_guards_zero_and_missing() {
        let num = vec![Some(6.0), Some(6.0), None];
        let den = vec![Some(2.0), Some(0.0), Some(3.0)];
        assert_eq!(ratio(&num, &den), vec![Some(3.0), None, None]);
    }

    #[test]
    fn cumulative_carries_accumulator_across_gaps() {
        let series = vec![Some(2.0), None, Some(3.0)];
        assert_eq!(
            cumulative(&series, 0.5),
            vec![Some(1.0), Some(1.0), Some(2.5)]
        );
    }

    #[test]
    fn scale_preserves_missing() {
        let series = vec![Some(2.0), None];
        assert_eq!(scale(&series, 10.0), vec![Some(20.0), None]);
    }

    #[test]
    fn operators_preserve_length() {
        let a = vec![Some(1.0), None, Some(3.0), None];
        let b = vec![Some(2.0), Some(2.0), None, None];
        assert_eq!(mean(&[&a, &b]).len(), 4);
        assert_eq!(share(&a, &[&a, &b], SharePolicy::ExcludeMissing).len(), 4);
        assert_eq!(ratio(&a, &b).len(), 4);
        assert_eq!(cumulative(&a, 1.0).len(), 4);
        assert_eq!(scale(&a, 1.0).len(), 4);
    }

    #[test]
    fn last_value_reads_the_final_slot_only() {
        assert_eq!(last_value(&[Some(1.0), Some(2.0)]), Some(2.0));
        assert_eq!(last_value(&[Some(1.0), None]), None);
    }
}
