use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Shared value domain for column widths.
///
/// The floor always includes zero so bars never start above the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
}

impl ValueScale {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Builds the shared domain from raw series values.
    ///
    /// Non-finite and missing values are skipped. `min` is clamped to `<= 0`;
    /// `max` falls back to `0` when no finite values exist.
    #[must_use]
    pub fn from_series<'a, I, S>(series: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = &'a Option<f64>>,
    {
        let mut min: Option<OrderedFloat<f64>> = None;
        let mut max: Option<OrderedFloat<f64>> = None;
        for values in series {
            for value in values.into_iter().flatten().copied() {
                if !value.is_finite() {
                    continue;
                }
                let value = OrderedFloat(value);
                min = Some(min.map_or(value, |current| current.min(value)));
                max = Some(max.map_or(value, |current| current.max(value)));
            }
        }

        Self {
            min: min.map_or(0.0, |m| m.0.min(0.0)),
            max: max.map_or(0.0, |m| m.0),
        }
    }

    /// Returns `true` when the domain has no span and widths cannot be scaled.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }
}

/// Maps `value` onto `[0, available_width]` for the domain `[min, max]`.
///
/// A degenerate domain fills the full width. Results always saturate inside
/// `[0, available_width]`.
#[must_use]
pub fn column_width(value: f64, min: f64, max: f64, available_width: f64) -> f64 {
    let available_width = if available_width.is_finite() {
        available_width.max(0.0)
    } else {
        0.0
    };
    if min == max {
        return available_width;
    }

    let width = available_width * (value - min) / (max - min);
    if width.is_nan() {
        return 0.0;
    }
    width.clamp(0.0, available_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_floor_includes_zero_for_positive_data() {
        let values = [Some(10.0), Some(30.0), None];
        let scale = ValueScale::from_series([values.iter()]);
        assert_eq!(scale, ValueScale::new(0.0, 30.0));
    }

    #[test]
    fn scale_spans_both_series() {
        let first = [Some(5.0), Some(-4.0)];
        let second = [Some(12.0), Some(f64::NAN)];
        let scale = ValueScale::from_series([first.iter(), second.iter()]);
        assert_eq!(scale, ValueScale::new(-4.0, 12.0));
    }

    #[test]
    fn width_saturates_and_handles_degenerate_domain() {
        assert_eq!(column_width(50.0, 0.0, 100.0, 200.0), 100.0);
        assert_eq!(column_width(500.0, 0.0, 100.0, 200.0), 200.0);
        assert_eq!(column_width(-10.0, 0.0, 100.0, 200.0), 0.0);
        assert_eq!(column_width(0.0, 0.0, 0.0, 200.0), 200.0);
        assert_eq!(column_width(1.0, 0.0, 1.0, -5.0), 0.0);
    }
}
