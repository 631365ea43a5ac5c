use crate::aggregate::StatusCount;
use crate::domain::status::StatusDimension;

/// Color of the single placeholder segment rendered when every value is zero.
pub const EMPTY_CHART_COLOR: &str = "#D2D2D2";

/// A labeled non-negative value to be turned into a proportional segment.
#[derive(PartialEq, Debug, Clone)]
pub struct ChartValue {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// An angular span `[start_angle, end_angle)` in degrees plus the rounded
/// percentage shown in the legend.
#[derive(PartialEq, Debug, Clone)]
pub struct ChartSegment {
    pub label: String,
    pub color: String,
    pub start_angle: f64,
    pub end_angle: f64,
    pub percentage: u32,
}

impl<D: StatusDimension> From<&StatusCount<D>> for ChartValue {
    fn from(count: &StatusCount<D>) -> Self {
        ChartValue {
            label: count.label.to_string(),
            value: count.count as f64,
            color: count.color.to_string(),
        }
    }
}

/// Converts values into donut segments spanning 360° in total, proportional to
/// each value's share. Values are processed in input order with the cumulative
/// angle carried forward, so identical input yields bit-identical angles.
///
/// When the values sum to zero (or the input is empty) there is nothing to
/// divide by, and a single neutral placeholder segment is returned instead.
pub fn build_chart_segments(values: &[ChartValue]) -> Vec<ChartSegment> {
    let total: f64 = values.iter().map(|v| v.value).sum();
    if total == 0.0 {
        return vec![ChartSegment {
            label: "No data".to_string(),
            color: EMPTY_CHART_COLOR.to_string(),
            start_angle: 0.0,
            end_angle: 360.0,
            percentage: 0,
        }];
    }

    let mut start_angle = 0.0;
    values
        .iter()
        .map(|value| {
            let end_angle = start_angle + value.value / total * 360.0;
            let segment = ChartSegment {
                label: value.label.clone(),
                color: value.color.clone(),
                start_angle,
                end_angle,
                percentage: percentage(value.value, total),
            };
            start_angle = end_angle;
            segment
        })
        .collect()
}

/// Legend percentage, rounded. A zero total yields 0% rather than NaN.
pub fn percentage(value: f64, total: f64) -> u32 {
    if total == 0.0 {
        return 0;
    }

    (value / total * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn value(label: &str, value: f64) -> ChartValue {
        ChartValue {
            label: label.to_string(),
            value,
            color: "#3E8635".to_string(),
        }
    }

    #[test]
    fn segments_are_proportional_and_contiguous() {
        let values = vec![value("A", 25.0), value("B", 75.0)];

        let segments = build_chart_segments(&values);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].label, "A");
        assert_eq!(segments[0].start_angle, 0.0);
        assert_eq!(segments[0].end_angle, 90.0);
        assert_eq!(segments[0].percentage, 25);
        assert_eq!(segments[1].label, "B");
        assert_eq!(segments[1].start_angle, 90.0);
        assert_eq!(segments[1].end_angle, 360.0);
        assert_eq!(segments[1].percentage, 75);
    }

    #[rstest]
    #[case(vec![1.0, 1.0, 1.0])]
    #[case(vec![3.0, 7.0])]
    #[case(vec![0.0, 2.0, 5.0, 13.0])]
    #[case(vec![42.0])]
    fn segment_spans_sum_to_a_full_circle(#[case] values: Vec<f64>) {
        let values: Vec<ChartValue> = values.iter().map(|v| value("segment", *v)).collect();

        let segments = build_chart_segments(&values);

        let total_span: f64 = segments.iter().map(|s| s.end_angle - s.start_angle).sum();
        assert!((total_span - 360.0).abs() < 1e-6, "expected 360°, got {total_span}°");
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![value("A", 0.0), value("B", 0.0)])]
    fn all_zero_values_yield_a_single_placeholder_segment(#[case] values: Vec<ChartValue>) {
        let segments = build_chart_segments(&values);

        assert_eq!(
            segments,
            vec![ChartSegment {
                label: "No data".to_string(),
                color: EMPTY_CHART_COLOR.to_string(),
                start_angle: 0.0,
                end_angle: 360.0,
                percentage: 0,
            }]
        );
    }

    #[rstest]
    #[case(0.0, 0.0, 0)]
    #[case(25.0, 0.0, 0)]
    #[case(25.0, 100.0, 25)]
    #[case(1.0, 3.0, 33)]
    #[case(2.0, 3.0, 67)]
    fn percentage_is_rounded_and_guarded_against_a_zero_total(#[case] value: f64, #[case] total: f64, #[case] expected: u32) {
        assert_eq!(percentage(value, total), expected);
    }

    #[test]
    fn identical_input_produces_identical_angles() {
        let values = vec![value("A", 1.0), value("B", 2.0), value("C", 4.0)];

        let first = build_chart_segments(&values);
        let second = build_chart_segments(&values);

        assert_eq!(first, second);
    }
}
