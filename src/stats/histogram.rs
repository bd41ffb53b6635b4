use crate::data::model::TabularDataset;

// ---------------------------------------------------------------------------
// Histogram – square-root bin rule over one numeric column
// ---------------------------------------------------------------------------

/// One histogram bin. Bins are contiguous, non-overlapping, and together
/// cover `[global_min, global_max]`. The last bin is closed on both ends,
/// all others are closed-open.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub range_label: String,
    pub count: usize,
    pub min: f64,
    pub max: f64,
}

/// Bin the finite numeric values of `col`. `None` when no value parses.
///
/// `num_bins = min(10, ceil(sqrt(n)))`. A value lands in
/// `min(floor((v - min) / bin_width), num_bins - 1)`; a zero-width range
/// (all values equal) collapses everything into bin 0.
pub fn histogram(dataset: &TabularDataset, col: &str) -> Option<Vec<Bin>> {
    let idx = dataset.column_index(col)?;

    let values: Vec<f64> = dataset
        .rows
        .iter()
        .filter_map(|row| row.get(idx)?.as_f64())
        .collect();

    if values.is_empty() {
        return None;
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let num_bins = ((values.len() as f64).sqrt().ceil() as usize).min(10).max(1);
    let bin_width = (max - min) / num_bins as f64;

    let mut counts = vec![0usize; num_bins];
    for &v in &values {
        let i = if bin_width > 0.0 {
            (((v - min) / bin_width).floor() as usize).min(num_bins - 1)
        } else {
            0
        };
        counts[i] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lo = min + bin_width * i as f64;
            let hi = if i + 1 == num_bins {
                max
            } else {
                min + bin_width * (i + 1) as f64
            };
            Bin {
                range_label: format!("{lo:.1}-{hi:.1}"),
                count,
                min: lo,
                max: hi,
            }
        })
        .collect();

    Some(bins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn numeric_column(values: &[f64]) -> TabularDataset {
        TabularDataset::new(
            vec!["v".into()],
            values.iter().map(|&v| vec![CellValue::Num(v)]).collect(),
        )
    }

    #[test]
    fn test_sqrt_rule_and_count_conservation() {
        let ds = numeric_column(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        let bins = histogram(&ds, "v").unwrap();
        // ceil(sqrt(10)) = 4
        assert_eq!(bins.len(), 4);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 10);
    }

    #[test]
    fn test_max_value_lands_in_last_bin() {
        let ds = numeric_column(&[0.0, 1.0, 2.0, 3.0]);
        let bins = histogram(&ds, "v").unwrap();
        assert_eq!(bins.last().unwrap().count, 1);
        assert_eq!(bins.last().unwrap().max, 3.0);
    }

    #[test]
    fn test_bins_are_contiguous() {
        let ds = numeric_column(&[2.0, 4.0, 9.0, 16.0, 25.0]);
        let bins = histogram(&ds, "v").unwrap();
        for pair in bins.windows(2) {
            assert_eq!(pair[0].max, pair[1].min);
        }
        assert_eq!(bins.first().unwrap().min, 2.0);
        assert_eq!(bins.last().unwrap().max, 25.0);
    }

    #[test]
    fn test_constant_column_collapses_to_first_bin() {
        let ds = numeric_column(&[5.0, 5.0, 5.0, 5.0]);
        let bins = histogram(&ds, "v").unwrap();
        assert_eq!(bins[0].count, 4);
        assert_eq!(bins.iter().skip(1).map(|b| b.count).sum::<usize>(), 0);
    }

    #[test]
    fn test_bin_cap_at_ten() {
        let values: Vec<f64> = (0..200).map(|i| i as f64).collect();
        let bins = histogram(&numeric_column(&values), "v").unwrap();
        assert_eq!(bins.len(), 10);
    }

    #[test]
    fn test_no_numeric_values_is_empty() {
        let ds = TabularDataset::new(
            vec!["v".into()],
            vec![vec![CellValue::Str("x".into())], vec![CellValue::Null]],
        );
        assert!(histogram(&ds, "v").is_none());
    }

    #[test]
    fn test_range_label_format() {
        let ds = numeric_column(&[0.0, 1.0]);
        let bins = histogram(&ds, "v").unwrap();
        assert_eq!(bins[0].range_label, "0.0-0.5");
    }
}
