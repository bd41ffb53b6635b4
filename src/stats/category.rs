use std::collections::BTreeMap;

use crate::data::model::TabularDataset;

// ---------------------------------------------------------------------------
// Categorical bar aggregation with "Others" overflow bucket
// ---------------------------------------------------------------------------

/// Display cap: up to this many distinct categories are shown as-is.
pub const CATEGORY_DISPLAY_CAP: usize = 20;
/// When over the cap, this many real categories are kept before folding.
pub const CATEGORY_KEEP_TOP: usize = 19;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    pub label: String,
    pub count: usize,
}

/// Attached only when categories were actually folded into `"Others"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowInfo {
    pub total_categories: usize,
    pub shown_categories: usize,
    pub aggregated_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBars {
    pub bars: Vec<CategoryBar>,
    pub overflow: Option<OverflowInfo>,
}

/// Count trimmed cell text per category. Empty strings (and therefore nulls)
/// are skipped. Bars sort by count descending; ties break by label ascending,
/// which keeps the output deterministic across recomputation.
///
/// At most [`CATEGORY_DISPLAY_CAP`] distinct categories render directly;
/// beyond that the top [`CATEGORY_KEEP_TOP`] are kept and the rest fold into
/// a synthetic `"Others"` bar. Overflow metadata is attached only when the
/// folded sum is positive.
pub fn category_bar_chart(dataset: &TabularDataset, col: &str) -> Option<CategoryBars> {
    let idx = dataset.column_index(col)?;

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for row in &dataset.rows {
        let Some(cell) = row.get(idx) else { continue };
        let label = cell.display_trimmed();
        if label.is_empty() {
            continue;
        }
        *counts.entry(label).or_insert(0) += 1;
    }

    if counts.is_empty() {
        return None;
    }

    let total_categories = counts.len();
    let mut bars: Vec<CategoryBar> = counts
        .into_iter()
        .map(|(label, count)| CategoryBar { label, count })
        .collect();
    // BTreeMap iteration is label-ascending, so a stable sort on count alone
    // yields the documented count-desc / label-asc order.
    bars.sort_by(|a, b| b.count.cmp(&a.count));

    if total_categories <= CATEGORY_DISPLAY_CAP {
        return Some(CategoryBars {
            bars,
            overflow: None,
        });
    }

    let folded: Vec<CategoryBar> = bars.split_off(CATEGORY_KEEP_TOP);
    let folded_sum: usize = folded.iter().map(|b| b.count).sum();
    let overflow = (folded_sum > 0).then(|| OverflowInfo {
        total_categories,
        shown_categories: CATEGORY_KEEP_TOP,
        aggregated_count: folded.len(),
    });
    bars.push(CategoryBar {
        label: "Others".into(),
        count: folded_sum,
    });

    Some(CategoryBars { bars, overflow })
}
