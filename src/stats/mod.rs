/// Statistical aggregations over a resolved dataset.
///
/// Every function here is pure: it takes the dataset plus column selections
/// and returns a fresh derived structure, or `None` when no eligible data
/// remains after dropping unparseable cells. Nothing in this module errors.
pub mod category;
pub mod correlation;
pub mod histogram;
pub mod scatter;

pub use category::{CategoryBar, CategoryBars, OverflowInfo, category_bar_chart};
pub use correlation::{CorrelationMatrix, correlation_matrix};
pub use histogram::{Bin, histogram};
pub use scatter::{ScatterSeries, scatter_series};
