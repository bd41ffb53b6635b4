/// Chart geometry: domain→pixel scales, tick policy, and label formatting.
///
/// Nothing here draws. These helpers turn a derived view into drawable
/// numbers (pixel positions, tick values, label text) for whatever
/// presentation layer sits on top.
pub mod format;
pub mod scale;
pub mod ticks;

pub use format::{AXIS_LABEL_LEN, MAX_LABEL_LEN, format_number, truncate_label};
pub use scale::{AXIS_PADDING, LinearScale, ROTATED_LABEL_MARGIN};
pub use ticks::{LabelOrientation, category_intervals, label_orientation, numeric_ticks};
