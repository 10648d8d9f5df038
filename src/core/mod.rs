pub mod histogram;
pub mod scale;
pub mod types;

pub use histogram::{HistogramBin, ValueKey, histogram_bins};
pub use scale::{LinearScale, ScaleAdapter};
pub use types::{ChartLayout, DomainRange, Margin, PixelExtent, RegionBounds};
