use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Which bin value a histogram series plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueKey {
    Count,
    Density,
    Cumulative,
    CumulativeDensity,
}

impl ValueKey {
    #[must_use]
    pub fn from_flags(normalized: bool, cumulative: bool) -> Self {
        match (normalized, cumulative) {
            (true, true) => Self::CumulativeDensity,
            (false, true) => Self::Cumulative,
            (true, false) => Self::Density,
            (false, false) => Self::Count,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Density => "density",
            Self::Cumulative => "cumulative",
            Self::CumulativeDensity => "cumulativeDensity",
        }
    }
}

/// One histogram bin with every derivable value precomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    pub count: f64,
    pub density: f64,
    pub cumulative: f64,
    pub cumulative_density: f64,
}

impl HistogramBin {
    #[must_use]
    pub fn value(self, key: ValueKey) -> f64 {
        match key {
            ValueKey::Count => self.count,
            ValueKey::Density => self.density,
            ValueKey::Cumulative => self.cumulative,
            ValueKey::CumulativeDensity => self.cumulative_density,
        }
    }
}

/// Derives density and cumulative values from raw per-bin counts.
///
/// Densities stay at zero when the total count is zero.
pub fn histogram_bins(counts: &[f64]) -> ChartResult<Vec<HistogramBin>> {
    if let Some(bad) = counts
        .iter()
        .find(|count| !count.is_finite() || **count < 0.0)
    {
        return Err(ChartError::InvalidData(format!(
            "histogram bin count must be finite and >= 0, got {bad}"
        )));
    }

    let total: f64 = counts.iter().sum();
    let share = |value: f64| if total > 0.0 { value / total } else { 0.0 };

    let mut running = 0.0;
    Ok(counts
        .iter()
        .map(|&count| {
            running += count;
            HistogramBin {
                count,
                density: share(count),
                cumulative: running,
                cumulative_density: share(running),
            }
        })
        .collect())
}
