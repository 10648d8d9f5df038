use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Bidirectional mapping between data values and pixel positions.
pub trait ScaleAdapter {
    fn map(&self, value: f64) -> f64;
    fn invert(&self, pixel: f64) -> f64;
}

impl<T: ScaleAdapter + ?Sized> ScaleAdapter for &T {
    fn map(&self, value: f64) -> f64 {
        (**self).map(value)
    }

    fn invert(&self, pixel: f64) -> f64 {
        (**self).invert(pixel)
    }
}

impl<T: ScaleAdapter + ?Sized> ScaleAdapter for Box<T> {
    fn map(&self, value: f64) -> f64 {
        (**self).map(value)
    }

    fn invert(&self, pixel: f64) -> f64 {
        (**self).invert(pixel)
    }
}

impl<T: ScaleAdapter + ?Sized> ScaleAdapter for Rc<T> {
    fn map(&self, value: f64) -> f64 {
        (**self).map(value)
    }

    fn invert(&self, pixel: f64) -> f64 {
        (**self).invert(pixel)
    }
}

/// Continuous linear scale.
///
/// The range may run backwards (`(height, 0.0)`) for y axes whose pixel
/// origin is at the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(ChartError::InvalidData(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Scale whose `map` and `invert` are the identity.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            domain_start: 0.0,
            domain_end: 1.0,
            range_start: 0.0,
            range_end: 1.0,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Copy of this scale with a new domain, e.g. after zoom or pan.
    pub fn with_domain(self, domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        Self::new(
            (domain_start, domain_end),
            (self.range_start, self.range_end),
        )
    }
}

impl ScaleAdapter for LinearScale {
    fn map(&self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    fn invert(&self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}
