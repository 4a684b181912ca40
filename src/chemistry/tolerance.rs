use serde::{Deserialize, Serialize};

/// An m/z tolerance window combining an absolute component (Da) and a
/// relative one (ppm). Two masses are considered indistinguishable when their
/// difference falls inside the wider of the two windows, evaluated at the
/// reference mass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MzTolerance {
    pub absolute: f64,
    pub ppm: f64,
}

impl MzTolerance {
    pub fn new(absolute: f64, ppm: f64) -> Self {
        MzTolerance { absolute, ppm }
    }

    /// The acceptance window around `mz`, the maximum of the absolute and the
    /// ppm component.
    pub fn tolerance_window(&self, mz: f64) -> f64 {
        let relative = mz.abs() * self.ppm * 1e-6;
        if relative > self.absolute {
            relative
        } else {
            self.absolute
        }
    }

    /// Check whether `other` lies within the tolerance window around `mz`.
    ///
    /// # Example
    ///
    /// ```
    /// use lipidms::chemistry::tolerance::MzTolerance;
    ///
    /// let tolerance = MzTolerance::new(0.01, 0.0);
    /// assert!(tolerance.check_within_tolerance(500.0, 500.005));
    /// assert!(!tolerance.check_within_tolerance(500.0, 500.02));
    /// ```
    pub fn check_within_tolerance(&self, mz: f64, other: f64) -> bool {
        (mz - other).abs() <= self.tolerance_window(mz)
    }
}
