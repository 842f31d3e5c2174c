// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::Error;

/// Processing options.
#[derive(Clone, Debug)]
pub struct Options {
    /// Moves the output so that its bounding box starts at 0,0.
    ///
    /// Default: false
    pub trim: bool,

    /// The distance a new sample must exceed, measured from the
    /// previously emitted point, to be kept.
    ///
    /// Default: 0.5
    pub min_distance: f64,

    /// Grid size emitted coordinates are snapped to.
    ///
    /// A sample at `2.3432,4.6109` becomes `2.25,4.5` with a grid of `0.25`.
    ///
    /// Default: 0.25
    pub round_to_nearest: f64,

    /// Increment of `t` when walking a segment from 0 to 1.
    ///
    /// The number of evaluations per segment is `1 / sample_frequency`.
    ///
    /// Default: 0.001
    pub sample_frequency: f64,

    /// Joins all paths into a single flat sequence instead of
    /// a map keyed by path id.
    ///
    /// Default: false
    pub join_path_data: bool,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            trim: false,
            min_distance: 0.5,
            round_to_nearest: 0.25,
            sample_frequency: 0.001,
            join_path_data: false,
        }
    }
}

impl Options {
    /// Validates the sampling fields and freezes them into a `SampleConfig`.
    pub fn sample_config(&self) -> Result<SampleConfig, Error> {
        SampleConfig::new(self.min_distance, self.round_to_nearest, self.sample_frequency)
    }
}

/// Validated, immutable sampling parameters.
///
/// Passed by reference into every sampling call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleConfig {
    min_distance: f64,
    round_to_nearest: f64,
    sample_frequency: f64,
}

impl SampleConfig {
    /// Creates a new config.
    ///
    /// - `min_distance` must be finite and not negative.
    /// - `round_to_nearest` must be finite and positive.
    /// - `sample_frequency` must be in `(0, 1]`.
    ///
    /// Every segment is evaluated `1 / sample_frequency` times regardless of
    /// its length, so a tiny step is accepted but costs linear time in that
    /// count. `1e-12` means about 10^12 evaluations per segment.
    pub fn new(
        min_distance: f64,
        round_to_nearest: f64,
        sample_frequency: f64,
    ) -> Result<Self, Error> {
        if !min_distance.is_finite() || min_distance < 0.0 {
            return Err(Error::invalid_option(
                "minDistance",
                format!("{} is not a finite number >= 0", min_distance),
            ));
        }

        if !round_to_nearest.is_finite() || round_to_nearest <= 0.0 {
            return Err(Error::invalid_option(
                "roundToNearest",
                format!("{} is not a finite number > 0", round_to_nearest),
            ));
        }

        if !(sample_frequency > 0.0 && sample_frequency <= 1.0) {
            return Err(Error::invalid_option(
                "sampleFrequency",
                format!("{} is not in (0, 1]", sample_frequency),
            ));
        }

        Ok(SampleConfig { min_distance, round_to_nearest, sample_frequency })
    }

    #[inline]
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    #[inline]
    pub fn round_to_nearest(&self) -> f64 {
        self.round_to_nearest
    }

    #[inline]
    pub fn sample_frequency(&self) -> f64 {
        self.sample_frequency
    }

    /// Snaps a coordinate toward zero onto the `round_to_nearest` grid.
    ///
    /// Uses `v - (v % grid)`, so negative values move up, not down.
    #[inline]
    pub fn snap(&self, v: f64) -> f64 {
        v - (v % self.round_to_nearest)
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        SampleConfig { min_distance: 0.5, round_to_nearest: 0.25, sample_frequency: 0.001 }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let opt = Options::default();
        assert_eq!(opt.sample_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(SampleConfig::new(-1.0, 0.25, 0.1).is_err());
        assert!(SampleConfig::new(f64::NAN, 0.25, 0.1).is_err());
        assert!(SampleConfig::new(0.5, 0.0, 0.1).is_err());
        assert!(SampleConfig::new(0.5, f64::INFINITY, 0.1).is_err());
        assert!(SampleConfig::new(0.5, 0.25, 0.0).is_err());
        assert!(SampleConfig::new(0.5, 0.25, 1.5).is_err());
        assert!(SampleConfig::new(0.5, 0.25, f64::NAN).is_err());
        assert!(SampleConfig::new(0.0, 0.25, 1.0).is_ok());
    }

    #[test]
    fn error_names_the_option() {
        match SampleConfig::new(0.5, -2.0, 0.1) {
            Err(Error::InvalidOption { name, .. }) => assert_eq!(name, "roundToNearest"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn tiny_steps_are_valid() {
        let cfg = SampleConfig::new(0.5, 0.25, 1e-12).unwrap();
        assert_eq!(cfg.sample_frequency(), 1e-12);
        assert!(SampleConfig::new(0.5, 0.25, f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn snap_moves_toward_zero() {
        let cfg = SampleConfig::default();
        assert_eq!(cfg.snap(2.3432), 2.25);
        assert_eq!(cfg.snap(4.6109), 4.5);
        assert_eq!(cfg.snap(-2.3432), -2.25);
        assert_eq!(cfg.snap(5.0), 5.0);
        assert_eq!(cfg.snap(0.0), 0.0);
    }
}
