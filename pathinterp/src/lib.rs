// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`pathinterp` samples SVG path data into flat point sequences.

Curves are walked at a fixed parametric step, filtered by distance
and snapped onto a grid. `transform` attributes of the enclosing
elements are applied to the sampled points.

The crate does not parse XML. Documents are fed as element events:

```
use pathinterp::{Interpolator, Options, PathSampleResult};

let opt = Options { join_path_data: true, sample_frequency: 0.5, ..Options::default() };
let mut interp = Interpolator::new(&opt).unwrap();
interp.element_start("g", &[("transform", "translate(10,0)")]);
interp.element_start("path", &[("d", "M0,0 L10,0")]);
interp.element_end("path").unwrap();
interp.element_end("g").unwrap();

assert_eq!(interp.finish(), PathSampleResult::Joined(vec![15.0, 0.0, 20.0, 0.0]));
```
*/

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

mod error;
mod interpolator;
mod number;
mod options;
pub mod path;
mod transform;

pub use crate::error::Error;
pub use crate::interpolator::{Interpolator, PathSampleResult};
pub use crate::options::{Options, SampleConfig};
pub use crate::path::{PathData, PathSegment};
pub use crate::transform::{Decomposition, Transform, TransformEntry, TransformStack};

pub use kurbo::Point;

/// Samples a single path data string.
///
/// Returns a flat `[x0, y0, x1, y1, ...]` list. No transform is applied.
pub fn interpolate_path(data: &str, cfg: &SampleConfig) -> Vec<f64> {
    let points = PathData::parse(data).sample(cfg);

    let mut values = Vec::with_capacity(points.len() * 2);
    for p in points {
        values.push(p.x);
        values.push(p.y);
    }

    values
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_scenario() {
        let cfg = SampleConfig::new(0.5, 0.25, 0.5).unwrap();
        // t=0 lies on the segment start and does not pass the distance filter.
        assert_eq!(interpolate_path("M0,0 L10,0", &cfg), vec![5.0, 0.0, 10.0, 0.0]);
    }

    #[test]
    fn degenerate_arc_matches_line() {
        let cfg = SampleConfig::default();
        assert_eq!(
            interpolate_path("M2,3 A0,7 20 1 1 40,-9", &cfg),
            interpolate_path("M2,3 L40,-9", &cfg)
        );
    }

    #[test]
    fn all_points_are_finite() {
        let cfg = SampleConfig::default();
        let data = "M1e308,1e308 L-1e308,-1e308 C 0 0 1e308 1 2 2 a1e-300 1e-300 0 1 1 5 5 \
                    Q 1 1e308 3 3 z";
        let values = interpolate_path(data, &cfg);
        assert!(values.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn close_path_returns_to_the_last_move_to() {
        let cfg = SampleConfig::new(0.0, 0.25, 1.0).unwrap();
        let values = interpolate_path("M1,1 L5,1 Z M10,10 L12,10 z", &cfg);
        assert_eq!(values, vec![5.0, 1.0, 1.0, 1.0, 12.0, 10.0, 10.0, 10.0]);
    }

    #[test]
    fn implicit_number_separators() {
        let cfg = SampleConfig::new(0.0, 0.25, 1.0).unwrap();
        assert_eq!(interpolate_path("M0,0L1.5.5", &cfg), vec![1.5, 0.5]);
    }
}
