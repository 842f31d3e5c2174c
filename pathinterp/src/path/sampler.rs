// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use kurbo::{CubicBez, Line, Point, QuadBez};

use super::arc;
use crate::SampleConfig;

// Accumulated `t` overshoots 1.0 by a few ulps with small steps.
const T_END: f64 = 1.0000000000000007;

/// Bernstein form evaluation of a segment.
pub(crate) trait CurveEval {
    fn first(&self) -> Point;
    fn eval_at(&self, t: f64) -> Point;
}

#[inline]
fn calc_linear(t: f64, p1: f64, p2: f64) -> f64 {
    p1 + t * (p2 - p1)
}

#[inline]
fn calc_quadratic(t: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    let mt = 1.0 - t;
    (mt * mt) * p1 + 2.0 * mt * t * p2 + (t * t) * p3
}

#[inline]
fn calc_cubic(t: f64, p1: f64, p2: f64, p3: f64, p4: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    p1 * mt.powi(3) + p2 * 3.0 * (mt * mt) * t + p3 * 3.0 * mt * t2 + p4 * t3
}

impl CurveEval for Line {
    #[inline]
    fn first(&self) -> Point {
        self.p0
    }

    fn eval_at(&self, t: f64) -> Point {
        Point::new(
            calc_linear(t, self.p0.x, self.p1.x),
            calc_linear(t, self.p0.y, self.p1.y),
        )
    }
}

impl CurveEval for QuadBez {
    #[inline]
    fn first(&self) -> Point {
        self.p0
    }

    fn eval_at(&self, t: f64) -> Point {
        Point::new(
            calc_quadratic(t, self.p0.x, self.p1.x, self.p2.x),
            calc_quadratic(t, self.p0.y, self.p1.y, self.p2.y),
        )
    }
}

impl CurveEval for CubicBez {
    #[inline]
    fn first(&self) -> Point {
        self.p0
    }

    fn eval_at(&self, t: f64) -> Point {
        Point::new(
            calc_cubic(t, self.p0.x, self.p1.x, self.p2.x, self.p3.x),
            calc_cubic(t, self.p0.y, self.p1.y, self.p2.y, self.p3.y),
        )
    }
}

/// Walks segments at a fixed `t` step and collects distance-filtered,
/// grid-snapped points.
///
/// The distance is measured from the last *emitted* point, which starts
/// at the segment start. So the segment start is never emitted and the
/// segment end is emitted only when it passes the filter by itself.
#[allow(missing_debug_implementations)]
pub struct Sampler<'a> {
    cfg: &'a SampleConfig,
    points: Vec<Point>,
}

impl<'a> Sampler<'a> {
    #[inline]
    pub fn new(cfg: &'a SampleConfig) -> Self {
        Sampler { cfg, points: Vec::new() }
    }

    /// Samples a straight line.
    pub fn line(&mut self, from: Point, to: Point) {
        self.sample(&Line::new(from, to));
    }

    /// Samples a quadratic Bézier curve.
    pub fn quad(&mut self, from: Point, ctrl: Point, to: Point) {
        self.sample(&QuadBez::new(from, ctrl, to));
    }

    /// Samples a cubic Bézier curve.
    pub fn cubic(&mut self, from: Point, ctrl1: Point, ctrl2: Point, to: Point) {
        self.sample(&CubicBez::new(from, ctrl1, ctrl2, to));
    }

    /// Samples an elliptical arc.
    ///
    /// Identical end points omit the arc. A zero radius turns it into a line.
    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        &mut self,
        from: Point,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    ) {
        if from == to {
            return;
        }

        if rx == 0.0 || ry == 0.0 {
            self.line(from, to);
            return;
        }

        let mut prev = from;
        for seg in arc::arc_to_cubics(from, to, rx, ry, x_axis_rotation, large_arc, sweep) {
            self.cubic(prev, seg.ctrl1, seg.ctrl2, seg.to);
            prev = seg.to;
        }
    }

    fn sample<C: CurveEval>(&mut self, curve: &C) {
        let min_distance = self.cfg.min_distance();
        let step = self.cfg.sample_frequency();

        let mut last = curve.first();
        let mut t = 0.0;
        while t <= T_END {
            let p = curve.eval_at(t);
            let dist = p.distance(last);
            if dist.abs() > min_distance && p.x.is_finite() && p.y.is_finite() {
                self.points.push(Point::new(self.cfg.snap(p.x), self.cfg.snap(p.y)));
                last = p;
            }

            t += step;
        }
    }

    /// Returns collected points.
    #[inline]
    pub fn finish(self) -> Vec<Point> {
        self.points
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(min_distance: f64, round_to_nearest: f64, sample_frequency: f64) -> SampleConfig {
        SampleConfig::new(min_distance, round_to_nearest, sample_frequency).unwrap()
    }

    #[test]
    fn line_follows_distance_rule() {
        let cfg = cfg(0.5, 0.25, 0.5);
        let mut s = Sampler::new(&cfg);
        s.line(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        // t=0 is at distance 0 from the start and is dropped.
        assert_eq!(s.finish(), vec![Point::new(5.0, 0.0), Point::new(10.0, 0.0)]);
    }

    #[test]
    fn end_point_can_be_dropped() {
        // Samples at 0.4 and 0.8 pass; the end at 1.0 is only 0.2 away.
        let cfg = cfg(0.3, 0.5, 0.2);
        let mut s = Sampler::new(&cfg);
        s.line(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let points = s.finish();
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.x < 1.0));
    }

    #[test]
    fn snaps_toward_zero() {
        let cfg = cfg(0.0, 1.0, 1.0);
        let mut s = Sampler::new(&cfg);
        s.line(Point::new(0.0, 0.0), Point::new(-2.5, 3.5));
        assert_eq!(s.finish(), vec![Point::new(-2.0, 3.0)]);
    }

    #[test]
    fn quad_and_cubic_midpoints() {
        let cfg = cfg(0.0, 0.25, 0.5);
        let mut s = Sampler::new(&cfg);
        s.quad(Point::new(0.0, 0.0), Point::new(4.0, 8.0), Point::new(8.0, 0.0));
        assert_eq!(s.finish(), vec![Point::new(4.0, 4.0), Point::new(8.0, 0.0)]);

        let mut s = Sampler::new(&cfg);
        s.cubic(
            Point::new(0.0, 0.0),
            Point::new(0.0, 8.0),
            Point::new(8.0, 8.0),
            Point::new(8.0, 0.0),
        );
        assert_eq!(s.finish(), vec![Point::new(4.0, 6.0), Point::new(8.0, 0.0)]);
    }

    #[test]
    fn identical_arc_end_points_are_omitted() {
        let cfg = SampleConfig::default();
        let mut s = Sampler::new(&cfg);
        s.arc(Point::new(3.0, 3.0), 5.0, 5.0, 0.0, false, true, Point::new(3.0, 3.0));
        assert!(s.finish().is_empty());
    }

    #[test]
    fn zero_radius_arc_is_a_line() {
        let cfg = cfg(0.5, 0.25, 0.01);
        let from = Point::new(1.0, 2.0);
        let to = Point::new(21.0, -7.0);

        let mut arc = Sampler::new(&cfg);
        arc.arc(from, 0.0, 10.0, 30.0, true, false, to);

        let mut line = Sampler::new(&cfg);
        line.line(from, to);

        assert_eq!(arc.finish(), line.finish());
    }

    #[test]
    fn dense_sampling_keeps_points_finite_and_spaced() {
        let cfg = SampleConfig::default();
        let mut s = Sampler::new(&cfg);
        s.arc(Point::new(0.0, 0.0), 50.0, 25.0, 15.0, true, true, Point::new(80.0, 10.0));
        let points = s.finish();
        assert!(points.len() > 10);
        assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
}
