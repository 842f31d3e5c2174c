// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Elliptical arc to cubic Bézier conversion.
//!
//! Uses the endpoint to center parameterization conversion from
//! https://www.w3.org/TR/SVG/implnote.html#ArcConversionEndpointToCenter

use std::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Point, Vec2};

// `atan2` may be slightly off on some platforms, which would produce
// an extra segment for an exact quarter.
const MAX_SEGMENT_SWEEP: f64 = FRAC_PI_2 + 0.001;

/// A cubic segment of a converted arc.
///
/// Starts at the end of the previous segment, or at the arc start.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ArcSegment {
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

#[inline]
fn rotate(v: Vec2, angle: f64) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Converts an SVG arc into a list of cubic segments.
///
/// `x_axis_rotation` is in degrees. Negative radii are used by magnitude
/// and radii too small to span the chord are scaled up.
///
/// End points are mapped into unit circle space by rotating by `-x_axis_rotation`
/// and then dividing by the radii. Control points are mapped back by multiplying
/// by the radii first and rotating second. Rotating before scaling on the way
/// back would drop `x_axis_rotation` for ellipses with unequal radii.
///
/// Returns an empty list when end points are identical or a radius is zero.
/// If the tangent factor of a segment is not finite, the segments
/// computed so far are returned.
pub fn arc_to_cubics(
    from: Point,
    to: Point,
    rx: f64,
    ry: f64,
    x_axis_rotation: f64,
    large_arc: bool,
    sweep: bool,
) -> Vec<ArcSegment> {
    let mut rx = rx.abs();
    let mut ry = ry.abs();
    if from == to || rx == 0.0 || ry == 0.0 {
        return Vec::new();
    }

    let angle = x_axis_rotation.to_radians();

    // Half of the chord in the ellipse frame.
    let mid = rotate((from - to) * 0.5, -angle);

    let radii_scale = (mid.x * mid.x) / (rx * rx) + (mid.y * mid.y) / (ry * ry);
    if radii_scale > 1.0 {
        let s = radii_scale.sqrt();
        rx *= s;
        ry *= s;
    }

    // Map both end points onto the unit circle space.
    let to_unit = |p: Point| {
        let v = rotate(p.to_vec2(), -angle);
        Vec2::new(v.x / rx, v.y / ry)
    };
    let from_unit = |v: Vec2| {
        let v = rotate(Vec2::new(v.x * rx, v.y * ry), angle);
        v.to_point()
    };

    let p1 = to_unit(from);
    let p2 = to_unit(to);

    let delta = p2 - p1;
    let d = delta.hypot2();
    let mut scale_factor = (1.0 / d - 0.25).max(0.0).sqrt();
    if sweep == large_arc {
        scale_factor = -scale_factor;
    }

    let delta = delta * scale_factor;
    let center = (p1 + p2) * 0.5 + Vec2::new(-delta.y, delta.x);

    let theta1 = (p1 - center).atan2();
    let theta2 = (p2 - center).atan2();

    let mut theta_arc = theta2 - theta1;
    if theta_arc < 0.0 && sweep {
        theta_arc += 2.0 * PI;
    } else if theta_arc > 0.0 && !sweep {
        theta_arc -= 2.0 * PI;
    }

    let count = (theta_arc / MAX_SEGMENT_SWEEP).abs().ceil() as usize;
    let mut segments = Vec::with_capacity(count);
    for i in 0..count {
        let start_theta = theta1 + i as f64 * theta_arc / count as f64;
        let end_theta = theta1 + (i + 1) as f64 * theta_arc / count as f64;

        let t = (4.0 / 3.0) * (0.25 * (end_theta - start_theta)).tan();
        if !t.is_finite() {
            log::debug!("Arc tangent factor is not finite. Stopped after {} segments.", i);
            return segments;
        }

        let (sin_start, cos_start) = start_theta.sin_cos();
        let (sin_end, cos_end) = end_theta.sin_cos();

        let ctrl1 = center + Vec2::new(cos_start - t * sin_start, sin_start + t * cos_start);
        let target = center + Vec2::new(cos_end, sin_end);
        let ctrl2 = target + Vec2::new(t * sin_end, -t * cos_end);

        segments.push(ArcSegment {
            ctrl1: from_unit(ctrl1),
            ctrl2: from_unit(ctrl2),
            to: from_unit(target),
        });
    }

    segments
}


#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point, b: Point) {
        assert!((a - b).hypot() < 1e-9, "{:?} != {:?}", a, b);
    }

    #[test]
    fn degenerate_input() {
        let p = Point::new(1.0, 1.0);
        assert!(arc_to_cubics(p, p, 1.0, 1.0, 0.0, false, false).is_empty());
        assert!(arc_to_cubics(p, Point::new(2.0, 2.0), 0.0, 1.0, 0.0, false, false).is_empty());
    }

    #[test]
    fn quarter_circle() {
        let segs = arc_to_cubics(
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            1.0,
            1.0,
            0.0,
            false,
            true,
        );

        assert_eq!(segs.len(), 1);
        let k = 4.0 / 3.0 * (PI / 8.0).tan();
        assert_close(segs[0].ctrl1, Point::new(1.0, k));
        assert_close(segs[0].ctrl2, Point::new(k, 1.0));
        assert_close(segs[0].to, Point::new(0.0, 1.0));
    }

    #[test]
    fn flags_select_the_arc() {
        let from = Point::new(0.0, 0.0);
        let to = Point::new(10.0, 0.0);
        // Half circle either way.
        assert_eq!(arc_to_cubics(from, to, 5.0, 5.0, 0.0, false, true).len(), 2);
        // Radius 10: the small arc is 60 degrees, the large one 300.
        assert_eq!(arc_to_cubics(from, to, 10.0, 10.0, 0.0, false, true).len(), 1);
        assert_eq!(arc_to_cubics(from, to, 10.0, 10.0, 0.0, true, true).len(), 4);
    }

    #[test]
    fn small_radii_are_scaled_up() {
        let segs = arc_to_cubics(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            1.0,
            -1.0,
            0.0,
            false,
            false,
        );

        assert_eq!(segs.len(), 2);
        // A half circle of radius 5 around 5,0, walked with decreasing angle.
        assert_close(segs[0].to, Point::new(5.0, 5.0));
        assert_close(segs[1].to, Point::new(10.0, 0.0));
    }

    #[test]
    fn rotated_ellipse_points_stay_on_ellipse() {
        // rx is along the y axis after a 90 degree rotation.
        let segs = arc_to_cubics(
            Point::new(0.0, 0.0),
            Point::new(0.0, 4.0),
            2.0,
            1.0,
            90.0,
            false,
            true,
        );

        assert_eq!(segs.len(), 2);
        let center = Point::new(0.0, 2.0);
        for seg in &segs {
            let v = seg.to - center;
            let on_ellipse = (v.y / 2.0).powi(2) + (v.x / 1.0).powi(2);
            assert!((on_ellipse - 1.0).abs() < 1e-9);
        }
        assert_close(segs[1].to, Point::new(0.0, 4.0));
    }

    #[test]
    fn rotation_bends_unequal_radii() {
        // A 45 degree ellipse: the midpoint of the small arc leaves the
        // axis-aligned position it would have without rotation.
        let from = Point::new(0.0, 0.0);
        let to = Point::new(4.0, 0.0);
        let plain = arc_to_cubics(from, to, 4.0, 2.0, 0.0, false, true);
        let rotated = arc_to_cubics(from, to, 4.0, 2.0, 45.0, false, true);

        assert_close(plain.last().unwrap().to, to);
        assert_close(rotated.last().unwrap().to, to);
        assert!((plain[0].ctrl1 - rotated[0].ctrl1).hypot() > 1e-3);

        // Every joint lies on the rotated ellipse around the recovered center.
        let (sin, cos) = 45f64.to_radians().sin_cos();
        let on_ellipse = |p: Point, c: Point| {
            let v = p - c;
            let x = v.x * cos + v.y * sin;
            let y = -v.x * sin + v.y * cos;
            (x / 4.0).powi(2) + (y / 2.0).powi(2)
        };
        // Center of the sweep=true small arc, solved for this chord.
        let center = solve_center(from, to, 4.0, 2.0, 45.0);
        for seg in &rotated {
            assert!((on_ellipse(seg.to, center) - 1.0).abs() < 1e-9);
        }
    }

    fn solve_center(from: Point, to: Point, rx: f64, ry: f64, angle: f64) -> Point {
        // Both end points are at unit distance in the ellipse frame.
        let (sin, cos) = angle.to_radians().sin_cos();
        let frame = |p: Point| Vec2::new((p.x * cos + p.y * sin) / rx, (-p.x * sin + p.y * cos) / ry);
        let p1 = frame(from);
        let p2 = frame(to);
        let mid = (p1 + p2) * 0.5;
        let half = (p2 - p1) * 0.5;
        let h = (1.0 - half.hypot2()).sqrt() / half.hypot();
        let c = mid + Vec2::new(-half.y, half.x) * h;
        let back = Vec2::new(c.x * rx, c.y * ry);
        Point::new(back.x * cos - back.y * sin, back.x * sin + back.y * cos)
    }
}
