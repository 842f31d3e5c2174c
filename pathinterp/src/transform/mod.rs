// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use kurbo::Point;
use svgtypes::FuzzyZero;

mod parser;
mod stack;

pub use self::stack::{TransformEntry, TransformStack};

/// A 2D affine transform.
///
/// Represents the matrix
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Transform {
    #[inline]
    fn default() -> Transform {
        Transform::identity()
    }
}

impl Transform {
    /// Constructs a new transform.
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Transform { a, b, c, d, e, f }
    }

    #[inline]
    pub fn identity() -> Self {
        Transform::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Constructs a new translate transform.
    #[inline]
    pub fn new_translate(tx: f64, ty: f64) -> Self {
        Transform::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Constructs a new scale transform.
    #[inline]
    pub fn new_scale(sx: f64, sy: f64) -> Self {
        Transform::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Constructs a new rotate transform. The angle is in degrees.
    #[inline]
    pub fn new_rotate(angle: f64) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        Transform::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Constructs a rotation around `cx`, `cy`.
    pub fn new_rotate_at(angle: f64, cx: f64, cy: f64) -> Self {
        let mut ts = Transform::new_translate(cx, cy);
        ts.compose(&Transform::new_rotate(angle));
        ts.compose(&Transform::new_translate(-cx, -cy));
        ts
    }

    /// Constructs a rotation that turns the x axis toward `x`, `y`.
    #[inline]
    pub fn new_rotate_from_vector(x: f64, y: f64) -> Self {
        Transform::new_rotate(y.atan2(x).to_degrees())
    }

    /// Constructs a new skew transform along both axes. Angles are in degrees.
    #[inline]
    pub fn new_skew(angle_x: f64, angle_y: f64) -> Self {
        let sx = angle_x.to_radians().tan();
        let sy = angle_y.to_radians().tan();
        Transform::new(1.0, sy, sx, 1.0, 0.0, 0.0)
    }

    /// Constructs a new skew transform along the x axis.
    #[inline]
    pub fn new_skew_x(angle: f64) -> Self {
        Transform::new_skew(angle, 0.0)
    }

    /// Constructs a new skew transform along the y axis.
    #[inline]
    pub fn new_skew_y(angle: f64) -> Self {
        Transform::new_skew(0.0, angle)
    }

    /// Right-multiplies `other` onto this transform.
    ///
    /// The result maps a point through `other` first and then through `self`,
    /// so a parent composes its child's transform.
    #[inline]
    pub fn compose(&mut self, other: &Transform) {
        let ts = multiply(self, other);
        *self = ts;
    }

    /// Mirrors along the x axis.
    #[inline]
    pub fn flip_x(&mut self) {
        self.compose(&Transform::new_scale(-1.0, 1.0));
    }

    /// Mirrors along the y axis.
    #[inline]
    pub fn flip_y(&mut self) {
        self.compose(&Transform::new_scale(1.0, -1.0));
    }

    /// Checks that transform is identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.is_identity_or_translation() && self.e == 0.0 && self.f == 0.0
    }

    /// Checks that transform contains only a translate part.
    #[inline]
    pub fn is_identity_or_translation(&self) -> bool {
        self.a == 1.0 && self.b == 0.0 && self.c == 0.0 && self.d == 1.0
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Returns `false` when the determinant is zero or not finite.
    #[inline]
    pub fn is_invertible(&self) -> bool {
        let det = self.determinant();
        det.is_finite() && !det.is_fuzzy_zero()
    }

    /// Returns the length of the transformed x basis vector.
    #[inline]
    pub fn x_scale(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Returns the length of the transformed y basis vector.
    #[inline]
    pub fn y_scale(&self) -> f64 {
        self.c.hypot(self.d)
    }

    /// Returns the inverse transform.
    ///
    /// Returns `None` when the transform is not invertible.
    pub fn invert(&self) -> Option<Transform> {
        if self.is_identity_or_translation() {
            return Some(Transform::new_translate(-self.e, -self.f));
        }

        if !self.is_invertible() {
            return None;
        }

        let det = self.determinant();
        Some(Transform::new(
            self.d / det,
            -self.b / det,
            -self.c / det,
            self.a / det,
            (self.c * self.f - self.d * self.e) / det,
            (self.b * self.e - self.a * self.f) / det,
        ))
    }

    /// Applies the transform to a coordinate.
    #[inline]
    pub fn map(&self, x: f64, y: f64) -> Point {
        Point::new(
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Applies the transform to a coordinate in place.
    #[inline]
    pub fn apply_to(&self, x: &mut f64, y: &mut f64) {
        let p = self.map(*x, *y);
        *x = p.x;
        *y = p.y;
    }

    /// Splits the transform into scale, rotation, a 2x2 remainder and translation.
    ///
    /// Returns `None` when a basis vector has a zero length.
    pub fn decompose(&self) -> Option<Decomposition> {
        let mut sx = self.x_scale();
        let mut sy = self.y_scale();
        if sx.is_fuzzy_zero() || sy.is_fuzzy_zero() {
            return None;
        }

        // A flip is attributed to the smaller axis.
        if self.determinant() < 0.0 {
            if self.a < self.d {
                sx = -sx;
            } else {
                sy = -sy;
            }
        }

        let mut m = *self;
        m.compose(&Transform::new_scale(1.0 / sx, 1.0 / sy));
        let angle = m.b.atan2(m.a);
        m.compose(&Transform::new_rotate(-angle.to_degrees()));

        Some(Decomposition {
            scale_x: sx,
            scale_y: sy,
            angle,
            remainder_a: m.a,
            remainder_b: m.b,
            remainder_c: m.c,
            remainder_d: m.d,
            translate_x: m.e,
            translate_y: m.f,
        })
    }
}

/// Parts of a transform, see [`Transform::decompose`].
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Decomposition {
    pub scale_x: f64,
    pub scale_y: f64,
    /// In radians.
    pub angle: f64,
    pub remainder_a: f64,
    pub remainder_b: f64,
    pub remainder_c: f64,
    pub remainder_d: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Decomposition {
    /// Builds the transform back.
    pub fn recompose(&self) -> Transform {
        let mut ts = Transform::new(
            self.remainder_a,
            self.remainder_b,
            self.remainder_c,
            self.remainder_d,
            self.translate_x,
            self.translate_y,
        );
        ts.compose(&Transform::new_rotate(self.angle.to_degrees()));
        ts.compose(&Transform::new_scale(self.scale_x, self.scale_y));
        ts
    }
}

#[inline]
fn multiply(ts1: &Transform, ts2: &Transform) -> Transform {
    Transform {
        a: ts1.a * ts2.a + ts1.c * ts2.b,
        b: ts1.b * ts2.a + ts1.d * ts2.b,
        c: ts1.a * ts2.c + ts1.c * ts2.d,
        d: ts1.b * ts2.c + ts1.d * ts2.d,
        e: ts1.a * ts2.e + ts1.c * ts2.f + ts1.e,
        f: ts1.b * ts2.e + ts1.d * ts2.f + ts1.f,
    }
}
