// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use kurbo::Point;

use super::parser::{Command, CommandKind, PathCommands};
use super::sampler::Sampler;
use crate::{SampleConfig, Transform};

/// A path's absolute segment.
///
/// Unlike the SVG path data, contains only `M`, `L`, `C`, `Q`, `A` and `Z` segments.
/// Relative, horizontal, vertical and smooth commands are resolved into these.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PathSegment {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    Quadratic {
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    },
    ArcTo {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    ClosePath,
}

/// The last control point, kept for smooth commands.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum LastControl {
    /// Set after `C` and `S`.
    Cubic(Point),
    /// Set after `Q` and `T`.
    Quadratic(Point),
}

/// A per-path cursor.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PathState {
    /// Absolute end point of the last processed command.
    pub current: Point,
    /// Set by `MoveTo` only. `ClosePath` returns here.
    pub subpath_start: Point,
    /// `None` when the previous command cannot be continued smoothly.
    pub last_control: Option<LastControl>,
}

impl Default for PathState {
    fn default() -> Self {
        PathState {
            current: Point::ORIGIN,
            subpath_start: Point::ORIGIN,
            last_control: None,
        }
    }
}

impl PathState {
    /// Reflects `ctrl` about the current point.
    ///
    /// The reflection is the inverse of the translation from the current
    /// point to `ctrl`. Falls back to the current point when it cannot be inverted.
    fn reflect(&self, ctrl: Point) -> Point {
        let cur = self.current;
        Transform::new_translate(ctrl.x - cur.x, ctrl.y - cur.y)
            .invert()
            .map(|ts| ts.map(cur.x, cur.y))
            .unwrap_or(cur)
    }

    fn smooth_cubic_ctrl(&self) -> Point {
        match self.last_control {
            Some(LastControl::Cubic(ctrl)) => self.reflect(ctrl),
            _ => self.current,
        }
    }

    fn smooth_quad_ctrl(&self) -> Point {
        match self.last_control {
            Some(LastControl::Quadratic(ctrl)) => self.reflect(ctrl),
            _ => self.current,
        }
    }
}

/// An SVG path data container.
///
/// All segments are in absolute coordinates.
#[derive(Clone, Default, Debug)]
pub struct PathData(pub Vec<PathSegment>);

impl PathData {
    /// Creates a new path.
    #[inline]
    pub fn new() -> Self {
        PathData(Vec::new())
    }

    /// Parses path data.
    ///
    /// Parsing is permissive: unknown commands and incomplete argument
    /// groups are skipped.
    pub fn parse(text: &str) -> Self {
        let mut path = PathData::new();
        let mut state = PathState::default();
        for raw in PathCommands::new(text) {
            path.push_command(&raw.parse(), &mut state);
        }

        path
    }

    /// Resolves a command into absolute segments and advances the cursor.
    pub fn push_command(&mut self, cmd: &Command, state: &mut PathState) {
        match cmd.kind {
            CommandKind::Unrecognized(letter) => {
                log::debug!("Unknown path command '{}'. Skipped.", letter);
                return;
            }
            CommandKind::ClosePath => {
                self.push(PathSegment::ClosePath);
                state.current = state.subpath_start;
                state.last_control = None;
                return;
            }
            _ => {}
        }

        let groups = cmd.groups();
        if !groups.remainder().is_empty() {
            log::warn!(
                "Path command {:?} has {} trailing argument(s). Ignored.",
                cmd.kind,
                groups.remainder().len()
            );
        }

        for (i, g) in groups.enumerate() {
            let origin = if cmd.absolute { Point::ORIGIN } else { state.current };
            let resolve = |x: f64, y: f64| Point::new(origin.x + x, origin.y + y);

            match cmd.kind {
                CommandKind::MoveTo => {
                    let p = resolve(g[0], g[1]);
                    // Pairs after the first one are implicit line-to's.
                    if i == 0 {
                        self.push_move_to(p.x, p.y);
                        state.subpath_start = p;
                    } else {
                        self.push_line_to(p.x, p.y);
                    }
                    state.current = p;
                    state.last_control = None;
                }
                CommandKind::LineTo => {
                    let p = resolve(g[0], g[1]);
                    self.push_line_to(p.x, p.y);
                    state.current = p;
                    state.last_control = None;
                }
                CommandKind::HorizontalLineTo => {
                    let p = Point::new(resolve(g[0], 0.0).x, state.current.y);
                    self.push_line_to(p.x, p.y);
                    state.current = p;
                    state.last_control = None;
                }
                CommandKind::VerticalLineTo => {
                    let p = Point::new(state.current.x, resolve(0.0, g[0]).y);
                    self.push_line_to(p.x, p.y);
                    state.current = p;
                    state.last_control = None;
                }
                CommandKind::CurveTo => {
                    let c1 = resolve(g[0], g[1]);
                    let c2 = resolve(g[2], g[3]);
                    let p = resolve(g[4], g[5]);
                    self.push_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
                    state.current = p;
                    state.last_control = Some(LastControl::Cubic(c2));
                }
                CommandKind::SmoothCurveTo => {
                    let c1 = state.smooth_cubic_ctrl();
                    let c2 = resolve(g[0], g[1]);
                    let p = resolve(g[2], g[3]);
                    self.push_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
                    state.current = p;
                    state.last_control = Some(LastControl::Cubic(c2));
                }
                CommandKind::Quadratic => {
                    let c = resolve(g[0], g[1]);
                    let p = resolve(g[2], g[3]);
                    self.push_quad_to(c.x, c.y, p.x, p.y);
                    state.current = p;
                    state.last_control = Some(LastControl::Quadratic(c));
                }
                CommandKind::SmoothQuadratic => {
                    let c = state.smooth_quad_ctrl();
                    let p = resolve(g[0], g[1]);
                    self.push_quad_to(c.x, c.y, p.x, p.y);
                    state.current = p;
                    state.last_control = Some(LastControl::Quadratic(c));
                }
                CommandKind::EllipticalArc => {
                    let p = resolve(g[5], g[6]);
                    self.push_arc_to(g[0], g[1], g[2], g[3] != 0.0, g[4] != 0.0, p.x, p.y);
                    state.current = p;
                    state.last_control = None;
                }
                CommandKind::ClosePath | CommandKind::Unrecognized(_) => {}
            }
        }
    }

    /// Pushes a MoveTo segment to the path.
    #[inline]
    pub fn push_move_to(&mut self, x: f64, y: f64) {
        self.push(PathSegment::MoveTo { x, y });
    }

    /// Pushes a LineTo segment to the path.
    #[inline]
    pub fn push_line_to(&mut self, x: f64, y: f64) {
        self.push(PathSegment::LineTo { x, y });
    }

    /// Pushes a CurveTo segment to the path.
    #[inline]
    pub fn push_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.push(PathSegment::CurveTo { x1, y1, x2, y2, x, y });
    }

    /// Pushes a Quadratic segment to the path.
    #[inline]
    pub fn push_quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        self.push(PathSegment::Quadratic { x1, y1, x, y });
    }

    /// Pushes an ArcTo segment to the path.
    #[inline]
    pub fn push_arc_to(
        &mut self,
        rx: f64, ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64, y: f64,
    ) {
        self.push(PathSegment::ArcTo { rx, ry, x_axis_rotation, large_arc, sweep, x, y });
    }

    /// Samples the path into grid-snapped points.
    pub fn sample(&self, cfg: &SampleConfig) -> Vec<Point> {
        let mut sampler = Sampler::new(cfg);

        let mut prev = Point::ORIGIN;
        let mut start = Point::ORIGIN;
        for seg in self.iter() {
            match *seg {
                PathSegment::MoveTo { x, y } => {
                    prev = Point::new(x, y);
                    start = prev;
                }
                PathSegment::LineTo { x, y } => {
                    let p = Point::new(x, y);
                    sampler.line(prev, p);
                    prev = p;
                }
                PathSegment::CurveTo { x1, y1, x2, y2, x, y } => {
                    let p = Point::new(x, y);
                    sampler.cubic(prev, Point::new(x1, y1), Point::new(x2, y2), p);
                    prev = p;
                }
                PathSegment::Quadratic { x1, y1, x, y } => {
                    let p = Point::new(x, y);
                    sampler.quad(prev, Point::new(x1, y1), p);
                    prev = p;
                }
                PathSegment::ArcTo { rx, ry, x_axis_rotation, large_arc, sweep, x, y } => {
                    let p = Point::new(x, y);
                    sampler.arc(prev, rx, ry, x_axis_rotation, large_arc, sweep, p);
                    prev = p;
                }
                PathSegment::ClosePath => {
                    sampler.line(prev, start);
                    prev = start;
                }
            }
        }

        sampler.finish()
    }
}

impl std::ops::Deref for PathData {
    type Target = Vec<PathSegment>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for PathData {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
