// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use indexmap::map::Entry;
use indexmap::IndexMap;
use kurbo::Point;

use crate::{Error, Options, PathData, SampleConfig, TransformStack};

/// Sampled points of a document.
///
/// Each sequence is a flat `[x0, y0, x1, y1, ...]` list.
#[derive(Clone, PartialEq, Debug)]
pub enum PathSampleResult {
    /// All paths joined in document order.
    Joined(Vec<f64>),
    /// One sequence per path, in document order of the first occurrence of a key.
    Keyed(IndexMap<String, Vec<f64>>),
}

impl PathSampleResult {
    /// Returns a keyed sequence.
    ///
    /// Always `None` for a joined result.
    pub fn get(&self, key: &str) -> Option<&[f64]> {
        match self {
            PathSampleResult::Joined(_) => None,
            PathSampleResult::Keyed(paths) => paths.get(key).map(|v| v.as_slice()),
        }
    }

    /// Checks that the result has no points.
    pub fn is_empty(&self) -> bool {
        match self {
            PathSampleResult::Joined(values) => values.is_empty(),
            PathSampleResult::Keyed(paths) => paths.values().all(|v| v.is_empty()),
        }
    }

    fn sequences_mut(&mut self) -> Vec<&mut Vec<f64>> {
        match self {
            PathSampleResult::Joined(values) => vec![values],
            PathSampleResult::Keyed(paths) => paths.values_mut().collect(),
        }
    }

    /// Moves all points so that the minimum x and the minimum y become zero.
    pub fn trim(&mut self) {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        for values in self.sequences_mut() {
            for p in values.chunks_exact(2) {
                min_x = min_x.min(p[0]);
                min_y = min_y.min(p[1]);
            }
        }

        if !min_x.is_finite() || !min_y.is_finite() {
            return;
        }

        for values in self.sequences_mut() {
            for p in values.chunks_exact_mut(2) {
                p[0] -= min_x;
                p[1] -= min_y;
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathSampleResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PathSampleResult::Joined(values) => serializer.collect_seq(values),
            PathSampleResult::Keyed(paths) => {
                serializer.collect_map(paths.iter().map(|(k, v)| (k, v)))
            }
        }
    }
}

/// Converts an element event stream into sampled points.
///
/// Events must be fed in document order. A new instance
/// is required for every document.
#[derive(Debug)]
pub struct Interpolator {
    cfg: SampleConfig,
    trim: bool,
    transforms: TransformStack,
    result: PathSampleResult,
    generated_keys: usize,
}

impl Interpolator {
    /// Creates a new interpolator.
    ///
    /// Fails when sampling options are out of range.
    pub fn new(opt: &Options) -> Result<Self, Error> {
        let result = if opt.join_path_data {
            PathSampleResult::Joined(Vec::new())
        } else {
            PathSampleResult::Keyed(IndexMap::new())
        };

        Ok(Interpolator {
            cfg: opt.sample_config()?,
            trim: opt.trim,
            transforms: TransformStack::new(),
            result,
            generated_keys: 0,
        })
    }

    /// Handles an element open event.
    ///
    /// `attrs` are `(name, value)` pairs. Only `transform`, `d` and `id` are used.
    pub fn element_start(&mut self, name: &str, attrs: &[(&str, &str)]) {
        let attr = |key: &str| attrs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);

        // Registered before sampling, since a path's own transform applies to it.
        self.transforms.open(name, attr("transform"));

        if name != "path" {
            return;
        }

        let data = match attr("d") {
            Some(data) => data,
            None => {
                log::debug!("A 'path' element without 'd'. Skipped.");
                return;
            }
        };

        let values = self.sample_path(data);
        match self.result {
            PathSampleResult::Joined(ref mut all) => all.extend(values),
            PathSampleResult::Keyed(ref mut paths) => {
                let key = match attr("id") {
                    Some(id) => id.to_string(),
                    None => {
                        let key = format!("path_{}", self.generated_keys);
                        self.generated_keys += 1;
                        key
                    }
                };

                log::trace!("Path '{}' has {} points.", key, values.len() / 2);

                // An existing key keeps its position.
                match paths.entry(key) {
                    Entry::Occupied(mut e) => {
                        log::warn!("Duplicated path id '{}'. The previous one was replaced.", e.key());
                        e.insert(values);
                    }
                    Entry::Vacant(e) => {
                        e.insert(values);
                    }
                }
            }
        }
    }

    /// Handles an element close event.
    ///
    /// Fails when `name` was never opened.
    pub fn element_end(&mut self, name: &str) -> Result<(), Error> {
        self.transforms.close(name)
    }

    /// Returns the accumulated result, trimmed if requested.
    pub fn finish(mut self) -> PathSampleResult {
        if self.trim {
            self.result.trim();
        }

        self.result
    }

    fn sample_path(&self, data: &str) -> Vec<f64> {
        let mut points = PathData::parse(data).sample(&self.cfg);

        if let Some(ts) = self.transforms.resolve() {
            for p in &mut points {
                let mapped = ts.map(p.x, p.y);
                *p = Point::new(self.cfg.snap(mapped.x), self.cfg.snap(mapped.y));
            }
        }

        let mut values = Vec::with_capacity(points.len() * 2);
        for p in points {
            if p.x.is_finite() && p.y.is_finite() {
                values.push(p.x);
                values.push(p.y);
            }
        }

        values
    }
}
