// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::HashMap;

use indexmap::IndexMap;

use super::Transform;
use crate::Error;

/// A `transform` attribute of an open element.
#[derive(Clone, PartialEq, Debug)]
pub struct TransformEntry {
    /// Unparsed attribute value.
    pub raw: String,
    /// `None` when `raw` is malformed.
    pub transform: Option<Transform>,
}

/// Tracks `transform` attributes of open elements.
///
/// Entries are keyed by the nesting depth among open elements with
/// the same name and by that name. An entry lives exactly from its
/// element open to its element close. Entries are kept in open order,
/// which is ancestor to descendant for a well-nested document.
#[derive(Clone, Default, Debug)]
pub struct TransformStack {
    depths: HashMap<String, usize>,
    entries: IndexMap<(usize, String), TransformEntry>,
}

impl TransformStack {
    #[inline]
    pub fn new() -> Self {
        TransformStack::default()
    }

    /// Registers an element open.
    pub fn open(&mut self, element: &str, transform: Option<&str>) {
        let depth = self.depths.entry(element.to_string()).or_insert(0);

        if let Some(raw) = transform {
            let parsed = match raw.parse::<Transform>() {
                Ok(ts) => Some(ts),
                Err(e) => {
                    log::warn!("{} on '{}'. It will be ignored.", e, element);
                    None
                }
            };

            self.entries.insert(
                (*depth, element.to_string()),
                TransformEntry { raw: raw.to_string(), transform: parsed },
            );
        }

        *depth += 1;
    }

    /// Registers an element close.
    ///
    /// Fails when `element` has no open counterpart.
    pub fn close(&mut self, element: &str) -> Result<(), Error> {
        let depth = match self.depths.get_mut(element) {
            Some(depth) if *depth > 0 => depth,
            _ => return Err(Error::UnbalancedElement(element.to_string())),
        };

        *depth -= 1;
        self.entries.shift_remove(&(*depth, element.to_string()));

        Ok(())
    }

    /// Returns the entry registered by an open element.
    #[inline]
    pub fn get(&self, depth: usize, element: &str) -> Option<&TransformEntry> {
        self.entries.get(&(depth, element.to_string()))
    }

    /// Returns active entries, outermost first.
    #[inline]
    pub fn entries(&self) -> indexmap::map::Iter<'_, (usize, String), TransformEntry> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Composes all active transforms from outermost to innermost.
    ///
    /// Returns `None` when no transform is active. Malformed entries
    /// are treated as identity.
    pub fn resolve(&self) -> Option<Transform> {
        if self.entries.is_empty() {
            return None;
        }

        let mut ts = Transform::identity();
        for entry in self.entries.values() {
            if let Some(ref local) = entry.transform {
                ts.compose(local);
            }
        }

        Some(ts)
    }
}
