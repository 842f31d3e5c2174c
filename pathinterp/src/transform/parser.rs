// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::str::FromStr;

use super::Transform;
use crate::Error;

impl From<svgtypes::Transform> for Transform {
    #[inline]
    fn from(ts: svgtypes::Transform) -> Self {
        Transform::new(ts.a, ts.b, ts.c, ts.d, ts.e, ts.f)
    }
}

impl FromStr for Transform {
    type Err = Error;

    /// Parses an SVG `transform` attribute value.
    ///
    /// Functions are composed from left to right, so the rightmost
    /// one is applied to a point first. An empty list is an identity.
    fn from_str(text: &str) -> Result<Self, Error> {
        match svgtypes::Transform::from_str(text) {
            Ok(ts) => Ok(ts.into()),
            Err(e) => {
                log::debug!("Failed to parse transform '{}': {}.", text, e);
                Err(Error::InvalidTransform(text.to_string()))
            }
        }
    }
}
