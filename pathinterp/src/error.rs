// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// List of all errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// One of the sampling options is out of range.
    #[error("invalid option `{name}`: {reason}")]
    InvalidOption {
        name: &'static str,
        reason: String,
    },

    /// A `transform` attribute value could not be parsed.
    #[error("malformed transform list `{0}`")]
    InvalidTransform(String),

    /// An element was closed more times than it was opened.
    ///
    /// Indicates that the caller fed an unbalanced event stream.
    #[error("element `{0}` closed without a matching open")]
    UnbalancedElement(String),
}

impl Error {
    pub(crate) fn invalid_option(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidOption { name, reason: reason.into() }
    }
}
