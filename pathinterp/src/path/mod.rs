// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

mod arc;
mod parser;
mod pathdata;
mod sampler;

pub use self::arc::{arc_to_cubics, ArcSegment};
pub use self::parser::{Command, CommandKind, PathCommands, RawCommand};
pub use self::pathdata::{LastControl, PathData, PathSegment, PathState};
pub use self::sampler::Sampler;
