// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::number::NumberScanner;

/// A path command kind.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    SmoothCurveTo,
    Quadratic,
    SmoothQuadratic,
    EllipticalArc,
    ClosePath,
    /// A letter outside of the path command alphabet.
    Unrecognized(char),
}

impl CommandKind {
    /// Maps a command letter to its kind and absolute flag.
    ///
    /// Upper case letters are absolute, lower case are relative.
    pub fn from_letter(letter: char) -> (CommandKind, bool) {
        let kind = match letter.to_ascii_lowercase() {
            'm' => CommandKind::MoveTo,
            'l' => CommandKind::LineTo,
            'h' => CommandKind::HorizontalLineTo,
            'v' => CommandKind::VerticalLineTo,
            'c' => CommandKind::CurveTo,
            's' => CommandKind::SmoothCurveTo,
            'q' => CommandKind::Quadratic,
            't' => CommandKind::SmoothQuadratic,
            'a' => CommandKind::EllipticalArc,
            'z' => CommandKind::ClosePath,
            _ => CommandKind::Unrecognized(letter),
        };

        (kind, letter.is_ascii_uppercase())
    }

    /// Returns the number of arguments in one argument group.
    pub fn arg_count(self) -> usize {
        match self {
            CommandKind::MoveTo => 2,
            CommandKind::LineTo => 2,
            CommandKind::HorizontalLineTo => 1,
            CommandKind::VerticalLineTo => 1,
            CommandKind::CurveTo => 6,
            CommandKind::SmoothCurveTo => 4,
            CommandKind::Quadratic => 4,
            CommandKind::SmoothQuadratic => 2,
            CommandKind::EllipticalArc => 7,
            CommandKind::ClosePath => 0,
            CommandKind::Unrecognized(_) => 0,
        }
    }
}

/// A command letter with its unparsed argument text.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RawCommand<'a> {
    pub letter: char,
    pub args: &'a str,
}

impl RawCommand<'_> {
    /// Parses the argument text.
    ///
    /// Arc flags are read as single characters, so `a1 1 0 00 1 1`
    /// yields `[1, 1, 0, 0, 0, 1, 1]`.
    pub fn parse(&self) -> Command {
        let (kind, absolute) = CommandKind::from_letter(self.letter);

        let mut args = Vec::new();
        let mut s = NumberScanner::new(self.args);
        match kind {
            CommandKind::EllipticalArc => loop {
                let n = match args.len() % 7 {
                    3 | 4 => s.next_flag(),
                    _ => s.next(),
                };

                match n {
                    Some(n) => args.push(n),
                    None => break,
                }
            },
            CommandKind::Unrecognized(_) => {}
            _ => args.extend(s),
        }

        Command { kind, absolute, args }
    }
}

/// A parsed path command.
///
/// `args` may hold several argument groups, which are implicit
/// repetitions of the same command.
#[derive(Clone, PartialEq, Debug)]
pub struct Command {
    pub kind: CommandKind,
    pub absolute: bool,
    pub args: Vec<f64>,
}

impl Command {
    /// Returns complete argument groups. Trailing incomplete groups are ignored.
    pub fn groups(&self) -> std::slice::ChunksExact<'_, f64> {
        // `chunks_exact` panics on zero.
        self.args.chunks_exact(self.kind.arg_count().max(1))
    }
}

/// A lazy path data tokenizer.
///
/// Yields a command letter followed by its run of numeric text.
/// Characters that are neither letters nor a part of a numeric run are skipped.
#[derive(Clone, Debug)]
pub struct PathCommands<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> PathCommands<'a> {
    #[inline]
    pub fn new(text: &'a str) -> Self {
        PathCommands { text, pos: 0 }
    }
}

#[inline]
fn is_argument_char(c: char) -> bool {
    match c {
        '0'..='9' | '+' | '-' | '.' | ',' | 'e' | 'E' => true,
        _ => c.is_ascii_whitespace(),
    }
}

impl<'a> Iterator for PathCommands<'a> {
    type Item = RawCommand<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = &self.text[self.pos..];
            let letter = rest.chars().next()?;
            self.pos += letter.len_utf8();

            // Arguments without a command letter are skipped.
            if !letter.is_alphabetic() || letter == 'e' || letter == 'E' {
                continue;
            }

            let rest = &self.text[self.pos..];
            let len = rest.find(|c: char| !is_argument_char(c)).unwrap_or(rest.len());
            self.pos += len;

            return Some(RawCommand { letter, args: &rest[..len] });
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn letters(text: &str) -> Vec<(char, &str)> {
        PathCommands::new(text).map(|c| (c.letter, c.args)).collect()
    }

    #[test]
    fn splits_commands() {
        assert_eq!(
            letters("M10,20L30 40z"),
            vec![('M', "10,20"), ('L', "30 40"), ('z', "")]
        );
    }

    #[test]
    fn is_restartable() {
        let d = "M0 0 H 5";
        assert_eq!(letters(d), letters(d));
    }

    #[test]
    fn skips_leading_numbers_and_junk() {
        assert_eq!(letters("5 5 # M1 1"), vec![('M', "1 1")]);
    }

    #[test]
    fn keeps_unknown_letters() {
        let cmds: Vec<_> = PathCommands::new("M1 1 X 2 2 L3 3").map(|c| c.parse()).collect();
        assert_eq!(cmds.len(), 3);
        assert_eq!(cmds[1].kind, CommandKind::Unrecognized('X'));
        assert!(cmds[1].args.is_empty());
        assert_eq!(cmds[2].args, vec![3.0, 3.0]);
    }

    #[test]
    fn exponent_stays_in_arguments() {
        let cmd = PathCommands::new("l1e1 2E-1").next().unwrap().parse();
        assert_eq!(cmd.kind, CommandKind::LineTo);
        assert!(!cmd.absolute);
        assert_eq!(cmd.args, vec![10.0, 0.2]);
    }

    #[test]
    fn implicit_number_separators() {
        let cmd = PathCommands::new("L1.5.5-2").next().unwrap().parse();
        assert_eq!(cmd.args, vec![1.5, 0.5, -2.0]);
    }

    #[test]
    fn compact_arc_flags() {
        let cmd = PathCommands::new("a1 1 0 00 1 1").next().unwrap().parse();
        assert_eq!(cmd.kind, CommandKind::EllipticalArc);
        assert_eq!(cmd.args, vec![1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn groups_drop_incomplete_tail() {
        let cmd = PathCommands::new("L1 2 3 4 5").next().unwrap().parse();
        let groups: Vec<_> = cmd.groups().collect();
        assert_eq!(groups, vec![&[1.0, 2.0][..], &[3.0, 4.0][..]]);
    }
}
