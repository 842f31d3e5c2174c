// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// A character-level number tokenizer.
///
/// Numbers may be separated by whitespace or commas, but a sign or a second
/// decimal point also starts a new number: `1.5.5` is `1.5` followed by `0.5`,
/// `10-5` is `10` followed by `-5`.
#[derive(Clone, Debug)]
pub(crate) struct NumberScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> NumberScanner<'a> {
    #[inline]
    pub fn new(text: &'a str) -> Self {
        NumberScanner { text, pos: 0 }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    #[inline]
    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.text.as_bytes().get(self.pos + offset).copied()
    }

    fn skip_separators(&mut self) {
        while let Some(c) = self.peek() {
            if c == b',' || c.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.pos += 1;
            } else {
                break;
            }
        }

        self.pos - start
    }

    /// Reads an arc flag: a single `0` or `1` that may be glued to
    /// the following token.
    ///
    /// Falls back to a regular number for anything else.
    pub fn next_flag(&mut self) -> Option<f64> {
        self.skip_separators();
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                Some(0.0)
            }
            Some(b'1') => {
                self.pos += 1;
                Some(1.0)
            }
            _ => self.next(),
        }
    }

    /// Scans one number starting at the current position.
    ///
    /// Returns the byte range of the token, or `None` when the current
    /// character cannot start a number. In that case the character
    /// is consumed.
    fn scan_token(&mut self) -> Option<(usize, usize)> {
        let start = self.pos;

        if let Some(b'+') | Some(b'-') = self.peek() {
            self.pos += 1;
        }

        let mut digits = self.skip_digits();

        if self.peek() == Some(b'.') {
            self.pos += 1;
            digits += self.skip_digits();
        }

        if digits == 0 {
            // A lone sign, dot or a foreign character.
            self.pos = start + 1;
            return None;
        }

        // The exponent is consumed only when digits follow.
        if let Some(b'e') | Some(b'E') = self.peek() {
            let sign = match self.peek_at(1) {
                Some(b'+') | Some(b'-') => 1,
                _ => 0,
            };

            if self.peek_at(1 + sign).map_or(false, |c| c.is_ascii_digit()) {
                self.pos += 1 + sign;
                self.skip_digits();
            }
        }

        Some((start, self.pos))
    }
}

impl Iterator for NumberScanner<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.skip_separators();
            if self.pos >= self.text.len() {
                return None;
            }

            let (start, end) = match self.scan_token() {
                Some(range) => range,
                None => continue,
            };

            let token = &self.text[start..end];
            match token.parse::<f64>() {
                Ok(n) if n.is_finite() => return Some(n),
                Ok(_) => log::warn!("Number '{}' is out of range. Skipped.", token),
                Err(_) => log::warn!("Failed to parse number '{}'. Skipped.", token),
            }
        }
    }
}
