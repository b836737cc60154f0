//! The 27-symbol cipher alphabet.
//!
//! Symbols are the uppercase letters `A`-`Z` plus the space character,
//! mapped to indices 0-26 (space is 26). Cipher arithmetic happens on
//! indices; the wire carries the printable characters.

/// Number of symbols in the alphabet. All cipher arithmetic is modulo this.
pub const ALPHABET_LEN: u8 = 27;

/// Index assigned to the space character.
pub const SPACE_INDEX: u8 = 26;

/// One character from the alphabet, stored as its index `0..27`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Build a symbol from its index. Returns `None` for indices >= 27.
    pub fn from_index(index: u8) -> Option<Self> {
        (index < ALPHABET_LEN).then_some(Self(index))
    }

    /// Build a symbol from its printable character.
    ///
    /// Only `A`-`Z` and the space character are in the alphabet; anything
    /// else returns `None`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A'..='Z' => Some(Self(c as u8 - b'A')),
            ' ' => Some(Self(SPACE_INDEX)),
            _ => None,
        }
    }

    /// The symbol's index in `0..27`.
    pub fn index(self) -> u8 {
        self.0
    }

    /// The printable character for this symbol.
    pub fn as_char(self) -> char {
        if self.0 == SPACE_INDEX { ' ' } else { char::from(b'A' + self.0) }
    }

    /// Shift this symbol forward by another, modulo the alphabet.
    ///
    /// The alphabet is closed under this operation, so the result is
    /// always a valid symbol.
    pub fn shift(self, by: Self) -> Self {
        Self((self.0 + by.0) % ALPHABET_LEN)
    }

    /// Reverse a [`Symbol::shift`] by the same amount.
    pub fn unshift(self, by: Self) -> Self {
        Self((self.0 + ALPHABET_LEN - by.0) % ALPHABET_LEN)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_expected_indices() {
        assert_eq!(Symbol::from_char('A').map(Symbol::index), Some(0));
        assert_eq!(Symbol::from_char('Z').map(Symbol::index), Some(25));
        assert_eq!(Symbol::from_char(' ').map(Symbol::index), Some(26));
    }

    #[test]
    fn out_of_alphabet_characters_rejected() {
        for c in ['a', '0', '\n', '[', '$', '-'] {
            assert_eq!(Symbol::from_char(c), None, "{c:?} must not parse");
        }
    }

    #[test]
    fn shift_unshift_are_inverses() {
        for p in 0..ALPHABET_LEN {
            for k in 0..ALPHABET_LEN {
                let p = Symbol::from_index(p).unwrap();
                let k = Symbol::from_index(k).unwrap();
                assert_eq!(p.shift(k).unshift(k), p);
            }
        }
    }

    #[test]
    fn shift_wraps_at_alphabet_boundary() {
        let z = Symbol::from_char('Z').unwrap();
        let space = Symbol::from_char(' ').unwrap();
        // 25 + 26 = 51 % 27 = 24 -> 'Y'
        assert_eq!(z.shift(space).as_char(), 'Y');
    }

    #[test]
    fn index_char_round_trip() {
        for index in 0..ALPHABET_LEN {
            let symbol = Symbol::from_index(index).unwrap();
            assert_eq!(Symbol::from_char(symbol.as_char()), Some(symbol));
        }
        assert_eq!(Symbol::from_index(27), None);
    }
}
