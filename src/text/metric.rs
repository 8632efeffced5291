//! Measuring and slicing strings in linear offset units

use crate::models::OffsetUnit;

impl OffsetUnit {
    /// Length of `s` in this unit
    pub fn measure(self, s: &str) -> usize {
        match self {
            OffsetUnit::Utf16 => s.encode_utf16().count(),
            OffsetUnit::Char => s.chars().count(),
        }
    }

    /// Byte index of `offset` units into `s`
    ///
    /// Offsets past the end clamp to `s.len()`. An offset inside a character
    /// (the second half of a surrogate pair) snaps down to that character's
    /// start.
    pub fn byte_index(self, s: &str, offset: usize) -> usize {
        let mut units = 0;
        for (byte, ch) in s.char_indices() {
            let width = self.width(ch);
            if units + width > offset {
                return byte;
            }
            units += width;
        }
        s.len()
    }

    /// Units taken by a single character
    pub fn width(self, ch: char) -> usize {
        match self {
            OffsetUnit::Utf16 => ch.len_utf16(),
            OffsetUnit::Char => 1,
        }
    }

    /// `offset` moved back to the start of the character it falls inside
    pub fn floor_offset(self, s: &str, offset: usize) -> usize {
        self.offset_of_byte(s, self.byte_index(s, offset))
    }

    /// `offset` moved forward to the end of the character it falls inside
    pub fn ceil_offset(self, s: &str, offset: usize) -> usize {
        let byte = self.byte_index(s, offset);
        let floor = self.offset_of_byte(s, byte);
        if floor == offset {
            return offset;
        }
        s[byte..]
            .chars()
            .next()
            .map_or(floor, |ch| floor + self.width(ch))
    }

    /// Offset in this unit of byte index `byte` in `s`
    pub fn offset_of_byte(self, s: &str, byte: usize) -> usize {
        let byte = byte.min(s.len());
        self.measure(&s[..floor_char_boundary(s, byte)])
    }

    /// Split `s` at `offset` units
    pub fn split_at(self, s: &str, offset: usize) -> (&str, &str) {
        s.split_at(self.byte_index(s, offset))
    }
}

fn floor_char_boundary(s: &str, mut byte: usize) -> usize {
    while !s.is_char_boundary(byte) {
        byte -= 1;
    }
    byte
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_units() {
        // U+1F600 is one char, two UTF-16 code units
        let s = "a😀b";
        assert_eq!(OffsetUnit::Char.measure(s), 3);
        assert_eq!(OffsetUnit::Utf16.measure(s), 4);
        assert_eq!(OffsetUnit::Utf16.measure("é"), 1);
    }

    #[test]
    fn test_byte_index() {
        let s = "a😀b";
        assert_eq!(OffsetUnit::Char.byte_index(s, 0), 0);
        assert_eq!(OffsetUnit::Char.byte_index(s, 1), 1);
        assert_eq!(OffsetUnit::Char.byte_index(s, 2), 5);
        assert_eq!(OffsetUnit::Char.byte_index(s, 9), s.len());

        assert_eq!(OffsetUnit::Utf16.byte_index(s, 3), 5);
        // Inside the surrogate pair snaps to the emoji start
        assert_eq!(OffsetUnit::Utf16.byte_index(s, 2), 1);
    }

    #[test]
    fn test_offset_of_byte() {
        let s = "a😀b";
        assert_eq!(OffsetUnit::Utf16.offset_of_byte(s, 5), 3);
        assert_eq!(OffsetUnit::Char.offset_of_byte(s, 5), 2);
        assert_eq!(OffsetUnit::Char.offset_of_byte(s, 3), 1);
    }

    #[test]
    fn test_floor_and_ceil_inside_surrogate_pair() {
        let s = "a😀b";
        assert_eq!(OffsetUnit::Utf16.floor_offset(s, 2), 1);
        assert_eq!(OffsetUnit::Utf16.ceil_offset(s, 2), 3);
        // Offsets on a character boundary stay put
        assert_eq!(OffsetUnit::Utf16.floor_offset(s, 3), 3);
        assert_eq!(OffsetUnit::Utf16.ceil_offset(s, 1), 1);
        assert_eq!(OffsetUnit::Utf16.ceil_offset(s, 4), 4);
        assert_eq!(OffsetUnit::Char.ceil_offset(s, 2), 2);
    }

    #[test]
    fn test_split_at() {
        assert_eq!(OffsetUnit::Char.split_at("hello", 2), ("he", "llo"));
        assert_eq!(OffsetUnit::Char.split_at("hello", 0), ("", "hello"));
        assert_eq!(OffsetUnit::Char.split_at("hello", 5), ("hello", ""));
    }
}
