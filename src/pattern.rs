use core::{fmt, iter};

/// A run of alternating bar and space widths, in modules. Widths are packed
/// one per nibble, the first width in the most significant nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    widths: u32,
    len: u8,
}

impl Pattern {
    /// Builds a pattern from its decimal spelling, e.g. `211214` for the
    /// Start B symbol. Every digit must be between 1 and 9.
    pub const fn from_digits(mut digits: u32) -> Self {
        let mut widths = 0;
        let mut len = 0;
        while digits > 0 {
            let d = digits % 10;
            assert!(d != 0, "pattern widths must be between 1 and 9");
            widths |= d << (4 * len);
            digits /= 10;
            len += 1;
        }
        assert!(len > 0 && len <= 8, "a pattern holds 1 to 8 widths");

        Self { widths, len }
    }

    /// Number of bars and spaces in this pattern.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total width of the pattern in modules.
    pub const fn modules(&self) -> u32 {
        let mut sum = 0;
        let mut w = self.widths;
        while w > 0 {
            sum += w & 0xF;
            w >>= 4;
        }
        sum
    }

    /// Width of the bar or space at `index`.
    pub const fn width(&self, index: usize) -> Option<u8> {
        if index >= self.len() {
            return None;
        }
        Some(((self.widths >> (4 * (self.len() - 1 - index))) & 0xF) as u8)
    }

    #[inline]
    pub fn iter(&self) -> Widths {
        self.into_iter()
    }

    /// The pattern as ASCII digits, e.g. `'2', '1', '1', '2', '1', '4'`.
    pub fn digits(&self) -> impl Iterator<Item = char> {
        self.iter().map(|w| char::from(b'0' + w))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits() {
            fmt::Write::write_char(f, d)?;
        }
        Ok(())
    }
}

impl iter::IntoIterator for Pattern {
    type Item = u8;
    type IntoIter = Widths;

    fn into_iter(self) -> Self::IntoIter {
        Widths { value: self.widths, count: self.len as u32 }
    }
}

/// Iterator over the widths of a [Pattern], first bar first.
#[derive(Debug, Clone)]
pub struct Widths {
    value: u32,
    count: u32,
}

impl iter::Iterator for Widths {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.count > 0 {
            self.count -= 1;
            Some(((self.value >> (4 * self.count)) & 0xF) as u8)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count as usize;
        (count, Some(count))
    }
}

impl iter::DoubleEndedIterator for Widths {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.count > 0 {
            let width = (self.value & 0xF) as u8;
            self.value >>= 4;
            self.count -= 1;
            Some(width)
        } else {
            None
        }
    }
}

impl iter::ExactSizeIterator for Widths {}
impl iter::FusedIterator for Widths {}
