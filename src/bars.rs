use core::iter;

use crate::EncodedSymbol;

/// Blank border left before the first and after the last bar.
pub const QUIET_ZONE: u32 = 10;
/// Total blank border along the bar axis.
pub const MARGIN: u32 = 2 * QUIET_ZONE;

/// One bar or space of a symbol, in pixels along the bar axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bar {
    pub offset: u32,
    pub width: u32,
    pub black: bool,
}

impl Bar {
    /// Offset just past this bar.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.offset + self.width
    }
}

/// Iterator over the bars and spaces of an [EncodedSymbol], starting after
/// the leading quiet zone. Clone it to walk the symbol again.
#[derive(Debug, Clone)]
pub struct Bars<'a> {
    digits: &'a [u8],
    offset: u32,
    black: bool,
}

impl<'a> Bars<'a> {
    pub fn new(symbol: &'a EncodedSymbol) -> Self {
        Self { digits: symbol.as_str().as_bytes(), offset: QUIET_ZONE, black: true }
    }
}

impl<'a> iter::Iterator for Bars<'a> {
    type Item = Bar;

    fn next(&mut self) -> Option<Self::Item> {
        let (&digit, rest) = self.digits.split_first()?;
        self.digits = rest;

        let bar = Bar { offset: self.offset, width: (digit - b'0') as u32, black: self.black };
        self.offset += bar.width;
        self.black = !self.black;
        Some(bar)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.digits.len();
        (count, Some(count))
    }
}

impl<'a> ExactSizeIterator for Bars<'a> {}
impl<'a> iter::FusedIterator for Bars<'a> {}

impl EncodedSymbol {
    /// Bars and spaces of this symbol with their pixel offsets.
    pub fn bars(&self) -> Bars<'_> {
        Bars::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encode, Variant};

    #[test]
    fn test_bars_space() {
        let s = encode(" ", Variant::General).unwrap();
        let bars: Vec<Bar> = s.bars().collect();
        assert_eq!(bars.len(), 25);
        assert_eq!(bars[0], Bar { offset: 10, width: 2, black: true });
        assert_eq!(bars[1], Bar { offset: 12, width: 1, black: false });
        assert_eq!(bars[2], Bar { offset: 13, width: 1, black: true });
        let last = bars.last().unwrap();
        assert_eq!(*last, Bar { offset: 10 + 46 - 2, width: 2, black: true });
        assert_eq!(last.end() + QUIET_ZONE, MARGIN + s.modules());
    }

    #[test]
    fn test_bars_alternate() {
        let s = encode("Code 128", Variant::General).unwrap();
        for (k, bar) in s.bars().enumerate() {
            assert_eq!(bar.black, k % 2 == 0);
        }
    }

    #[test]
    fn test_bars_contiguous() {
        let s = encode("CONTIGUOUS", Variant::UppercaseOnly).unwrap();
        let mut offset = QUIET_ZONE;
        for bar in s.bars() {
            assert_eq!(bar.offset, offset);
            assert!((1..=4).contains(&bar.width));
            offset = bar.end();
        }
        assert_eq!(offset, QUIET_ZONE + s.modules());
    }

    #[test]
    fn test_bars_restartable() {
        let s = encode("again", Variant::General).unwrap();
        let mut bars = s.bars();
        bars.next();
        let rest = bars.clone();
        assert_eq!(bars.len(), s.as_str().len() - 1);
        assert!(bars.eq(rest));
        assert!(s.bars().eq(s.bars()));
    }
}
