//! User text to Code 128 symbol conversion.

use core::fmt;

use crate::tables::{self, Function, Variant, CHECKSUM_MODULUS, STOP};
use crate::{Error, Pattern, Result};

/// Builds an [EncodedSymbol] from one or more data segments. Weight positions
/// run across segments, so appending "AB" then "C" is the same as appending
/// "ABC".
#[derive(Debug, Clone)]
pub struct Code128Encoder {
    variant: Variant,
    data: Vec<u8>,
    // kept reduced modulo 103 so long inputs cannot overflow
    checksum: u32,
}

impl Code128Encoder {
    pub fn new(variant: Variant) -> Self {
        Self { variant, data: Vec::new(), checksum: variant.seed() % CHECKSUM_MODULUS }
    }

    #[inline]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the number of data symbols already appended.
    pub fn count(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, value: u8) {
        let position = (self.data.len() as u64 + 1) % CHECKSUM_MODULUS as u64;
        self.checksum = (self.checksum + value as u32 * position as u32) % CHECKSUM_MODULUS;
        self.data.push(value);
    }

    /// Appends a text segment. Every character must exist in the variant's
    /// alphabet (after case folding for [Variant::UppercaseOnly]), otherwise
    /// the encoder is dropped and [Error::UnsupportedCharacter] is returned.
    pub fn append_text(mut self, text: &str) -> Result<Self> {
        self.data.reserve(text.len());
        for c in text.chars() {
            let folded = self.variant.fold(c);
            if folded != c {
                log::trace!("folded {c:?} to {folded:?} for {}", self.variant);
            }

            let Some(value) = self.variant.index_of(folded) else {
                let position = self.count() + 1;
                log::debug!("{c:?} at position {position} is not encodable in {}", self.variant);
                return Err(Error::UnsupportedCharacter { character: c, position, variant: self.variant });
            };
            self.push(value);
        }

        Ok(self)
    }

    /// Appends a function character, e.g. a leading [Function::Fnc1] for
    /// GS1-128.
    pub fn append_function(mut self, function: Function) -> Self {
        let value = self.variant.function(function);
        self.push(value);
        self
    }

    /// Appends the checksum and stop symbols.
    pub fn seal(self) -> EncodedSymbol {
        let checksum = self.checksum as u8;
        log::debug!("sealing {} symbol: {} data symbols, checksum {checksum}", self.variant, self.data.len());

        EncodedSymbol::new(self.variant, self.data, checksum)
    }
}

/// Encodes `text` as a complete Code 128 symbol.
pub fn encode(text: &str, variant: Variant) -> Result<EncodedSymbol> {
    Ok(Code128Encoder::new(variant).append_text(text)?.seal())
}

/// A sealed Code 128 symbol: start, data, checksum and stop.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedSymbol {
    variant: Variant,
    data: Vec<u8>,
    checksum: u8,
    pattern: String,
}

impl EncodedSymbol {
    fn new(variant: Variant, data: Vec<u8>, checksum: u8) -> Self {
        let mut symbol = Self { variant, data, checksum, pattern: String::new() };

        let pattern: String = symbol.patterns().flat_map(|p| p.digits()).collect();
        symbol.pattern = pattern;
        symbol
    }

    #[inline]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Symbol values of the data characters, without start, checksum or stop.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Value of the checksum symbol (0-102).
    #[inline]
    pub const fn checksum(&self) -> u8 {
        self.checksum
    }

    /// All symbol values in order: start, data, checksum and stop.
    pub fn values(&self) -> impl Iterator<Item = u8> + Clone + '_ {
        core::iter::once(self.variant.start())
            .chain(self.data.iter().copied())
            .chain([self.checksum, STOP])
    }

    pub fn patterns(&self) -> impl Iterator<Item = Pattern> + Clone + '_ {
        // values are produced from the alphabet so the lookup never misses
        self.values().filter_map(tables::pattern_at)
    }

    /// The bar/space widths as a string of digits.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Total width of the symbol in modules, quiet zones excluded.
    pub fn modules(&self) -> u32 {
        self.pattern.bytes().map(|d| (d - b'0') as u32).sum()
    }
}

impl fmt::Display for EncodedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl AsRef<str> for EncodedSymbol {
    fn as_ref(&self) -> &str {
        &self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_space() {
        let s = encode(" ", Variant::General).unwrap();
        assert_eq!(s.checksum(), 1);
        assert_eq!(s.as_str(), concat!("211214", "212222", "222122", "2331112"));
    }

    #[test]
    fn test_encode_empty() {
        let s = encode("", Variant::General).unwrap();
        assert_eq!(s.as_str(), concat!("211214", "222122", "2331112"));
        assert!(s.data().is_empty());

        let s = encode("", Variant::UppercaseOnly).unwrap();
        assert_eq!(s.checksum(), 0);
        assert_eq!(s.as_str(), concat!("211412", "212222", "2331112"));
    }

    #[test]
    fn test_encode_known_checksum() {
        // 104 + 48 + 42*2 + 42*3 + 17*4 + 18*5 + 19*6 + 35*7 = 879 = 55 (mod 103)
        let s = encode("PJJ123C", Variant::General).unwrap();
        assert_eq!(s.data(), &[48, 42, 42, 17, 18, 19, 35]);
        assert_eq!(s.checksum(), 55);
        assert!(s.as_str().ends_with(concat!("311321", "2331112")));
    }

    #[test]
    fn test_encode_known_checksum_uppercase() {
        // 103 + 775 = 878 = 54 (mod 103)
        let s = encode("PJJ123C", Variant::UppercaseOnly).unwrap();
        assert_eq!(s.data(), &[48, 42, 42, 17, 18, 19, 35]);
        assert_eq!(s.checksum(), 54);
        assert!(s.as_str().starts_with("211412"));
        assert!(s.as_str().ends_with(concat!("311123", "2331112")));

        let folded = encode("pjj123c", Variant::UppercaseOnly).unwrap();
        assert_eq!(folded.checksum(), 54);
        assert_eq!(folded.data(), s.data());
    }

    #[test]
    fn test_checksum_is_positional() {
        let text = "Hello, World!";
        let s = encode(text, Variant::General).unwrap();
        let sum: u32 = text.chars().enumerate()
            .map(|(i, c)| Variant::General.index_of(c).unwrap() as u32 * (i as u32 + 1))
            .sum();
        let expected = ((104 + sum) % 103) as u8;
        assert_eq!(s.checksum(), expected);

        let tail = &s.as_str()[s.as_str().len() - 13..s.as_str().len() - 7];
        assert_eq!(tail, tables::pattern_at(expected).unwrap().to_string());
    }

    #[test]
    fn test_case_folding() {
        let lower = encode("a", Variant::UppercaseOnly).unwrap();
        let upper = encode("A", Variant::UppercaseOnly).unwrap();
        assert_eq!(lower, upper);
        assert_ne!(encode("a", Variant::General).unwrap(), encode("A", Variant::General).unwrap());
    }

    #[test]
    fn test_control_characters() {
        let s = encode("A\tB", Variant::UppercaseOnly).unwrap();
        assert_eq!(s.data(), &[33, 73, 34]);
        assert!(matches!(
            encode("A\tB", Variant::General),
            Err(Error::UnsupportedCharacter { character: '\t', position: 2, variant: Variant::General })
        ));
    }

    #[test]
    fn test_unsupported_character() {
        assert!(matches!(
            encode("abc{", Variant::UppercaseOnly),
            Err(Error::UnsupportedCharacter { character: '{', position: 4, .. })
        ));
        assert!(matches!(
            encode("café", Variant::General),
            Err(Error::UnsupportedCharacter { character: 'é', position: 4, .. })
        ));

        // positions run across segments and count function characters
        let err = Code128Encoder::new(Variant::General)
            .append_function(Function::Fnc1)
            .append_text("0101")
            .and_then(|e| e.append_text("ok\u{e9}"))
            .unwrap_err();
        assert_eq!(err, Error::UnsupportedCharacter { character: 'é', position: 8, variant: Variant::General });
    }

    #[test]
    fn test_deterministic() {
        let a = encode("Code 128", Variant::General).unwrap();
        let b = encode("Code 128", Variant::General).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_multiple_segments() {
        let joined = Code128Encoder::new(Variant::General)
            .append_text("AB").unwrap()
            .append_text("C").unwrap()
            .seal();
        assert_eq!(joined, encode("ABC", Variant::General).unwrap());
    }

    #[test]
    fn test_function_characters() {
        let ec = Code128Encoder::new(Variant::General)
            .append_function(Function::Fnc1)
            .append_text("42").unwrap();
        assert_eq!(ec.count(), 3);

        let s = ec.seal();
        assert_eq!(s.data(), &[102, 20, 18]);
        assert_eq!(s.checksum() as u32, (104 + 102 + 20 * 2 + 18 * 3) % 103);
    }

    #[test]
    fn test_values_and_modules() {
        let s = encode("Hi", Variant::General).unwrap();
        let values: Vec<u8> = s.values().collect();
        assert_eq!(values.first(), Some(&104));
        assert_eq!(values.last(), Some(&106));
        assert_eq!(values.len(), 2 + 3);
        assert_eq!(s.modules(), 11 * 4 + 13);
        assert_eq!(s.as_str().len(), 6 * 4 + 7);
    }

    #[test]
    fn test_long_input() {
        let text = "x".repeat(100_000);
        let s = encode(&text, Variant::General).unwrap();
        let n = text.len() as u64;
        let expected = (104 + 88 * n * (n + 1) / 2) % 103;
        assert_eq!(s.checksum() as u64, expected);
    }
}
