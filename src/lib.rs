//! Code 128 barcode encoder.
//!
//! Text is encoded with [encode] (or a [Code128Encoder] for multiple
//! segments) into an [EncodedSymbol], the sequence of bar and space widths of
//! the start symbol, the data, the modulo 103 checksum and the stop pattern.
//! [Layout] and [Bars] then turn the symbol into pixel geometry, one pixel per
//! module with a 10 pixel quiet zone on each side.
//!
//! ```
//! use code128::*;
//!
//! let symbol = encode("Hello", Variant::General).unwrap();
//! let layout = Layout::new(&symbol, 40, Orientation::Horizontal).unwrap();
//! assert_eq!(layout.width, code128_extent!(5));
//!
//! for bar in symbol.bars().filter(|bar| bar.black) {
//!     // fill bar.offset..bar.end() across the 40 pixels of thickness
//! }
//! ```
//!
//! With the `embedded-graphics` feature (enabled by default), a
//! [Code128Render] is a `Drawable` and can be drawn on any display.

mod bars;
mod builder;
mod high_level;
mod layout;
mod pattern;
mod request;
pub mod tables;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use bars::{Bar, Bars, MARGIN, QUIET_ZONE};
pub use builder::{Barcode, Code128Render, TEXT_SIZE};
pub use high_level::{encode, Code128Encoder, EncodedSymbol};
pub use layout::{layout, Layout, Orientation};
pub use pattern::{Pattern, Widths};
pub use request::{EncodingRequest, DEFAULT_SIZE};
pub use tables::{Function, Variant};

/// Result type of the encoding operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned while encoding a barcode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `position` is 1-based and counts every symbol appended before the
    /// character, function characters included.
    #[error("character {character:?} at position {position} is not supported by {variant}")]
    UnsupportedCharacter { character: char, position: usize, variant: Variant },

    #[error("unsupported barcode type `{0}` (supported: code128, code128a)")]
    UnsupportedVariant(String),

    #[error("barcode thickness must be at least one pixel and leave room for the label")]
    InvalidThickness,
}

/// Calculates the width in pixels of a horizontal Code 128 barcode holding
/// `n` data symbols, quiet zones included: 11 modules for the start, each
/// symbol and the checksum, 13 for the stop.
#[macro_export]
macro_rules! code128_extent {
    ($n:expr) => {
        $crate::MARGIN + 11 * ($n as u32 + 2) + 13
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = encode("é", Variant::General).unwrap_err();
        assert_eq!(err.to_string(), "character 'é' at position 1 is not supported by code128");

        let err = encode("ABC\x7F", Variant::UppercaseOnly).unwrap_err();
        assert_eq!(err.to_string(), "character '\\u{7f}' at position 4 is not supported by code128a");

        let err = "code39".parse::<Variant>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported barcode type `code39` (supported: code128, code128a)");
    }

    #[test]
    fn test_extent_macro() {
        const W: u32 = code128_extent!(0);
        assert_eq!(W, 66 - 11);
        assert_eq!(code128_extent!(1), 66);
    }

    #[test]
    fn test_types_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EncodedSymbol>();
        assert_send_sync::<Barcode>();
        assert_send_sync::<Code128Render<'static>>();
        assert_send_sync::<Bars<'static>>();
    }

    #[test]
    fn test_concurrent_encoding() {
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || encode(&format!("THREAD {i}"), Variant::UppercaseOnly)))
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            let expected = encode(&format!("thread {i}"), Variant::UppercaseOnly).unwrap();
            assert_eq!(h.join().unwrap().unwrap(), expected);
        }
    }
}
