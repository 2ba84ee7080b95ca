use crate::bars::MARGIN;
use crate::{EncodedSymbol, Error, Result};

/// Direction along which the bars are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Bars are vertical strokes read from left to right.
    #[default]
    Horizontal,
    /// Bars are horizontal strokes read from top to bottom.
    Vertical,
}

/// Canvas size of a symbol, label excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
}

impl Layout {
    /// Length of the bar axis: the quiet zones plus one pixel per module.
    pub fn extent(symbol: &EncodedSymbol) -> u32 {
        MARGIN + symbol.modules()
    }

    /// Computes the canvas of `symbol` drawn `thickness` pixels thick.
    pub fn new(symbol: &EncodedSymbol, thickness: u32, orientation: Orientation) -> Result<Self> {
        if thickness == 0 {
            return Err(Error::InvalidThickness);
        }

        let extent = Self::extent(symbol);
        Ok(match orientation {
            Orientation::Horizontal => Layout { width: extent, height: thickness },
            Orientation::Vertical => Layout { width: thickness, height: extent },
        })
    }

    #[inline]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// See [Layout::new].
pub fn layout(symbol: &EncodedSymbol, thickness: u32, orientation: Orientation) -> Result<Layout> {
    Layout::new(symbol, thickness, orientation)
}
