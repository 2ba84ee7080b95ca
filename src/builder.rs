use crate::bars::Bars;
use crate::{EncodedSymbol, Layout, Orientation};

/// Size of the band reserved for the text label, in pixels.
pub const TEXT_SIZE: u32 = 30;

/// An encoded symbol together with its canvas, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Barcode {
    text: String,
    symbol: EncodedSymbol,
    layout: Layout,
    orientation: Orientation,
    show_text: bool,
}

impl Barcode {
    pub(crate) fn new(text: String, symbol: EncodedSymbol, layout: Layout, orientation: Orientation, show_text: bool) -> Self {
        Self { text, symbol, layout, orientation, show_text }
    }

    /// The text as requested, before any case folding.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub const fn symbol(&self) -> &EncodedSymbol {
        &self.symbol
    }

    /// Canvas of the bars alone, label band excluded.
    #[inline]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub const fn show_text(&self) -> bool {
        self.show_text
    }

    /// Length of the bars across the bar axis.
    pub const fn thickness(&self) -> u32 {
        match self.orientation {
            Orientation::Horizontal => self.layout.height,
            Orientation::Vertical => self.layout.width,
        }
    }

    pub fn bars(&self) -> Bars<'_> {
        self.symbol.bars()
    }

    pub const fn render(&self) -> Code128Render<'_> {
        Code128Render { barcode: self, inverted: false }
    }
}

/// Rasterizes a [Barcode] into caller provided storage. Pixels are laid out
/// row by row, `true`/`on` being a bar.
#[derive(Debug, Clone)]
pub struct Code128Render<'a> {
    barcode: &'a Barcode,
    inverted: bool,
}

impl<'a> From<&'a Barcode> for Code128Render<'a> {
    fn from(barcode: &'a Barcode) -> Self {
        barcode.render()
    }
}

impl<'a> Code128Render<'a> {
    #[inline]
    pub const fn barcode(&self) -> &'a Barcode {
        self.barcode
    }

    /// Canvas width, including the label band of a vertical barcode.
    pub const fn width(&self) -> u32 {
        let b = self.barcode;
        match b.orientation {
            Orientation::Vertical if b.show_text => b.layout.width + TEXT_SIZE,
            _ => b.layout.width,
        }
    }

    /// Canvas height, including the label band of a horizontal barcode.
    pub const fn height(&self) -> u32 {
        let b = self.barcode;
        match b.orientation {
            Orientation::Horizontal if b.show_text => b.layout.height + TEXT_SIZE,
            _ => b.layout.height,
        }
    }

    /// Number of pixels of the canvas.
    pub const fn len(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes per row of a bitmap filled by [Code128Render::fill_bitmap].
    pub const fn stride(&self) -> usize {
        (self.width() as usize + 7) / 8
    }

    /// Whether bars come out as `off` pixels on an `on` background.
    pub const fn inverted(&self) -> bool {
        self.inverted
    }

    /// Swaps the bar and background values written by the fill functions and
    /// the `Drawable`, for white-on-black output.
    pub const fn set_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// One flag per pixel of the bar axis, set on black bars.
    fn strip(&self) -> Vec<bool> {
        let symbol = self.barcode.symbol();
        let mut strip = vec![false; Layout::extent(symbol) as usize];
        for bar in symbol.bars().filter(|bar| bar.black) {
            strip[bar.offset as usize..bar.end() as usize].fill(true);
        }
        strip
    }

    /// Pixels of the canvas, row by row. The label band is left blank.
    pub fn bits(&self) -> impl Iterator<Item = bool> + 'a {
        let strip = self.strip();
        let width = self.width() as usize;
        let thickness = self.barcode.thickness() as usize;
        let orientation = self.barcode.orientation;
        let invert = self.inverted;

        (0..self.len()).map(move |i| {
            let (x, y) = (i % width, i / width);
            let on = match orientation {
                Orientation::Horizontal => y < thickness && strip[x],
                Orientation::Vertical => x < thickness && strip[y],
            };
            on ^ invert
        })
    }

    pub fn fill<P: Clone>(&self, target: &mut [P], on: &P, off: &P) {
        assert!(target.len() >= self.len(), "target is too small for the barcode");
        for (px, bit) in target.iter_mut().zip(self.bits()) {
            *px = if bit { on.clone() } else { off.clone() };
        }
    }

    pub fn fill_bits(&self, target: &mut [bool]) {
        self.fill(target, &true, &false);
    }

    /// Packs 8 pixels per byte, most significant bit first. Each row starts on
    /// a new byte, see [Code128Render::stride].
    pub fn fill_bitmap(&self, target: &mut [u8]) {
        let stride = self.stride();
        let width = self.width() as usize;
        assert!(target.len() >= stride * self.height() as usize, "target is too small for the barcode");

        target.fill(0);
        for (i, bit) in self.bits().enumerate() {
            if bit {
                let (x, y) = (i % width, i / width);
                target[y * stride + x / 8] |= 0x80 >> (x % 8);
            }
        }
    }
}
