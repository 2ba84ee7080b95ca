//! [embedded_graphics] integration: a [Code128Render] can be drawn on any
//! [DrawTarget] using [BinaryColor], `On` being a bar.

use embedded_graphics::{
    mono_font::{ascii::FONT_9X15, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
    text::{Baseline, Text},
};

use crate::builder::{Code128Render, TEXT_SIZE};
use crate::Orientation;

/// Left offset of the label under a horizontal barcode.
const LABEL_INDENT: i32 = 31;

impl Drawable for Code128Render<'_> {
    type Color = BinaryColor;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let (on, off) = if self.inverted() {
            (BinaryColor::Off, BinaryColor::On)
        } else {
            (BinaryColor::On, BinaryColor::Off)
        };
        let barcode = self.barcode();
        let thickness = barcode.thickness();

        target.fill_solid(&Rectangle::new(Point::zero(), Size::new(self.width(), self.height())), off)?;

        for bar in barcode.bars().filter(|bar| bar.black) {
            let area = match barcode.orientation() {
                Orientation::Horizontal => {
                    Rectangle::new(Point::new(bar.offset as i32, 0), Size::new(bar.width, thickness))
                }
                Orientation::Vertical => {
                    Rectangle::new(Point::new(0, bar.offset as i32), Size::new(thickness, bar.width))
                }
            };
            target.fill_solid(&area, on)?;
        }

        if barcode.show_text() {
            let style = MonoTextStyle::new(&FONT_9X15, on);
            match barcode.orientation() {
                Orientation::Horizontal => {
                    let origin = Point::new(LABEL_INDENT, thickness as i32);
                    Text::with_baseline(barcode.text(), origin, style, Baseline::Top).draw(target)?;
                }
                Orientation::Vertical => {
                    // one character per line, centered in the band
                    let stacked: String = barcode.text().chars()
                        .flat_map(|c| [c, '\n'])
                        .collect();
                    let x = (thickness + (TEXT_SIZE - FONT_9X15.character_size.width) / 2) as i32;
                    let origin = Point::new(x, crate::bars::QUIET_ZONE as i32);
                    Text::with_baseline(&stacked, origin, style, Baseline::Top).draw(target)?;
                }
            }
        }

        Ok(())
    }
}
