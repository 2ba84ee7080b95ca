use std::error::Error;

use code128::{EncodingRequest, Variant, QUIET_ZONE};
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let text = args.next().unwrap_or_else(|| "Code 128".to_owned());
    let variant: Variant = args.next().as_deref().unwrap_or("code128").parse()?;

    let barcode = EncodingRequest::new(text)
        .set_variant(variant)
        .set_thickness(60)
        .set_show_text(false)
        .encode()?;

    let render = barcode.render();
    let mut pixels = vec![0u8; render.len()];
    render.fill(&mut pixels, &0, &255);

    let img = GrayImage::from_raw(render.width(), render.height(), pixels)
        .ok_or("pixel buffer does not match the canvas")?;
    // scale up so the narrowest bar is 2 pixels wide
    let img = imageops::resize(&img, img.width() * 2, img.height(), FilterType::Nearest);
    img.save("barcode.png")?;

    let Luma([first]) = *img.get_pixel(2 * QUIET_ZONE, 0);
    println!("wrote barcode.png ({}x{}), first bar luma {first}", img.width(), img.height());
    Ok(())
}
