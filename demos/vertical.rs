mod utils;

use code128::*;

fn main() {
    let text = std::env::args().nth(1).unwrap_or_else(|| "vertical".to_owned());

    let barcode = match EncodingRequest::new(&text)
        .set_variant(Variant::UppercaseOnly)
        .set_thickness(12)
        .set_orientation(Orientation::Vertical)
        .set_show_text(false)
        .encode()
    {
        Ok(barcode) => barcode,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let render = barcode.render();
    let mut bitmap = vec![0u8; render.stride() * render.height() as usize];
    render.fill_bitmap(&mut bitmap);

    utils::display_bitmap(render.width() as usize, render.stride(), &bitmap);
    println!("checksum symbol: {}", barcode.symbol().checksum());
}
