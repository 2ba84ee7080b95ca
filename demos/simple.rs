use code128::*;

const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";

const TEXT: &str = "Hello, world!";
const THICKNESS: u32 = 8;

const W: usize = code128_extent!(TEXT.len()) as usize;
const H: usize = THICKNESS as usize;

fn main() {
    let barcode = EncodingRequest::new(TEXT)
        .set_thickness(THICKNESS)
        .set_show_text(false)
        .encode()
        .unwrap();
    println!("{}", barcode.symbol());

    let mut storage = [false; W * H];
    barcode.render().fill_bits(&mut storage[..]);

    for row in storage.chunks(W) {
        for &on in row {
            print!("{}", if on { BLACK } else { WHITE });
        }
        println!();
    }
    println!("\x1B[0m{TEXT}");
}
