const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";

pub fn display_bitmap(width: usize, stride: usize, bitmap: &[u8]) {
    for row in bitmap.chunks(stride) {
        for x in 0..width {
            let on = row[x / 8] & (0x80 >> (x % 8)) != 0;
            print!("{}", if on { BLACK } else { WHITE });
        }
        println!();
    }
    print!("\x1B[0m");
}
