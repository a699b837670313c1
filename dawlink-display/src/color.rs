//! 24-bit RGB to RGB565 conversion.

use std::io::{self, Write};

/// Pack an 8-bit RGB triple into RGB565. Channels are scaled with
/// truncating integer division.
pub fn quantize(red: u8, green: u8, blue: u8) -> u16 {
    let r = u32::from(red) * 31 / 255;
    let g = u32::from(green) * 63 / 255;
    let b = u32::from(blue) * 31 / 255;
    ((r << 11) | (g << 5) | b) as u16
}

/// Write a packed color high byte first, as the hardware expects.
pub fn write_color<W: Write>(out: &mut W, color: u16) -> io::Result<()> {
    out.write_all(&color.to_be_bytes())
}
