//! Frame encoder for the controller's RGB565 display.
//!
//! Every frame is `header + body + blit + footer`. The encoder holds no
//! buffer of its own; callers pass any [`Write`] sink and the encoder
//! appends to it.

use std::io::{self, Write};

use crate::color::{quantize, write_color};
use crate::opcode::Opcode;

pub const HEADER_LEN: usize = 16;
pub const FOOTER_LEN: usize = 4;
pub const BLIT_LEN: usize = 4;
pub const SKIP_LEN: usize = 7;
/// Opcode, pad, repetitions and two colors.
pub const REPEAT_LEN: usize = 8;
pub const PIXELS_PER_CHUNK: usize = 22;

/// Region of the screen a frame covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Region anchored at the origin.
    pub fn screen(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn pixel_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Worst-case length of one frame covering `width` x `height` pixels.
pub fn max_frame_len(width: u16, height: u16) -> usize {
    let pixels = usize::from(width) * usize::from(height);
    let chunks = pixels.div_ceil(PIXELS_PER_CHUNK);
    let image = chunks * (SKIP_LEN + 1) + pixels * 2;
    HEADER_LEN + image.max(REPEAT_LEN) + BLIT_LEN + FOOTER_LEN
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayEncoder {
    display_id: u8,
}

impl DisplayEncoder {
    pub fn new(display_id: u8) -> Self {
        Self { display_id }
    }

    pub fn display_id(&self) -> u8 {
        self.display_id
    }

    pub fn write_header<W: Write>(&self, out: &mut W, rect: Rect) -> io::Result<()> {
        out.write_all(&[Opcode::StartOfData.byte(), 0x00, self.display_id, 0x60])?;
        out.write_all(&0u16.to_be_bytes())?;
        out.write_all(&0u16.to_be_bytes())?;
        out.write_all(&rect.x.to_be_bytes())?;
        out.write_all(&rect.y.to_be_bytes())?;
        out.write_all(&rect.width.to_be_bytes())?;
        out.write_all(&rect.height.to_be_bytes())
    }

    pub fn write_footer<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&[Opcode::EndOfData.byte(), 0x00, self.display_id, 0x00])
    }

    pub fn write_blit<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&[Opcode::Blit.byte(), 0x00])?;
        out.write_all(&0u16.to_be_bytes())
    }

    /// Skip command with a zero distance. Precedes every image chunk.
    pub fn write_skip<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&[Opcode::SkipPixel.byte()])?;
        for _ in 0..3 {
            out.write_all(&0u16.to_be_bytes())?;
        }
        Ok(())
    }

    /// Repeat a pair of colors `repetitions` times.
    pub fn write_repeat<W: Write>(
        &self,
        out: &mut W,
        repetitions: u16,
        first: u16,
        second: u16,
    ) -> io::Result<()> {
        out.write_all(&[Opcode::RepeatPixel.byte(), 0x00])?;
        out.write_all(&repetitions.to_be_bytes())?;
        write_color(out, first)?;
        write_color(out, second)
    }

    /// Encode a full frame from packed 24-bit RGB `data`.
    ///
    /// `data` is not checked against the rect; a short buffer ends the pixel
    /// stream early while the chunk length bytes still describe the full rect.
    pub fn write_image<W: Write>(&self, out: &mut W, rect: Rect, data: &[u8]) -> io::Result<()> {
        self.write_header(out, rect)?;

        let mut pixels = data.chunks_exact(3);
        let mut remaining = rect.pixel_count();
        while remaining > 0 {
            let chunk = remaining.min(PIXELS_PER_CHUNK);
            self.write_skip(out)?;
            out.write_all(&[(chunk / 2) as u8])?;
            for rgb in pixels.by_ref().take(chunk) {
                write_color(out, quantize(rgb[0], rgb[1], rgb[2]))?;
            }
            remaining -= chunk;
        }

        self.write_blit(out)?;
        self.write_footer(out)
    }

    /// Encode a frame painting the whole rect a single color.
    pub fn fill<W: Write>(&self, out: &mut W, rect: Rect, red: u8, green: u8, blue: u8) -> io::Result<()> {
        let color = quantize(red, green, blue);
        // Each repetition paints two pixels
        let repetitions = (rect.pixel_count() / 2) as u16;

        self.write_header(out, rect)?;
        self.write_repeat(out, repetitions, color, color)?;
        self.write_blit(out)?;
        self.write_footer(out)
    }

    pub fn clear<W: Write>(&self, out: &mut W, rect: Rect) -> io::Result<()> {
        self.fill(out, rect, 0, 0, 0)
    }
}
