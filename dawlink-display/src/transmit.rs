use std::io::{self, Cursor};

use crate::encoder::{max_frame_len, DisplayEncoder, Rect};

/// Sink for encoded frames, e.g. a USB bulk endpoint.
pub trait DisplayTransport {
    fn transmit(&mut self, frame: &[u8]) -> io::Result<()>;
}

impl DisplayTransport for Vec<Vec<u8>> {
    fn transmit(&mut self, frame: &[u8]) -> io::Result<()> {
        self.push(frame.to_vec());
        Ok(())
    }
}

/// Fixed-capacity scratch buffer frames are encoded into.
pub struct TransmitBuffer {
    data: Vec<u8>,
}

impl TransmitBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity],
        }
    }

    /// Large enough for any frame covering `width` x `height`.
    pub fn for_screen(width: u16, height: u16) -> Self {
        Self::with_capacity(max_frame_len(width, height))
    }

    /// Run `encode` against a cursor at offset 0 and return the bytes it wrote.
    /// Writing past capacity fails with `WriteZero`.
    pub fn encode<F>(&mut self, encode: F) -> io::Result<&[u8]>
    where
        F: FnOnce(&mut Cursor<&mut [u8]>) -> io::Result<()>,
    {
        let written = {
            let mut cursor = Cursor::new(self.data.as_mut_slice());
            encode(&mut cursor)?;
            cursor.position() as usize
        };
        Ok(&self.data[..written])
    }
}

impl Default for TransmitBuffer {
    fn default() -> Self {
        Self::for_screen(480, 270)
    }
}

/// One physical display: encoder, scratch buffer and transport.
pub struct Display<T: DisplayTransport> {
    encoder: DisplayEncoder,
    buffer: TransmitBuffer,
    transport: T,
}

impl<T: DisplayTransport> Display<T> {
    pub fn new(display_id: u8, buffer: TransmitBuffer, transport: T) -> Self {
        Self {
            encoder: DisplayEncoder::new(display_id),
            buffer,
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Send an image frame. Returns the number of bytes transmitted.
    pub fn show_image(&mut self, rect: Rect, data: &[u8]) -> io::Result<usize> {
        self.send(|encoder, out| encoder.write_image(out, rect, data))
    }

    pub fn show_fill(&mut self, rect: Rect, red: u8, green: u8, blue: u8) -> io::Result<usize> {
        self.send(|encoder, out| encoder.fill(out, rect, red, green, blue))
    }

    pub fn show_clear(&mut self, rect: Rect) -> io::Result<usize> {
        self.send(|encoder, out| encoder.clear(out, rect))
    }

    fn send<F>(&mut self, encode: F) -> io::Result<usize>
    where
        F: FnOnce(&DisplayEncoder, &mut Cursor<&mut [u8]>) -> io::Result<()>,
    {
        let encoder = self.encoder;
        let frame = match self.buffer.encode(|out| encode(&encoder, out)) {
            Ok(frame) => frame,
            Err(e) => {
                log::error!(target: "display", "frame for display {} not sent: {}", encoder.display_id(), e);
                return Err(e);
            }
        };
        self.transport.transmit(frame)?;
        log::trace!(target: "display", "sent {} bytes to display {}", frame.len(), encoder.display_id());
        Ok(frame.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{BLIT_LEN, FOOTER_LEN, HEADER_LEN, REPEAT_LEN};

    #[test]
    fn buffer_reports_only_written_bytes() {
        let mut buffer = TransmitBuffer::with_capacity(64);
        let frame = buffer
            .encode(|out| DisplayEncoder::new(1).clear(out, Rect::screen(2, 2)))
            .unwrap();
        assert_eq!(frame.len(), HEADER_LEN + REPEAT_LEN + BLIT_LEN + FOOTER_LEN);
    }

    #[test]
    fn cursor_restarts_for_every_frame() {
        let mut display = Display::new(0, TransmitBuffer::with_capacity(64), Vec::new());
        display.show_fill(Rect::screen(2, 2), 255, 0, 0).unwrap();
        display.show_clear(Rect::screen(2, 2)).unwrap();
        let frames = display.into_transport();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].len(), frames[1].len());
        assert_eq!(frames[1][0], 0x84);
    }

    #[test]
    fn overflow_sends_nothing() {
        let mut display = Display::new(0, TransmitBuffer::with_capacity(20), Vec::new());
        let err = display.show_clear(Rect::screen(4, 4)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
        assert!(display.transport().is_empty());
    }

    #[test]
    fn default_buffer_fits_full_screen_image() {
        let rect = Rect::screen(480, 270);
        let data = vec![0x80u8; rect.pixel_count() * 3];
        let mut display = Display::new(0, TransmitBuffer::default(), Vec::new());
        let sent = display.show_image(rect, &data).unwrap();
        assert_eq!(sent, max_frame_len(480, 270));
    }
}
