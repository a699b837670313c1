/// Command bytes of the display protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Raw pixel run (legacy transmit path)
    TransmitPixel = 0x00,
    /// Two colors plus a repetition count
    RepeatPixel = 0x01,
    /// Skip marker; the count is always written as zero
    SkipPixel = 0x02,
    /// Commit the frame
    Blit = 0x03,
    EndOfData = 0x40,
    StartOfData = 0x84,
}

impl Opcode {
    pub fn byte(self) -> u8 {
        self as u8
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Opcode::TransmitPixel),
            0x01 => Some(Opcode::RepeatPixel),
            0x02 => Some(Opcode::SkipPixel),
            0x03 => Some(Opcode::Blit),
            0x40 => Some(Opcode::EndOfData),
            0x84 => Some(Opcode::StartOfData),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_roundtrip() {
        for op in [
            Opcode::TransmitPixel,
            Opcode::RepeatPixel,
            Opcode::SkipPixel,
            Opcode::Blit,
            Opcode::EndOfData,
            Opcode::StartOfData,
        ] {
            assert_eq!(Opcode::from_byte(op.byte()), Some(op));
        }
        assert_eq!(Opcode::StartOfData.byte(), 0x84);
        assert_eq!(Opcode::from_byte(0x05), None);
    }
}
