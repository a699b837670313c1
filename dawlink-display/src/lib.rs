//! # dawlink-display
//!
//! Outbound side: encodes RGB565 frames for the controller's 480x270 screen
//! and hands them to a [`DisplayTransport`].
//!
//! - [`opcode`]: protocol command bytes
//! - [`color`]: 24-bit RGB to RGB565
//! - [`encoder`]: header/body/blit/footer frame layout
//! - [`transmit`]: fixed-capacity buffer and the per-display sender

pub mod color;
pub mod encoder;
pub mod opcode;
pub mod transmit;

pub use color::quantize;
pub use encoder::{max_frame_len, DisplayEncoder, Rect};
pub use opcode::Opcode;
pub use transmit::{Display, DisplayTransport, TransmitBuffer};
