//! # dawlink-model
//!
//! In-memory mirror of the host DAW session: transport, project, the track
//! bank with its sends, the master track, the cursor device with its
//! parameter page, browser results, clip bounds, groove and quantize settings.
//!
//! Banks are addressed by 0-based index. Out-of-range lookups return `None`
//! so callers can drop updates for slots the host has not advertised.

pub mod bank;
pub mod browser;
pub mod device;
mod mirror;
pub mod session;
pub mod track;
pub mod transport;

pub use bank::{Bank, BankItem, MAX_BANK_SIZE};
pub use browser::{Browser, BrowserResult, NO_PRESET};
pub use device::{CursorDevice, Parameter, Sibling};
pub use mirror::{BankSizes, ModelMirror};
pub use session::{Clip, Groove, GrooveParam, Project, Quantize};
pub use track::{AutomationMode, Color, Track, TrackSend, TrackType, MASTER_INDEX};
pub use transport::Transport;
