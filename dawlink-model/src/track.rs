//! Track, master track and send state.

use serde::{Deserialize, Serialize};

use crate::bank::{Bank, BankItem};

/// Index used by the master track, which has no bank slot.
pub const MASTER_INDEX: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TrackType {
    #[default]
    Audio,
    Instrument,
    Hybrid,
    Group,
    Effect,
    Master,
}

impl TrackType {
    /// Map the host's integer encoding. Unknown values yield `None`.
    pub fn from_index(value: i64) -> Option<Self> {
        match value {
            0 => Some(TrackType::Audio),
            1 => Some(TrackType::Instrument),
            2 => Some(TrackType::Hybrid),
            3 => Some(TrackType::Group),
            4 => Some(TrackType::Effect),
            5 => Some(TrackType::Master),
            _ => None,
        }
    }
}

/// Automation mode of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AutomationMode {
    #[default]
    Trim,
    Read,
    Touch,
    Write,
    Latch,
}

impl AutomationMode {
    pub fn from_index(value: i64) -> Option<Self> {
        let index = usize::try_from(value).ok()?;
        Self::all().get(index).copied()
    }

    pub fn all() -> &'static [AutomationMode] {
        &[
            AutomationMode::Trim,
            AutomationMode::Read,
            AutomationMode::Touch,
            AutomationMode::Write,
            AutomationMode::Latch,
        ]
    }
}

/// Normalized color, each component in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: f64::from(red) / 255.0,
            green: f64::from(green) / 255.0,
            blue: f64::from(blue) / 255.0,
        }
    }

    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.red), channel(self.green), channel(self.blue))
    }
}

/// A send slot owned by a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TrackSend {
    pub name: String,
    pub volume: i32,
    pub volume_str: String,
}

impl BankItem for TrackSend {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// 0-based bank position, or [`MASTER_INDEX`].
    pub index: i32,
    pub exists: bool,
    pub active: bool,
    pub track_type: TrackType,
    pub selected: bool,
    pub name: String,
    pub volume: i32,
    pub volume_str: String,
    pub pan: i32,
    pub pan_str: String,
    pub vu_left: i32,
    pub vu_right: i32,
    pub mute: bool,
    pub solo: bool,
    pub rec_arm: bool,
    pub monitor: bool,
    pub auto_monitor: bool,
    pub automation: AutomationMode,
    pub color: Color,
    pub sends: Bank<TrackSend>,
    pub repeat_active: bool,
    pub repeat_note_length: f64,
}

impl Track {
    pub fn new(index: i32, send_count: usize) -> Self {
        Self {
            index,
            exists: false,
            active: true,
            track_type: TrackType::default(),
            selected: false,
            name: String::new(),
            volume: 0,
            volume_str: String::new(),
            pan: 0,
            pan_str: String::new(),
            vu_left: 0,
            vu_right: 0,
            mute: false,
            solo: false,
            rec_arm: false,
            monitor: false,
            auto_monitor: false,
            automation: AutomationMode::default(),
            color: Color::default(),
            sends: Bank::new(send_count),
            repeat_active: false,
            repeat_note_length: 0.0,
        }
    }

    pub fn master(send_count: usize) -> Self {
        let mut track = Self::new(MASTER_INDEX, send_count);
        track.exists = true;
        track.track_type = TrackType::Master;
        track
    }

    pub fn send(&self, index: usize) -> Option<&TrackSend> {
        self.sends.get(index)
    }

    pub fn send_mut(&mut self, index: usize) -> Option<&mut TrackSend> {
        self.sends.get_mut(index)
    }
}

impl BankItem for Track {
    fn retire(&mut self) {
        self.exists = false;
        self.selected = false;
    }
}
