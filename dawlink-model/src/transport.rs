//! Transport state mirrored from the host.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transport {
    /// Metronome on/off
    pub click: bool,
    pub preroll_ms: i32,
    pub preroll_click: bool,
    pub play: bool,
    pub looping: bool,
    pub record: bool,
    pub tempo: f64,
    /// Play position in beats
    pub position: f64,
    /// Play position as formatted by the host
    pub position_str: String,
    pub beats: String,
    numerator: i32,
    denominator: i32,
}

impl Default for Transport {
    fn default() -> Self {
        Self {
            click: false,
            preroll_ms: 0,
            preroll_click: false,
            play: false,
            looping: false,
            record: false,
            tempo: 120.0,
            position: 0.0,
            position_str: String::new(),
            beats: String::new(),
            numerator: 4,
            denominator: 4,
        }
    }
}

impl Transport {
    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    pub fn denominator(&self) -> i32 {
        self.denominator
    }

    /// Non-positive values are ignored.
    pub fn set_numerator(&mut self, value: i32) {
        if value > 0 {
            self.numerator = value;
        }
    }

    /// Non-positive values are ignored.
    pub fn set_denominator(&mut self, value: i32) {
        if value > 0 {
            self.denominator = value;
        }
    }

    pub fn time_signature(&self) -> (i32, i32) {
        (self.numerator, self.denominator)
    }
}
