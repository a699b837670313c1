//! Project, clip, groove and quantize settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Project {
    pub name: String,
    /// Whether the host's audio engine is running
    pub engine_active: bool,
}

/// Play range of the clip being edited. Loop bounds are not mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Clip {
    pub play_start: f64,
    pub play_end: f64,
}

impl Clip {
    pub fn length(&self) -> f64 {
        self.play_end - self.play_start
    }
}

/// Named groove parameters, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrooveParam {
    Strength,
    Velocity,
    Target,
    Tolerance,
}

impl GrooveParam {
    pub fn all() -> &'static [GrooveParam] {
        &[
            GrooveParam::Strength,
            GrooveParam::Velocity,
            GrooveParam::Target,
            GrooveParam::Tolerance,
        ]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.name() == name)
    }

    pub fn position(self) -> usize {
        match self {
            GrooveParam::Strength => 0,
            GrooveParam::Velocity => 1,
            GrooveParam::Target => 2,
            GrooveParam::Tolerance => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GrooveParam::Strength => "strength",
            GrooveParam::Velocity => "velocity",
            GrooveParam::Target => "target",
            GrooveParam::Tolerance => "tolerance",
        }
    }
}

/// Global groove settings, stored positionally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Groove {
    values: [f64; 4],
}

impl Groove {
    pub fn get(&self, param: GrooveParam) -> f64 {
        self.values[param.position()]
    }

    pub fn set(&mut self, param: GrooveParam, value: f64) {
        self.values[param.position()] = value;
    }

    pub fn values(&self) -> &[f64; 4] {
        &self.values
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantize {
    /// 0.0-1.0
    pub strength: f64,
}

impl Default for Quantize {
    fn default() -> Self {
        Self { strength: 1.0 }
    }
}
