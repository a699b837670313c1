//! Cursor device, its sibling devices and its parameter page.

use serde::{Deserialize, Serialize};

use crate::bank::{Bank, BankItem};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Parameter {
    pub name: String,
    pub value: i32,
    pub value_str: String,
}

impl BankItem for Parameter {}

/// A device next to the cursor device in the chain. Only its name is mirrored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Sibling {
    pub name: String,
}

impl BankItem for Sibling {}

/// The device the controller is currently focused on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorDevice {
    /// Number of devices in the chain of the selected track.
    pub count: i32,
    pub exists: bool,
    pub position: i32,
    pub enabled: bool,
    pub name: String,
    pub window_open: bool,
    pub expanded: bool,
    pub siblings: Bank<Sibling>,
    pub parameters: Bank<Parameter>,
}

impl CursorDevice {
    pub fn new(sibling_count: usize, parameter_count: usize) -> Self {
        Self {
            count: 0,
            exists: false,
            position: 0,
            enabled: true,
            name: String::new(),
            window_open: false,
            expanded: false,
            siblings: Bank::new(sibling_count),
            parameters: Bank::new(parameter_count),
        }
    }

    /// The host reports bypass; the mirror stores the inverse.
    pub fn set_bypass(&mut self, bypass: bool) {
        self.enabled = !bypass;
    }

    pub fn parameter(&self, index: usize) -> Option<&Parameter> {
        self.parameters.get(index)
    }

    pub fn parameter_mut(&mut self, index: usize) -> Option<&mut Parameter> {
        self.parameters.get_mut(index)
    }

    pub fn sibling_mut(&mut self, index: usize) -> Option<&mut Sibling> {
        self.siblings.get_mut(index)
    }
}
