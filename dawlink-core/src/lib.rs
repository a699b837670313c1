//! # dawlink-core
//!
//! Inbound side of the host synchronization boundary. The host emits
//! `address value` notifications; this crate tokenizes the address, routes
//! it through the address grammar, coerces the payload and mutates a
//! [`dawlink_model::ModelMirror`].
//!
//! ```rust,ignore
//! use dawlink_core::{Config, Dispatcher};
//! use dawlink_model::ModelMirror;
//!
//! let config = Config::load();
//! let mut model = ModelMirror::new(config.bank_sizes());
//! let dispatcher = Dispatcher::new(config.value_range());
//!
//! let report = dispatcher.dispatch_batch(&mut model, "/track/3/volume 0.482\n/play 1");
//! assert!(report.is_clean());
//! ```
//!
//! ## Module Overview
//!
//! - [`address`]: splits addresses into segments
//! - [`dispatch`]: `Dispatcher`, the category and entity handlers
//! - [`osc`]: adapter from decoded OSC packets to notifications
//! - [`value`]: normalized ↔ controller value conversion
//! - [`config`]: TOML configuration (embedded defaults + user override)

pub mod address;
pub mod config;
pub mod dispatch;
mod error;
pub mod osc;
pub mod value;

pub use config::{Config, DisplaySettings};
pub use dispatch::{BatchReport, Dispatcher};
pub use error::DispatchError;
pub use value::ValueRange;
