//! Application state modules.

mod compare;
mod config;
mod exit;
mod keys;

pub use compare::{CompareSlot, CompareState, SlotKind};
pub use config::TunerConfig;
pub use exit::FatalError;
pub use keys::KeyAction;
