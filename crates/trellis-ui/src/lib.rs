//! Trellis UI Components
//!
//! Dioxus components for form layouts:
//! - [`FieldWrapper`]: labeled container with top and bottom captions
//! - [`ToggleSwitch`]: two-option switch with a sliding indicator
//!
//! Styling comes from class names only. Platform and density variants are
//! read from the nearest [`PlatformProvider`] and [`AdaptivityProvider`];
//! without one the defaults apply.

pub mod components;
pub mod context;

pub use components::*;
pub use context::{use_platform, use_size_y, AdaptivityProvider, PlatformProvider};
pub use trellis_core::{
    FieldStatus, OptionSlot, OptionValue, Platform, SizeY, SwitchOption, SwitchOptions,
};
