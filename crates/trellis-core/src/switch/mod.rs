//! Two-option toggle switch.
//!
//! - [`option`]: option values and the validated pair
//! - [`state`]: interaction state machine
//! - [`view`]: what the switch renders for a given state

pub mod option;
pub mod state;
pub mod view;

pub use option::{OptionSlot, OptionValue, SwitchOption, SwitchOptions};
pub use state::{is_toggle_key, SwitchState, Transition, TOGGLE_KEYS};
pub use view::{button_classes, ButtonView, SwitchView};
