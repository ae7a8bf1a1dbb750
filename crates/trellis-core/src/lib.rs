//! Trellis Core Library
//!
//! Framework-free logic behind the Trellis components: class naming,
//! platform and density tags, the form field layout and the toggle switch
//! state machine. Rendering lives in `trellis-ui`.
//!
//! ## Quick Start
//!
//! ```
//! use trellis_core::switch::{OptionSlot, SwitchOption, SwitchOptions, SwitchState};
//!
//! let options = SwitchOptions::new(
//!     SwitchOption::new("Light", "light"),
//!     SwitchOption::new("Dark", "dark"),
//! )?;
//!
//! let mut state = SwitchState::new(None);
//! state.select(&options, OptionSlot::First);
//!
//! let transition = state.toggle_by_key(&options, "Enter");
//! assert_eq!(transition.switched, Some("dark".into()));
//! assert_eq!(transition.focus, Some(OptionSlot::Second));
//! # Ok::<(), trellis_core::TrellisError>(())
//! ```

pub mod class_list;
pub mod error;
pub mod field;
pub mod platform;
pub mod switch;

// Re-exports
pub use class_list::{platform_class, ClassList};
pub use error::{TrellisError, TrellisResult};
pub use field::{has_content, CaptionContent, FieldInputs, FieldLayout, FieldStatus};
pub use platform::{Platform, SizeY};
pub use switch::{
    OptionSlot, OptionValue, SwitchOption, SwitchOptions, SwitchState, SwitchView, Transition,
};
