//! Gallery settings context.
//!
//! Settings are parsed once in `main` and read by the root component.
//!
//! ## Usage
//!
//! ```ignore
//! let settings = get_settings();
//! PlatformProvider { platform: settings.platform, ... }
//! ```

use trellis_core::{FieldStatus, Platform, SizeY, SwitchOptions};

/// Settings chosen on the command line
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GallerySettings {
    /// Initial platform variant
    pub platform: Platform,
    /// Initial vertical density
    pub size_y: SizeY,
    /// Status shown by the highlighted field
    pub status: FieldStatus,
    /// Options of the demo switch
    pub options: SwitchOptions,
}

/// Get the gallery settings.
/// Uses the global settings set from command line args.
pub fn get_settings() -> GallerySettings {
    crate::get_settings()
}
