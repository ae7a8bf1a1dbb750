//! Platform and density providers.
//!
//! ## Usage
//!
//! ```ignore
//! // Near the root
//! PlatformProvider { platform: Platform::Ios,
//!     AdaptivityProvider { size_y: SizeY::Compact,
//!         Form {}
//!     }
//! }
//!
//! // In child components
//! let platform = use_platform();
//! ```

use dioxus::prelude::*;
use trellis_core::{Platform, SizeY};

/// Hook to read the current platform.
///
/// Falls back to [`Platform::default`] outside any [`PlatformProvider`].
pub fn use_platform() -> Platform {
    try_use_context::<Signal<Platform>>()
        .map(|platform| platform())
        .unwrap_or_default()
}

/// Hook to read the current vertical density.
///
/// Falls back to [`SizeY::default`] outside any [`AdaptivityProvider`].
pub fn use_size_y() -> SizeY {
    try_use_context::<Signal<SizeY>>()
        .map(|size_y| size_y())
        .unwrap_or_default()
}

/// Provides a platform to every component below it
#[component]
pub fn PlatformProvider(platform: Platform, children: Element) -> Element {
    let mut current = use_context_provider(|| Signal::new(platform));

    use_effect(use_reactive((&platform,), move |(platform,)| {
        if *current.peek() != platform {
            tracing::debug!(%platform, "platform changed");
            current.set(platform);
        }
    }));

    rsx! {
        {children}
    }
}

/// Provides a vertical density to every component below it
#[component]
pub fn AdaptivityProvider(size_y: SizeY, children: Element) -> Element {
    let mut current = use_context_provider(|| Signal::new(size_y));

    use_effect(use_reactive((&size_y,), move |(size_y,)| {
        if *current.peek() != size_y {
            tracing::debug!(%size_y, "sizeY changed");
            current.set(size_y);
        }
    }));

    rsx! {
        {children}
    }
}
