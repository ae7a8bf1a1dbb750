use dioxus::prelude::*;
use trellis_ui::{AdaptivityProvider, Platform, PlatformProvider, SizeY};

use crate::context::get_settings;
use crate::pages::Gallery;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles plus the platform and density contexts. Both can
/// be changed from the gallery toolbar.
#[component]
pub fn App() -> Element {
    let settings = use_hook(get_settings);
    let mut platform = use_signal(|| settings.platform);
    let mut size_y = use_signal(|| settings.size_y);

    rsx! {
        style { {GLOBAL_STYLES} }
        PlatformProvider { platform: platform(),
            AdaptivityProvider { size_y: size_y(),
                Gallery {
                    status: settings.status,
                    options: settings.options.clone(),
                    on_platform: move |p: Platform| platform.set(p),
                    on_size_y: move |s: SizeY| size_y.set(s),
                }
            }
        }
    }
}
