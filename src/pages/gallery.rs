//! Gallery page - every component in its main configurations.
//!
//! Sections:
//! - toolbar switching platform and density for the whole page
//! - one field per status
//! - an uncontrolled switch reporting its last value
//! - a controlled switch flipped from outside
//! - a plain form mixing both components

use dioxus::prelude::*;
use trellis_ui::{
    use_platform, use_size_y, FieldCaption, FieldStatus, FieldTag, FieldWrapper, OptionSlot, OptionValue,
    Platform, SizeY, SwitchOption, SwitchOptions, ToggleSwitch,
};

/// Props for the Gallery page
#[derive(Props, Clone, PartialEq)]
pub struct GalleryProps {
    /// Status of the highlighted field
    pub status: FieldStatus,
    /// Options of the demo switches
    pub options: SwitchOptions,
    /// Handler called when a platform is picked
    pub on_platform: EventHandler<Platform>,
    /// Handler called when a density is picked
    pub on_size_y: EventHandler<SizeY>,
}

/// Options of the density switch in the toolbar
fn density_options() -> SwitchOptions {
    SwitchOptions::new(
        SwitchOption::new("Compact", SizeY::Compact.as_str()),
        SwitchOption::new("Regular", SizeY::Regular.as_str()),
    )
    .unwrap_or_default()
}

/// Hint shown under a field for each status
fn status_hint(status: FieldStatus) -> &'static str {
    match status {
        FieldStatus::Default => "Shown as you type",
        FieldStatus::Error => "This address is already taken",
        FieldStatus::Valid => "Looks good",
    }
}

#[component]
pub fn Gallery(props: GalleryProps) -> Element {
    let platform = use_platform();
    let size_y = use_size_y();

    let mut last_switched: Signal<Option<OptionValue>> = use_signal(|| None);
    let mut controlled: Signal<Option<OptionValue>> =
        use_signal(|| Some(props.options.first().value.clone()));

    let mut notify: Signal<Option<OptionValue>> = use_signal(|| Some(OptionValue::from(1)));

    let flip_options = props.options.clone();
    let flip_from_outside = move |_| {
        let next = controlled()
            .and_then(|value| flip_options.slot_of(&value))
            .map(|slot| slot.other())
            .unwrap_or(OptionSlot::First);
        let value = flip_options.get(next).value.clone();
        tracing::info!(%value, "controlled switch flipped by parent");
        controlled.set(Some(value));
    };

    let last_label = match last_switched() {
        Some(value) => format!("last switched: {}", value),
        None => "nothing selected yet".to_string(),
    };

    let on_size_y = props.on_size_y;

    rsx! {
        main { class: "gallery",
            header { class: "gallery-header",
                h1 { class: "gallery-title", "Trellis" }
                p { class: "gallery-tagline", "form fields and toggle switches" }
            }

            // Toolbar
            section { class: "gallery-toolbar",
                div { class: "gallery-chips",
                    for p in Platform::ALL {
                        button {
                            key: "{p}",
                            class: if p == platform { "gallery-chip selected" } else { "gallery-chip" },
                            onclick: move |_| props.on_platform.call(p),
                            "{p}"
                        }
                    }
                }
                ToggleSwitch {
                    options: density_options(),
                    active_value: Some(OptionValue::from(size_y.as_str())),
                    name: "sizeY".to_string(),
                    on_switch: move |value: OptionValue| {
                        match value.to_string().parse::<SizeY>() {
                            Ok(s) => on_size_y.call(s),
                            Err(e) => tracing::warn!("{}", e),
                        }
                    },
                }
            }

            // Statuses
            section { class: "gallery-section",
                h2 { class: "gallery-section-title", "Statuses" }
                for status in FieldStatus::ALL {
                    FieldWrapper {
                        key: "{status}",
                        top: FieldCaption::from(format!("E-mail ({})", status)),
                        bottom: FieldCaption::from(status_hint(status)),
                        status: status,
                        input { class: "gallery-input", r#type: "email", placeholder: "name@example.com" }
                    }
                }
                FieldWrapper {
                    top: FieldCaption::from("From the command line"),
                    bottom: FieldCaption::from(format!("status = {}", props.status)),
                    status: props.status,
                    class: "gallery-highlight",
                    input { class: "gallery-input", r#type: "text" }
                }
                FieldWrapper {
                    top: FieldCaption::from("No captions below"),
                    bottom: FieldCaption::from(""),
                    input { class: "gallery-input", r#type: "text" }
                }
            }

            // Uncontrolled switch
            section { class: "gallery-section",
                h2 { class: "gallery-section-title", "Uncontrolled" }
                ToggleSwitch {
                    options: props.options.clone(),
                    name: "uncontrolled".to_string(),
                    on_switch: move |value: OptionValue| last_switched.set(Some(value)),
                }
                p { class: "gallery-note", "{last_label}" }
            }

            // Controlled switch
            section { class: "gallery-section",
                h2 { class: "gallery-section-title", "Controlled" }
                ToggleSwitch {
                    options: props.options.clone(),
                    active_value: controlled(),
                    name: "controlled".to_string(),
                    on_switch: move |value: OptionValue| controlled.set(Some(value)),
                }
                button { class: "gallery-chip", onclick: flip_from_outside, "flip from parent" }
            }

            // Form
            section { class: "gallery-section",
                h2 { class: "gallery-section-title", "In a form" }
                form {
                    onsubmit: move |evt: FormEvent| {
                        tracing::info!("form submitted: {:?}", evt.values());
                    },
                    FieldWrapper {
                        tag: FieldTag::Fieldset,
                        top: FieldCaption::from("Billing period"),
                        bottom: FieldCaption::from(rsx! {
                            "Yearly saves two months. "
                            a { href: "https://example.com/pricing", "See pricing" }
                        }),
                        ToggleSwitch {
                            options: props.options.clone(),
                            name: "period".to_string(),
                        }
                    }
                    FieldWrapper {
                        top: FieldCaption::from("Notifications"),
                        ToggleSwitch {
                            options: SwitchOptions::new(
                                SwitchOption::new("Off", 0),
                                SwitchOption::new("On", 1),
                            ).unwrap_or_default(),
                            active_value: notify(),
                            name: "notify".to_string(),
                            on_switch: move |value: OptionValue| notify.set(Some(value)),
                        }
                    }
                    button { class: "gallery-chip", r#type: "submit", "submit" }
                }
                p { class: "gallery-note",
                    "Focus a switch and press Enter or Space to flip it."
                }
            }
        }
    }
}

