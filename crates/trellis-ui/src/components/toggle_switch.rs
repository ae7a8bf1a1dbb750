//! Toggle Switch Component
//!
//! Two mutually exclusive options with a sliding indicator behind the
//! active one. Works controlled (`active_value` from the parent) or
//! uncontrolled. Enter and Space flip to the other option and move focus
//! to its button.

use std::rc::Rc;

use dioxus::prelude::*;
use trellis_core::switch::view::{button_classes, SWITCH_BORDER_CLASS};
use trellis_core::switch::{OptionSlot, OptionValue, SwitchOptions, SwitchState, SwitchView, Transition};

/// Properties for the ToggleSwitch component
#[derive(Clone, PartialEq, Props)]
pub struct ToggleSwitchProps {
    /// The two options, in display order
    #[props(default)]
    pub options: SwitchOptions,
    /// Externally controlled value; when supplied it always overrides local state
    #[props(default)]
    pub active_value: Option<OptionValue>,
    /// Name of the hidden form field mirroring the active value
    #[props(default)]
    pub name: Option<String>,
    /// Handler called with the newly active value
    #[props(default)]
    pub on_switch: Option<EventHandler<OptionValue>>,
    /// Passthrough attributes; `class` is appended to `SliderSwitch`
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

/// Two-option switch
///
/// # Example
///
/// ```rust,ignore
/// let options = SwitchOptions::new(
///     SwitchOption::new("Monthly", "month"),
///     SwitchOption::new("Yearly", "year"),
/// )?;
/// let mut period = use_signal(|| Some(OptionValue::from("month")));
///
/// rsx! {
///     ToggleSwitch {
///         options: options,
///         active_value: period(),
///         name: "period".to_string(),
///         on_switch: move |value| period.set(Some(value)),
///     }
/// }
/// ```
#[component]
pub fn ToggleSwitch(props: ToggleSwitchProps) -> Element {
    let mut state = use_signal(|| SwitchState::new(props.active_value.clone()));
    let first_button: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let second_button: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let on_switch = props.on_switch;
    let apply = move |transition: Transition| -> bool {
        transition.dispatch(
            |value| {
                if let Some(handler) = on_switch {
                    handler.call(value);
                }
            },
            |slot| {
                let target = match slot {
                    OptionSlot::First => first_button,
                    OptionSlot::Second => second_button,
                };
                focus_button((*target.peek()).clone(), slot);
            },
        )
    };

    // The parent's value wins on every render and before every event
    let mut attributes = props.attributes;
    let extra_class = super::take_class(&mut attributes);
    let shown = state.read().reconciled(props.active_value.as_ref());
    let view = SwitchView::build(&props.options, &shown, extra_class.as_deref());
    let root_class = view.classes.to_string();
    let slider_class = view.slider_classes.to_string();

    let key_options = props.options.clone();
    let key_external = props.active_value.clone();
    let on_keydown = move |evt: KeyboardEvent| {
        let key = evt.key().to_string();
        let transition = {
            let mut current = state.write();
            current.sync_external(key_external.as_ref());
            current.toggle_by_key(&key_options, &key)
        };
        if apply(transition) {
            evt.prevent_default();
        }
    };

    rsx! {
        div {
            ..attributes,
            class: "{root_class}",
            onkeydown: on_keydown,
            onmouseleave: move |_| state.write().leave(),
            if view.show_border {
                div { class: SWITCH_BORDER_CLASS }
            }
            div { class: "{slider_class}" }
            input {
                r#type: "hidden",
                name: props.name.clone(),
                value: "{view.hidden_value}",
            }
            for button in view.buttons.iter() {
                {
                    let slot = button.slot;
                    let options = props.options.clone();
                    let external = props.active_value.clone();
                    let mut handle = match slot {
                        OptionSlot::First => first_button,
                        OptionSlot::Second => second_button,
                    };
                    rsx! {
                        ToggleSwitchButton {
                            key: "{slot.index()}",
                            active: button.active,
                            hovered: button.hovered,
                            onclick: move |_| {
                                let transition = {
                                    let mut current = state.write();
                                    current.sync_external(external.as_ref());
                                    current.select(&options, slot)
                                };
                                apply(transition);
                            },
                            onmouseenter: move |_| state.write().hover(slot),
                            onmounted: move |data: Rc<MountedData>| handle.set(Some(data)),
                            "{button.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Move input focus to an option button once it is mounted
fn focus_button(target: Option<Rc<MountedData>>, slot: OptionSlot) {
    let Some(element) = target else {
        tracing::warn!(?slot, "focus requested before button mounted");
        return;
    };

    spawn(async move {
        if let Err(e) = element.set_focus(true).await {
            tracing::error!(?slot, error = ?e, "failed to focus switch button");
        }
    });
}

/// Properties for a single option button
#[derive(Clone, PartialEq, Props)]
pub struct ToggleSwitchButtonProps {
    #[props(default = false)]
    pub active: bool,
    #[props(default = false)]
    pub hovered: bool,
    pub onclick: EventHandler<()>,
    pub onmouseenter: EventHandler<()>,
    /// Receives the mounted element, used for focus redirection
    #[props(default)]
    pub onmounted: Option<EventHandler<Rc<MountedData>>>,
    pub children: Element,
}

/// One option of a [`ToggleSwitch`]
#[component]
pub fn ToggleSwitchButton(props: ToggleSwitchButtonProps) -> Element {
    let classes = button_classes(props.active, props.hovered);

    rsx! {
        div {
            class: "{classes}",
            role: "button",
            tabindex: "0",
            "aria-pressed": if props.active { "true" } else { "false" },
            onclick: move |_| props.onclick.call(()),
            onmouseenter: move |_| props.onmouseenter.call(()),
            onmounted: move |evt: MountedEvent| {
                if let Some(handler) = &props.onmounted {
                    handler.call(evt.data());
                }
            },
            {props.children}
        }
    }
}
