//! Trellis components
//!
//! All components render plain class names (`FormItem`, `SliderSwitch`,
//! `Subhead`, `Caption`) and leave the look to the stylesheet.

use dioxus::dioxus_core::AttributeValue;
use dioxus::prelude::*;

mod field_wrapper;
mod toggle_switch;
mod typography;

pub use field_wrapper::*;
pub use toggle_switch::*;
pub use typography::*;

/// Pull caller-supplied `class` values out of spread attributes.
///
/// Components compute their own class list and append these to it, so the
/// root element ends up with a single `class` attribute.
pub(crate) fn take_class(attributes: &mut Vec<Attribute>) -> Option<String> {
    let mut classes = Vec::new();
    attributes.retain(|attr| {
        if attr.name != "class" {
            return true;
        }
        if let AttributeValue::Text(text) = &attr.value {
            classes.push(text.clone());
        }
        false
    });

    if classes.is_empty() {
        None
    } else {
        Some(classes.join(" "))
    }
}
