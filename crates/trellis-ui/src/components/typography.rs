//! Typography helpers used for field captions.

use dioxus::prelude::*;
use trellis_core::ClassList;

/// Font weight variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Weight {
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl Weight {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weight::Regular => "regular",
            Weight::Medium => "medium",
            Weight::Semibold => "semibold",
            Weight::Bold => "bold",
        }
    }
}

/// Classes for a subhead of the given weight
pub fn subhead_classes(weight: Weight, class: Option<&str>) -> ClassList {
    ClassList::new()
        .add("Subhead")
        .add(format!("Subhead--w-{}", weight.as_str()))
        .add_opt(class)
}

/// Classes for a caption of the given level and weight
pub fn caption_classes(level: u8, weight: Weight, class: Option<&str>) -> ClassList {
    ClassList::new()
        .add("Caption")
        .add(format!("Caption--l-{}", level.clamp(1, 4)))
        .add(format!("Caption--w-{}", weight.as_str()))
        .add_opt(class)
}

/// Properties for the Subhead component
#[derive(Clone, PartialEq, Props)]
pub struct SubheadProps {
    #[props(default)]
    pub weight: Weight,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Small heading, used for the caption above a field
#[component]
pub fn Subhead(props: SubheadProps) -> Element {
    let classes = subhead_classes(props.weight, props.class.as_deref());

    rsx! {
        h5 { class: "{classes}", {props.children} }
    }
}

/// Properties for the Caption component
#[derive(Clone, PartialEq, Props)]
pub struct CaptionProps {
    /// Size level, 1 (largest) to 4
    #[props(default = 1)]
    pub level: u8,
    #[props(default)]
    pub weight: Weight,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Fine print, used for the hint or error below a field
#[component]
pub fn Caption(props: CaptionProps) -> Element {
    let classes = caption_classes(props.level, props.weight, props.class.as_deref());

    rsx! {
        span { class: "{classes}", {props.children} }
    }
}
