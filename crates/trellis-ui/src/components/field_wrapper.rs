//! Field Wrapper Component
//!
//! Wraps a form control with an optional caption above (label) and below
//! (hint or validation message). The root carries status and density
//! classes:
//! - `FormItem--default`, `FormItem--error`, `FormItem--valid`
//! - `FormItem--sizeY-compact`, `FormItem--sizeY-regular`

use dioxus::dioxus_core::{DynamicNode, TemplateNode, VNode};
use dioxus::prelude::*;
use trellis_core::field::{
    has_content, CaptionContent, FieldInputs, FieldLayout, FieldStatus, FIELD_BOTTOM_CLASS,
    FIELD_TOP_CLASS,
};

use super::typography::{Caption, Subhead, Weight};
use crate::context::{use_platform, use_size_y};

/// Element used as the wrapper root
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FieldTag {
    #[default]
    Div,
    Label,
    Fieldset,
    Section,
    Li,
}

impl FieldTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldTag::Div => "div",
            FieldTag::Label => "label",
            FieldTag::Fieldset => "fieldset",
            FieldTag::Section => "section",
            FieldTag::Li => "li",
        }
    }
}

/// Caption of a field: plain text or any markup
#[derive(Clone, PartialEq)]
pub enum FieldCaption {
    Text(String),
    Node(Element),
}

impl FieldCaption {
    fn render(&self) -> Element {
        match self {
            FieldCaption::Text(text) => rsx! { "{text}" },
            FieldCaption::Node(node) => node.clone(),
        }
    }
}

impl From<&str> for FieldCaption {
    fn from(text: &str) -> Self {
        FieldCaption::Text(text.to_string())
    }
}

impl From<String> for FieldCaption {
    fn from(text: String) -> Self {
        FieldCaption::Text(text)
    }
}

impl From<Element> for FieldCaption {
    fn from(node: Element) -> Self {
        FieldCaption::Node(node)
    }
}

impl CaptionContent for FieldCaption {
    fn is_blank(&self) -> bool {
        match self {
            FieldCaption::Text(text) => text.is_empty(),
            FieldCaption::Node(Ok(node)) => is_blank_node(node),
            FieldCaption::Node(Err(_)) => false,
        }
    }
}

/// Whether a node renders nothing: placeholders, empty text, empty fragments
fn is_blank_node(node: &VNode) -> bool {
    node.template.roots.iter().all(|root| match root {
        TemplateNode::Text { text } => text.is_empty(),
        TemplateNode::Dynamic { id } => node.dynamic_nodes.get(*id).map_or(true, is_blank_dynamic),
        _ => false,
    })
}

fn is_blank_dynamic(node: &DynamicNode) -> bool {
    match node {
        DynamicNode::Placeholder(_) => true,
        DynamicNode::Text(text) => text.value.is_empty(),
        DynamicNode::Fragment(nodes) => nodes.iter().all(is_blank_node),
        _ => false,
    }
}

/// Properties for the FieldWrapper component
#[derive(Clone, PartialEq, Props)]
pub struct FieldWrapperProps {
    /// Caption above the control
    #[props(default)]
    pub top: Option<FieldCaption>,
    /// Caption below the control
    #[props(default)]
    pub bottom: Option<FieldCaption>,
    /// Validation status
    #[props(default)]
    pub status: FieldStatus,
    /// Root element
    #[props(default)]
    pub tag: FieldTag,
    /// Passthrough attributes; `class` is appended to the computed classes
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Labeled container for a form control
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FieldWrapper {
///         top: FieldCaption::from("E-mail"),
///         bottom: FieldCaption::from(rsx! {
///             "We never share it. "
///             a { href: "/privacy", "Privacy" }
///         }),
///         status: FieldStatus::Valid,
///         class: "signup-email",
///         input { r#type: "email" }
///     }
/// }
/// ```
#[component]
pub fn FieldWrapper(props: FieldWrapperProps) -> Element {
    let platform = use_platform();
    let size_y = use_size_y();
    let mut attributes = props.attributes;
    let extra_class = super::take_class(&mut attributes);

    let layout = FieldLayout::build(&FieldInputs {
        has_top: has_content(props.top.as_ref()),
        has_bottom: has_content(props.bottom.as_ref()),
        status: props.status,
        platform,
        size_y,
        class: extra_class.as_deref(),
    });
    let class = layout.classes.to_string();
    let top = props.top.as_ref().map(FieldCaption::render);
    let bottom = props.bottom.as_ref().map(FieldCaption::render);

    let body = rsx! {
        if let Some(top) = top.filter(|_| layout.show_top) {
            Subhead { weight: Weight::Regular, class: FIELD_TOP_CLASS.to_string(), {top} }
        }
        {props.children}
        if let Some(bottom) = bottom.filter(|_| layout.show_bottom) {
            Caption { level: 1, weight: Weight::Regular, class: FIELD_BOTTOM_CLASS.to_string(), {bottom} }
        }
    };

    match props.tag {
        FieldTag::Div => rsx! {
            div { ..attributes, class: "{class}", {body} }
        },
        FieldTag::Label => rsx! {
            label { ..attributes, class: "{class}", {body} }
        },
        FieldTag::Fieldset => rsx! {
            fieldset { ..attributes, class: "{class}", {body} }
        },
        FieldTag::Section => rsx! {
            section { ..attributes, class: "{class}", {body} }
        },
        FieldTag::Li => rsx! {
            li { ..attributes, class: "{class}", {body} }
        },
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::dioxus_core::VirtualDom;

    use super::*;

    fn caption_presence(results: Rc<RefCell<Vec<bool>>>) -> Element {
        let captions = [
            FieldCaption::from(VNode::empty()),
            FieldCaption::from(rsx! {}),
            FieldCaption::from(rsx! { "" }),
            FieldCaption::from(rsx! {
                "See "
                a { href: "/help", "help" }
            }),
            FieldCaption::from(""),
            FieldCaption::from("0"),
        ];
        results
            .borrow_mut()
            .extend(captions.iter().map(|caption| has_content(Some(caption))));

        rsx! {}
    }

    #[test]
    fn caption_presence_covers_elements() {
        let results = Rc::new(RefCell::new(Vec::new()));
        let mut dom = VirtualDom::new_with_props(caption_presence, results.clone());
        dom.rebuild_in_place();

        assert_eq!(*results.borrow(), vec![false, false, false, true, false, true]);
    }

    #[test]
    fn missing_caption_is_absent() {
        assert!(!has_content(None::<&FieldCaption>));
        assert!(has_content(Some(&FieldCaption::from("Name"))));
    }

    #[test]
    fn field_tag_names() {
        assert_eq!(FieldTag::Div.as_str(), "div");
        assert_eq!(FieldTag::Label.as_str(), "label");
        assert_eq!(FieldTag::Fieldset.as_str(), "fieldset");
        assert_eq!(FieldTag::Section.as_str(), "section");
        assert_eq!(FieldTag::Li.as_str(), "li");
    }

    #[test]
    fn field_tag_default_is_div() {
        assert_eq!(FieldTag::default(), FieldTag::Div);
    }
}
