//! Form field wrapper model.
//!
//! The wrapper has no state; everything it renders is derived from its
//! inputs by [`FieldLayout::build`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::class_list::{platform_class, ClassList};
use crate::error::TrellisError;
use crate::platform::{Platform, SizeY};

/// Root class of the field wrapper
pub const FIELD_CLASS: &str = "FormItem";
/// Class of the top caption
pub const FIELD_TOP_CLASS: &str = "FormItem__top";
/// Class of the bottom caption
pub const FIELD_BOTTOM_CLASS: &str = "FormItem__bottom";

/// Validation status shown by a field
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    #[default]
    Default,
    Error,
    Valid,
}

impl FieldStatus {
    pub const ALL: [FieldStatus; 3] = [FieldStatus::Default, FieldStatus::Error, FieldStatus::Valid];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldStatus::Default => "default",
            FieldStatus::Error => "error",
            FieldStatus::Valid => "valid",
        }
    }

    /// Status modifier class, e.g. `FormItem--error`
    pub fn class(&self) -> String {
        format!("{}--{}", FIELD_CLASS, self.as_str())
    }

    /// Parse a status, falling back to [`FieldStatus::Default`] on unknown text.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|e: TrellisError| {
            tracing::warn!("{}, using default styling", e);
            FieldStatus::Default
        })
    }
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldStatus {
    type Err = TrellisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TrellisError::UnknownStatus(s.to_string()))
    }
}

/// Caption content that can be blank.
///
/// Text is blank when empty. Renderers implement this for their own node
/// types so rich captions follow the same presence rule.
pub trait CaptionContent {
    fn is_blank(&self) -> bool;
}

impl CaptionContent for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl CaptionContent for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// Whether a caption should be rendered.
///
/// Missing and blank captions are skipped. Anything else counts, `"0"` included.
pub fn has_content<C: CaptionContent + ?Sized>(caption: Option<&C>) -> bool {
    caption.is_some_and(|c| !c.is_blank())
}

/// Inputs that decide how a field wrapper renders
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldInputs<'a> {
    /// Top caption supplied and not blank, see [`has_content`]
    pub has_top: bool,
    /// Bottom caption supplied and not blank
    pub has_bottom: bool,
    pub status: FieldStatus,
    pub platform: Platform,
    pub size_y: SizeY,
    pub class: Option<&'a str>,
}

/// What a field wrapper renders for a given set of inputs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    pub classes: ClassList,
    pub show_top: bool,
    pub show_bottom: bool,
}

impl FieldLayout {
    pub fn build(inputs: &FieldInputs<'_>) -> Self {
        let classes = platform_class(FIELD_CLASS, inputs.platform)
            .add(inputs.status.class())
            .add(format!("{}--sizeY-{}", FIELD_CLASS, inputs.size_y.as_str()))
            .add_opt(inputs.class);

        Self {
            classes,
            show_top: inputs.has_top,
            show_bottom: inputs.has_bottom,
        }
    }
}
