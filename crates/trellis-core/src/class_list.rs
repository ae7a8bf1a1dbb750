//! Class name joining.
//!
//! Components build their `class` attribute from a handful of fixed names,
//! conditional modifiers and whatever the caller passes through. Empty
//! parts are skipped so the result never carries stray spaces.

use std::fmt;

use crate::platform::Platform;

/// Ordered list of CSS class names
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class name. Empty and whitespace-only names are ignored.
    pub fn add(mut self, class: impl AsRef<str>) -> Self {
        let class = class.as_ref().trim();
        if !class.is_empty() {
            self.classes.push(class.to_string());
        }
        self
    }

    /// Append a class name only when `condition` holds
    pub fn add_if(self, condition: bool, class: impl AsRef<str>) -> Self {
        if condition {
            self.add(class)
        } else {
            self
        }
    }

    /// Append an optional class name, typically a caller-supplied `class` prop
    pub fn add_opt(self, class: Option<impl AsRef<str>>) -> Self {
        match class {
            Some(class) => self.add(class),
            None => self,
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

/// Base class plus its platform variant, e.g. `FormItem FormItem--ios`
pub fn platform_class(base: &str, platform: Platform) -> ClassList {
    ClassList::new()
        .add(base)
        .add(format!("{}--{}", base, platform.as_str()))
}
