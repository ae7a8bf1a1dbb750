//! Switch options and their validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TrellisError, TrellisResult};

/// Identity of a switch option.
///
/// Deserializes from either a JSON string or a JSON integer.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(i64),
    Text(String),
}

impl Default for OptionValue {
    fn default() -> Self {
        OptionValue::Text(String::new())
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{}", n),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Number(n)
    }
}

/// Position of an option within the pair
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum OptionSlot {
    First,
    Second,
}

impl OptionSlot {
    pub const BOTH: [OptionSlot; 2] = [OptionSlot::First, OptionSlot::Second];

    pub fn index(&self) -> usize {
        match self {
            OptionSlot::First => 0,
            OptionSlot::Second => 1,
        }
    }

    pub fn other(&self) -> OptionSlot {
        match self {
            OptionSlot::First => OptionSlot::Second,
            OptionSlot::Second => OptionSlot::First,
        }
    }
}

/// A labeled option
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct SwitchOption {
    /// Display label
    pub name: String,
    pub value: OptionValue,
}

impl SwitchOption {
    pub fn new(name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The two options of a toggle switch.
///
/// Built through [`SwitchOptions::new`] or `TryFrom<Vec<SwitchOption>>`, both
/// of which reject equal values. The [`Default`] placeholder pair is the one
/// exception: two empty options sharing the empty value. Lookups by value
/// resolve to the first matching slot.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SwitchOptions {
    first: SwitchOption,
    second: SwitchOption,
}

impl SwitchOptions {
    pub fn new(first: SwitchOption, second: SwitchOption) -> TrellisResult<Self> {
        if first.value == second.value {
            return Err(TrellisError::DuplicateOptionValue(first.value.to_string()));
        }
        Ok(Self { first, second })
    }

    pub fn first(&self) -> &SwitchOption {
        &self.first
    }

    pub fn second(&self) -> &SwitchOption {
        &self.second
    }

    pub fn get(&self, slot: OptionSlot) -> &SwitchOption {
        match slot {
            OptionSlot::First => &self.first,
            OptionSlot::Second => &self.second,
        }
    }

    /// First slot whose option carries `value`
    pub fn slot_of(&self, value: &OptionValue) -> Option<OptionSlot> {
        OptionSlot::BOTH
            .into_iter()
            .find(|slot| self.get(*slot).value == *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (OptionSlot, &SwitchOption)> {
        OptionSlot::BOTH.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

impl TryFrom<Vec<SwitchOption>> for SwitchOptions {
    type Error = TrellisError;

    fn try_from(options: Vec<SwitchOption>) -> Result<Self, Self::Error> {
        let len = options.len();
        let mut iter = options.into_iter();
        match (iter.next(), iter.next(), iter.next()) {
            (Some(first), Some(second), None) => SwitchOptions::new(first, second),
            (_, _, Some(_)) => Err(TrellisError::TooManyOptions(len)),
            _ => Err(TrellisError::TooFewOptions(len)),
        }
    }
}
