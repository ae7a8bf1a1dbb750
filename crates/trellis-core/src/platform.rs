//! Platform and density tags.
//!
//! Both are supplied by providers higher up the tree and only ever end up
//! in class names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrellisError;

/// Host platform, selects the styling variant
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Android,
    Ios,
    Vkcom,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Android, Platform::Ios, Platform::Vkcom];

    /// Returns the tag used as a class suffix
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Vkcom => "vkcom",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = TrellisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TrellisError::UnknownPlatform(s.to_string()))
    }
}

/// Vertical density variant from the adaptivity provider
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeY {
    Compact,
    #[default]
    Regular,
}

impl SizeY {
    pub const ALL: [SizeY; 2] = [SizeY::Compact, SizeY::Regular];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeY::Compact => "compact",
            SizeY::Regular => "regular",
        }
    }
}

impl fmt::Display for SizeY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeY {
    type Err = TrellisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SizeY::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TrellisError::UnknownSizeY(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_tags() {
        assert_eq!(Platform::Android.as_str(), "android");
        assert_eq!(Platform::Ios.as_str(), "ios");
        assert_eq!(Platform::Vkcom.as_str(), "vkcom");
    }

    #[test]
    fn platform_parse() {
        assert_eq!("ios".parse::<Platform>().unwrap(), Platform::Ios);
        assert_eq!(" VKCOM ".parse::<Platform>().unwrap(), Platform::Vkcom);
        assert!(matches!(
            "windows".parse::<Platform>(),
            Err(TrellisError::UnknownPlatform(_))
        ));
    }

    #[test]
    fn size_y_parse_and_default() {
        assert_eq!(SizeY::default(), SizeY::Regular);
        assert_eq!("compact".parse::<SizeY>().unwrap(), SizeY::Compact);
        assert!(matches!("tiny".parse::<SizeY>(), Err(TrellisError::UnknownSizeY(_))));
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        assert_eq!(serde_json::to_string(&Platform::Ios).unwrap(), "\"ios\"");
        let size: SizeY = serde_json::from_str("\"compact\"").unwrap();
        assert_eq!(size, SizeY::Compact);
    }
}
