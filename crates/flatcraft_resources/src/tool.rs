//! # Tool Types
//!
//! The capability a resource requires before a hit has any effect.
//! Gating happens in the caller (player/world layer), never in `Resource`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ResourceError;

/// Tool capability tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ToolType {
    /// No tool required (on a resource) or bare hands (on a player).
    #[default]
    None = 0,
    /// Stone, ores.
    Pickaxe = 1,
    /// Wood, leaves.
    Axe = 2,
    /// Dirt, sand, grass.
    Shovel = 3,
}

impl ToolType {
    /// All tool types, in declaration order.
    pub const ALL: [Self; 4] = [Self::None, Self::Pickaxe, Self::Axe, Self::Shovel];

    /// Returns the lowercase name used in catalogue files.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pickaxe => "pickaxe",
            Self::Axe => "axe",
            Self::Shovel => "shovel",
        }
    }

    /// Returns true if a player holding `held` may dig a resource requiring `self`.
    ///
    /// A resource requiring [`ToolType::None`] accepts any tool.
    #[inline]
    #[must_use]
    pub const fn accepts(self, held: Self) -> bool {
        matches!(self, Self::None) || self as u8 == held as u8
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolType {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ResourceError::InvalidConfig(format!("unknown tool type: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_accepts_everything() {
        for held in ToolType::ALL {
            assert!(ToolType::None.accepts(held));
        }
    }

    #[test]
    fn test_specific_tool_only_accepts_itself() {
        assert!(ToolType::Pickaxe.accepts(ToolType::Pickaxe));
        assert!(!ToolType::Pickaxe.accepts(ToolType::Axe));
        assert!(!ToolType::Pickaxe.accepts(ToolType::None));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Shovel".parse::<ToolType>(), Ok(ToolType::Shovel));
        assert_eq!("none".parse::<ToolType>(), Ok(ToolType::None));
        assert!("hammer".parse::<ToolType>().is_err());
    }

    #[test]
    fn test_display_matches_catalogue_name() {
        for tool in ToolType::ALL {
            assert_eq!(tool.to_string(), tool.as_str());
        }
    }
}
