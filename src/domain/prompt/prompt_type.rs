//! Prompt type value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidPromptTypeError;

/// All available prompt types
pub const ALL_PROMPT_TYPES: &[PromptType] = &[
    PromptType::Transcript,
    PromptType::Timestamps,
    PromptType::Summary,
    PromptType::Scene,
    PromptType::Clips,
    PromptType::Fallback,
];

/// Prompt type identifiers, each bound to one instruction template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PromptType {
    #[default]
    Transcript,
    Timestamps,
    Summary,
    Scene,
    Clips,
    Fallback,
}

impl PromptType {
    /// Resolve an identifier to a prompt type.
    ///
    /// Matching is exact and case-sensitive. Anything that is not one of the
    /// six identifiers, including `None` and the empty string, resolves to
    /// [`PromptType::Fallback`].
    pub fn resolve(identifier: Option<&str>) -> Self {
        match identifier.and_then(Self::from_identifier) {
            Some(prompt_type) => prompt_type,
            None => Self::Fallback,
        }
    }

    /// Exact identifier lookup
    fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "transcript" => Some(Self::Transcript),
            "timestamps" => Some(Self::Timestamps),
            "summary" => Some(Self::Summary),
            "scene" => Some(Self::Scene),
            "clips" => Some(Self::Clips),
            "fallback" => Some(Self::Fallback),
            _ => None,
        }
    }

    /// Get the human-readable label for this prompt type
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Transcript => "Verbatim transcript",
            Self::Timestamps => "Timestamped transcript",
            Self::Summary => "Nested bullet summary",
            Self::Scene => "Scene description",
            Self::Clips => "Shareable clip suggestions",
            Self::Fallback => "Actionable insights summary",
        }
    }

    /// Get the string identifier for this prompt type
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Transcript => "transcript",
            Self::Timestamps => "timestamps",
            Self::Summary => "summary",
            Self::Scene => "scene",
            Self::Clips => "clips",
            Self::Fallback => "fallback",
        }
    }
}

impl FromStr for PromptType {
    type Err = InvalidPromptTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s.trim().to_lowercase().as_str()).ok_or_else(|| {
            InvalidPromptTypeError {
                input: s.to_string(),
            }
        })
    }
}

impl fmt::Display for PromptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_all_identifiers() {
        for prompt_type in ALL_PROMPT_TYPES {
            assert_eq!(
                PromptType::resolve(Some(prompt_type.as_str())),
                *prompt_type
            );
        }
    }

    #[test]
    fn resolve_unknown_is_fallback() {
        assert_eq!(PromptType::resolve(Some("bogus")), PromptType::Fallback);
        assert_eq!(PromptType::resolve(Some("")), PromptType::Fallback);
        assert_eq!(PromptType::resolve(None), PromptType::Fallback);
    }

    #[test]
    fn resolve_is_case_sensitive() {
        assert_eq!(PromptType::resolve(Some("Summary")), PromptType::Fallback);
        assert_eq!(PromptType::resolve(Some("SCENE")), PromptType::Fallback);
        assert_eq!(PromptType::resolve(Some(" clips")), PromptType::Fallback);
    }

    #[test]
    fn parse_case_insensitive_with_whitespace() {
        assert_eq!("SUMMARY".parse::<PromptType>().unwrap(), PromptType::Summary);
        assert_eq!("  clips  ".parse::<PromptType>().unwrap(), PromptType::Clips);
    }

    #[test]
    fn parse_invalid() {
        let err = "bogus".parse::<PromptType>().unwrap_err();
        assert_eq!(err.input, "bogus");
        assert!("".parse::<PromptType>().is_err());
    }

    #[test]
    fn display_matches_identifier() {
        assert_eq!(PromptType::Timestamps.to_string(), "timestamps");
        assert_eq!(PromptType::Fallback.to_string(), "fallback");
    }

    #[test]
    fn labels_not_empty() {
        for prompt_type in ALL_PROMPT_TYPES {
            assert!(!prompt_type.label().is_empty());
        }
    }

    #[test]
    fn all_prompt_types_constant() {
        assert_eq!(ALL_PROMPT_TYPES.len(), 6);
    }

    #[test]
    fn default_is_transcript() {
        assert_eq!(PromptType::default(), PromptType::Transcript);
    }
}
