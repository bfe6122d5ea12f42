//! Bubble configuration, with TOML loading

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::layout::BubbleLayout;
use crate::placement::{self, ResolvedPlacement};
use crate::types::{Insets, NipLocation};

/// Red accent (#FF5252)
pub const DEFAULT_COLOR: [f32; 4] = [1.0, 82.0 / 255.0, 82.0 / 255.0, 1.0];

/// Everything that shapes a bubble apart from its child content.
///
/// Every key is optional in a config file:
///
/// ```toml
/// nip_location = "top-right"
/// color = [0.2, 0.4, 1.0, 1.0]
/// border_radius = 6.0
/// padding = { left = 12.0, right = 12.0, top = 6.0, bottom = 6.0 }
/// offset = [-4.0, 0.0]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpeechBubbleConfig {
    pub nip_location: NipLocation,
    /// Body and nip color [r, g, b, a] in 0.0-1.0 range
    pub color: [f32; 4],
    pub border_radius: f32,
    /// Shadow depth (0 for no shadow)
    pub elevation: f32,
    /// Fixed body height; sized to the child when unset
    pub height: Option<f32>,
    /// Fixed body width; sized to the child when unset
    pub width: Option<f32>,
    pub padding: Insets,
    pub nip_height: f32,
    pub nip_width: f32,
    /// Extra nip translation, only applied at corner locations
    pub offset: [f32; 2],
}

impl Default for SpeechBubbleConfig {
    fn default() -> Self {
        Self {
            nip_location: NipLocation::default(),
            color: DEFAULT_COLOR,
            border_radius: 4.0,
            elevation: 1.0,
            height: None,
            width: None,
            padding: Insets::default(),
            nip_height: 10.0,
            nip_width: 6.0,
            offset: [0.0, 0.0],
        }
    }
}

impl SpeechBubbleConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::debug!(
            "Loaded bubble config from {}: nip={}",
            path.display(),
            config.nip_location
        );
        Ok(config)
    }

    /// Nip placement for this config
    pub fn placement(&self) -> ResolvedPlacement {
        placement::resolve(
            self.nip_location,
            self.nip_width,
            self.nip_height,
            self.offset,
        )
    }

    /// Lay out body and nip around a child of `child_size`
    pub fn compose(&self, child_size: [f32; 2]) -> BubbleLayout {
        BubbleLayout::compose(self, child_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SpeechBubbleConfig::default();
        assert_eq!(config.nip_location, NipLocation::Bottom);
        assert_eq!(config.border_radius, 4.0);
        assert_eq!(config.elevation, 1.0);
        assert_eq!(config.height, None);
        assert_eq!(config.width, None);
        assert_eq!(config.padding, Insets::all(8.0));
        assert_eq!(config.nip_height, 10.0);
        assert_eq!(config.nip_width, 6.0);
        assert_eq!(config.offset, [0.0, 0.0]);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = SpeechBubbleConfig::from_toml_str("").unwrap();
        assert_eq!(config, SpeechBubbleConfig::default());
    }

    #[test]
    fn test_parse_full_toml() {
        let config = SpeechBubbleConfig::from_toml_str(
            r#"
            nip_location = "top-right"
            color = [0.2, 0.4, 1.0, 1.0]
            border_radius = 6.0
            elevation = 0.0
            width = 120.0
            padding = { left = 12.0, right = 12.0, top = 6.0, bottom = 6.0 }
            nip_width = 8.0
            nip_height = 12.0
            offset = [-4.0, 2.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.nip_location, NipLocation::TopRight);
        assert_eq!(config.color, [0.2, 0.4, 1.0, 1.0]);
        assert_eq!(config.border_radius, 6.0);
        assert_eq!(config.elevation, 0.0);
        assert_eq!(config.width, Some(120.0));
        assert_eq!(config.height, None);
        assert_eq!(config.padding, Insets::symmetric(12.0, 6.0));
        assert_eq!(config.nip_width, 8.0);
        assert_eq!(config.nip_height, 12.0);
        assert_eq!(config.offset, [-4.0, 2.0]);
    }

    #[test]
    fn test_parse_uniform_padding_and_index_location() {
        let config = SpeechBubbleConfig::from_toml_str("padding = 3.0\nnip_location = 3").unwrap();
        assert_eq!(config.padding, Insets::all(3.0));
        assert_eq!(config.nip_location, NipLocation::Left);
    }

    #[test]
    fn test_parse_partial_padding_table() {
        let config = SpeechBubbleConfig::from_toml_str("padding = { top = 4.0 }").unwrap();
        assert_eq!(
            config.padding,
            Insets {
                left: 0.0,
                top: 4.0,
                right: 0.0,
                bottom: 0.0
            }
        );
    }

    #[test]
    fn test_invalid_location_is_rejected() {
        let err = SpeechBubbleConfig::from_toml_str("nip_location = \"diagonal\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("invalid nip location 'diagonal'"));

        let err = SpeechBubbleConfig::from_toml_str("nip_location = 12").unwrap_err();
        assert!(err.to_string().contains("invalid nip location '12'"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SpeechBubbleConfig::load("/nonexistent/bubble.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("bubble-{}.toml", std::process::id()));
        std::fs::write(&path, "nip_location = \"left\"\nelevation = 2.5\n").unwrap();

        let config = SpeechBubbleConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.nip_location, NipLocation::Left);
        assert_eq!(config.elevation, 2.5);
    }
}
