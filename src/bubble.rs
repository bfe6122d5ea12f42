//! Speech bubble builder

use crate::config::SpeechBubbleConfig;
use crate::layout::BubbleLayout;
use crate::types::{Insets, NipLocation};

/// A rounded container with a triangular nip.
///
/// The child is provided when the bubble is drawn, see
/// [`SpeechBubble::show`]. A bubble is cheap to rebuild every frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeechBubble {
    config: SpeechBubbleConfig,
}

impl SpeechBubble {
    /// Create a new bubble with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bubble from a loaded config
    pub fn from_config(config: SpeechBubbleConfig) -> Self {
        Self { config }
    }

    /// Set where the nip sits
    pub fn with_nip_location(mut self, location: NipLocation) -> Self {
        self.config.nip_location = location;
        self
    }

    /// Set the body and nip color [r, g, b, a]
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.config.color = color;
        self
    }

    pub fn with_border_radius(mut self, radius: f32) -> Self {
        self.config.border_radius = radius;
        self
    }

    /// Set the shadow depth
    pub fn with_elevation(mut self, elevation: f32) -> Self {
        self.config.elevation = elevation;
        self
    }

    /// Fix the body height instead of following the child
    pub fn with_height(mut self, height: f32) -> Self {
        self.config.height = Some(height);
        self
    }

    /// Fix the body width instead of following the child
    pub fn with_width(mut self, width: f32) -> Self {
        self.config.width = Some(width);
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.config.padding = padding;
        self
    }

    pub fn with_nip_size(mut self, width: f32, height: f32) -> Self {
        self.config.nip_width = width;
        self.config.nip_height = height;
        self
    }

    pub fn with_nip_width(mut self, width: f32) -> Self {
        self.config.nip_width = width;
        self
    }

    pub fn with_nip_height(mut self, height: f32) -> Self {
        self.config.nip_height = height;
        self
    }

    /// Set the extra nip offset (corner locations only)
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.config.offset = [x, y];
        self
    }

    pub fn config(&self) -> &SpeechBubbleConfig {
        &self.config
    }

    /// Lay out the bubble around a child of `child_size`
    pub fn layout(&self, child_size: [f32; 2]) -> BubbleLayout {
        self.config.compose(child_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_every_field() {
        let bubble = SpeechBubble::new()
            .with_nip_location(NipLocation::TopLeft)
            .with_color([0.0, 0.5, 1.0, 1.0])
            .with_border_radius(12.0)
            .with_elevation(3.0)
            .with_height(30.0)
            .with_width(90.0)
            .with_padding(Insets::all(2.0))
            .with_nip_size(8.0, 14.0)
            .with_offset(4.0, -1.0);

        let expected = SpeechBubbleConfig {
            nip_location: NipLocation::TopLeft,
            color: [0.0, 0.5, 1.0, 1.0],
            border_radius: 12.0,
            elevation: 3.0,
            height: Some(30.0),
            width: Some(90.0),
            padding: Insets::all(2.0),
            nip_height: 14.0,
            nip_width: 8.0,
            offset: [4.0, -1.0],
        };
        assert_eq!(bubble.config(), &expected);
        assert_eq!(SpeechBubble::from_config(expected), bubble);
    }

    #[test]
    fn test_single_nip_dimension_setters() {
        let bubble = SpeechBubble::new().with_nip_width(3.0).with_nip_height(4.0);
        assert_eq!(bubble.config().nip_width, 3.0);
        assert_eq!(bubble.config().nip_height, 4.0);
    }

    #[test]
    fn test_layout_uses_config() {
        let bubble = SpeechBubble::new().with_nip_location(NipLocation::Top);
        let layout = bubble.layout([20.0, 10.0]);
        assert_eq!(layout, bubble.config().compose([20.0, 10.0]));
        assert_eq!(layout.nip.placement.rotation_degrees(), 0);
    }
}
