//! Core types for speech bubble configuration

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::BubbleError;

/// Where the nip sits relative to the bubble body
///
/// ```text
///  TopLeft      Top      TopRight
///     ╲          ▲          ╱
///      ╭────────────────────╮
/// Left ◀│                    │▶ Right
///      ╰────────────────────╯
///     ╱          ▼          ╲
/// BottomLeft   Bottom   BottomRight
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "LocationRepr")]
pub enum NipLocation {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl NipLocation {
    /// All locations in declaration order (the order used by `TryFrom<u8>`)
    pub const ALL: [NipLocation; 8] = [
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Left,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Check if this is one of the four corner locations
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }

    /// Canonical kebab-case name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for NipLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NipLocation {
    type Err = BubbleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "top" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "top-left" | "topleft" => Ok(Self::TopLeft),
            "top-right" | "topright" => Ok(Self::TopRight),
            "bottom-left" | "bottomleft" => Ok(Self::BottomLeft),
            "bottom-right" | "bottomright" => Ok(Self::BottomRight),
            _ => Err(BubbleError::InvalidNipLocation(s.to_string())),
        }
    }
}

impl TryFrom<u8> for NipLocation {
    type Error = BubbleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| BubbleError::InvalidNipLocation(value.to_string()))
    }
}

/// Wire form accepted in config files: a name or an index
#[derive(Deserialize)]
#[serde(untagged)]
enum LocationRepr {
    Index(i64),
    Name(String),
}

impl TryFrom<LocationRepr> for NipLocation {
    type Error = BubbleError;

    fn try_from(repr: LocationRepr) -> Result<Self, Self::Error> {
        match repr {
            LocationRepr::Index(i) => u8::try_from(i)
                .map_err(|_| BubbleError::InvalidNipLocation(i.to_string()))
                .and_then(Self::try_from),
            LocationRepr::Name(name) => name.parse(),
        }
    }
}

/// Attachment point on a bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    /// Get the anchor position as a fraction (0.0 to 1.0)
    pub fn as_fraction(&self) -> (f32, f32) {
        match self {
            Self::TopLeft => (0.0, 0.0),
            Self::TopCenter => (0.5, 0.0),
            Self::TopRight => (1.0, 0.0),
            Self::CenterLeft => (0.0, 0.5),
            Self::Center => (0.5, 0.5),
            Self::CenterRight => (1.0, 0.5),
            Self::BottomLeft => (0.0, 1.0),
            Self::BottomCenter => (0.5, 1.0),
            Self::BottomRight => (1.0, 1.0),
        }
    }
}

/// Clockwise rotation of the nip, in quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NipRotation {
    Up,
    Right,
    Down,
    Left,
}

impl NipRotation {
    pub fn degrees(&self) -> u16 {
        match self {
            Self::Up => 0,
            Self::Right => 90,
            Self::Down => 180,
            Self::Left => 270,
        }
    }

    /// Rotate a vector around the origin (screen space, y down).
    ///
    /// Quarter turns are applied exactly, so no trigonometric rounding leaks
    /// into the nip vertices.
    pub fn rotate(&self, [x, y]: [f32; 2]) -> [f32; 2] {
        match self {
            Self::Up => [x, y],
            Self::Right => [-y, x],
            Self::Down => [-x, -y],
            Self::Left => [y, -x],
        }
    }
}

/// Inner spacing between the body edge and the child content
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "InsetsRepr")]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Default for Insets {
    fn default() -> Self {
        Self::all(8.0)
    }
}

impl Insets {
    pub const fn all(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            top: vertical,
            right: horizontal,
            bottom: vertical,
        }
    }

    /// Total of left and right
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total of top and bottom
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InsetsRepr {
    All(f32),
    Sides {
        #[serde(default)]
        left: f32,
        #[serde(default)]
        top: f32,
        #[serde(default)]
        right: f32,
        #[serde(default)]
        bottom: f32,
    },
}

impl From<InsetsRepr> for Insets {
    fn from(repr: InsetsRepr) -> Self {
        match repr {
            InsetsRepr::All(v) => Self::all(v),
            InsetsRepr::Sides {
                left,
                top,
                right,
                bottom,
            } => Self {
                left,
                top,
                right,
                bottom,
            },
        }
    }
}

/// Axis-aligned rectangle in logical pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rect containing every point
    pub fn from_points(points: &[[f32; 2]]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (mut min, mut max) = (*first, *first);
        for p in rest {
            min = [min[0].min(p[0]), min[1].min(p[1])];
            max = [max[0].max(p[0]), max[1].max(p[1])];
        }
        Some(Self::new(min[0], min[1], max[0] - min[0], max[1] - min[1]))
    }

    pub fn min(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    pub fn max(&self) -> [f32; 2] {
        [self.x + self.width, self.y + self.height]
    }

    pub fn center(&self) -> [f32; 2] {
        [self.x + self.width / 2.0, self.y + self.height / 2.0]
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Shrink by `insets`, never below zero size
    pub fn deflate(&self, insets: &Insets) -> Self {
        Self::new(
            self.x + insets.left,
            self.y + insets.top,
            (self.width - insets.horizontal()).max(0.0),
            (self.height - insets.vertical()).max(0.0),
        )
    }

    pub fn union(&self, other: &Rect) -> Self {
        let min = [self.x.min(other.x), self.y.min(other.y)];
        let (a, b) = (self.max(), other.max());
        let max = [a[0].max(b[0]), a[1].max(b[1])];
        Self::new(min[0], min[1], max[0] - min[0], max[1] - min[1])
    }

    /// The `[x, y, width, height]` form used by the GPU side
    pub fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.width, self.height]
    }
}
