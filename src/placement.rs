//! Nip placement: where the nip attaches, how far it is pushed out and how
//! it is turned

use crate::types::{Anchor, NipLocation, NipRotation};

/// Placement of the nip for one render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPlacement {
    /// Translation applied after aligning the nip at `anchor`
    pub offset: [f32; 2],
    /// Rotation around the nip's own center
    pub rotation: NipRotation,
    /// Attachment point on the bubble's bounding box
    pub anchor: Anchor,
}

impl ResolvedPlacement {
    pub fn rotation_degrees(&self) -> u16 {
        self.rotation.degrees()
    }
}

/// Resolve the nip placement for `location`.
///
/// Edge locations push the nip out by one nip size and ignore `offset`.
/// Corner locations start from `offset` and step one nip width inward, one
/// nip height outward.
pub fn resolve(
    location: NipLocation,
    nip_width: f32,
    nip_height: f32,
    offset: [f32; 2],
) -> ResolvedPlacement {
    let [ox, oy] = offset;
    let (offset, rotation, anchor) = match location {
        NipLocation::Top => ([0.0, -nip_height], NipRotation::Up, Anchor::TopCenter),
        NipLocation::Right => ([nip_width, 0.0], NipRotation::Right, Anchor::CenterRight),
        NipLocation::Bottom => ([0.0, nip_height], NipRotation::Down, Anchor::BottomCenter),
        NipLocation::Left => ([-nip_width, 0.0], NipRotation::Left, Anchor::CenterLeft),
        NipLocation::BottomLeft => (
            [ox + nip_width, oy + nip_height],
            NipRotation::Down,
            Anchor::BottomLeft,
        ),
        NipLocation::BottomRight => (
            [ox - nip_width, oy + nip_height],
            NipRotation::Down,
            Anchor::BottomRight,
        ),
        NipLocation::TopLeft => (
            [ox + nip_width, oy - nip_height],
            NipRotation::Up,
            Anchor::TopLeft,
        ),
        NipLocation::TopRight => (
            [ox - nip_width, oy - nip_height],
            NipRotation::Up,
            Anchor::TopRight,
        ),
    };

    log::trace!(
        "Nip placement: location={}, offset={:?}, rotation={}, anchor={:?}",
        location,
        offset,
        rotation.degrees(),
        anchor
    );

    ResolvedPlacement {
        offset,
        rotation,
        anchor,
    }
}
