//! Composition of the body panel and the nip into one render tree

use crate::config::SpeechBubbleConfig;
use crate::paint::{PathCommand, PathRecorder, TrianglePainter};
use crate::placement::ResolvedPlacement;
use crate::types::Rect;

/// Shadow color [r, g, b, a]
pub const SHADOW_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.2];

/// Drop shadow cast by the body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub rect: Rect,
    pub blur: f32,
    pub color: [f32; 4],
}

/// The rounded rectangle holding the child
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPanel {
    pub rect: Rect,
    pub color: [f32; 4],
    pub border_radius: f32,
    pub shadow: Option<Shadow>,
}

/// The triangular pointer
#[derive(Debug, Clone, PartialEq)]
pub struct NipLayer {
    /// Unrotated `nip_width x nip_height` box, after alignment and offset
    pub frame: Rect,
    pub placement: ResolvedPlacement,
    pub painter: TrianglePainter,
    /// Painted path in bubble space, rotation applied
    pub path: Vec<PathCommand>,
}

impl NipLayer {
    /// Triangle vertices in bubble space
    pub fn points(&self) -> Vec<[f32; 2]> {
        self.path.iter().filter_map(PathCommand::point).collect()
    }
}

/// One render pass worth of bubble geometry
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleLayout {
    /// Box both layers are anchored in; equal to the body rect
    pub bounds: Rect,
    pub body: BodyPanel,
    /// Where the child goes: body minus padding
    pub content: Rect,
    pub nip: NipLayer,
}

impl BubbleLayout {
    /// Lay out a bubble with its body at the origin
    pub fn compose(config: &SpeechBubbleConfig, child_size: [f32; 2]) -> Self {
        let padding = &config.padding;
        let width = config
            .width
            .unwrap_or(child_size[0] + padding.horizontal());
        let height = config
            .height
            .unwrap_or(child_size[1] + padding.vertical());

        let bounds = Rect::new(0.0, 0.0, width, height);
        let content = bounds.deflate(padding);

        let shadow = (config.elevation > 0.0).then(|| Shadow {
            rect: bounds.translate(0.0, config.elevation),
            blur: config.elevation * 2.0,
            color: SHADOW_COLOR,
        });

        let body = BodyPanel {
            rect: bounds,
            color: config.color,
            border_radius: config.border_radius,
            shadow,
        };

        let nip = compose_nip(config, &bounds);

        log::trace!(
            "Bubble layout: body={:?}, nip frame={:?}, rotation={}",
            bounds,
            nip.frame,
            nip.placement.rotation_degrees()
        );

        Self {
            bounds,
            body,
            content,
            nip,
        }
    }

    /// Body and nip together
    pub fn extent(&self) -> Rect {
        match Rect::from_points(&self.nip.points()) {
            Some(nip) => self.bounds.union(&nip),
            None => self.bounds,
        }
    }

    /// Move every layer by `(dx, dy)`
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        let shadow = self.body.shadow.map(|s| Shadow {
            rect: s.rect.translate(dx, dy),
            ..s
        });

        Self {
            bounds: self.bounds.translate(dx, dy),
            body: BodyPanel {
                rect: self.body.rect.translate(dx, dy),
                shadow,
                ..self.body
            },
            content: self.content.translate(dx, dy),
            nip: NipLayer {
                frame: self.nip.frame.translate(dx, dy),
                placement: self.nip.placement,
                painter: self.nip.painter,
                path: self
                    .nip
                    .path
                    .iter()
                    .map(|c| c.map_point(|[x, y]| [x + dx, y + dy]))
                    .collect(),
            },
        }
    }
}

fn compose_nip(config: &SpeechBubbleConfig, bounds: &Rect) -> NipLayer {
    let placement = config.placement();
    let (nw, nh) = (config.nip_width, config.nip_height);

    let (fx, fy) = placement.anchor.as_fraction();
    let frame = Rect::new(
        bounds.x + fx * (bounds.width - nw) + placement.offset[0],
        bounds.y + fy * (bounds.height - nh) + placement.offset[1],
        nw,
        nh,
    );

    let painter = TrianglePainter::new(config.color);
    let mut recorder = PathRecorder::new();
    painter.paint(&mut recorder, [nw, nh]);

    // Rotate about the frame center, then move into bubble space
    let [cx, cy] = [nw / 2.0, nh / 2.0];
    let [ox, oy] = frame.center();
    let path = recorder
        .into_commands()
        .into_iter()
        .map(|c| {
            c.map_point(|[x, y]| {
                let [rx, ry] = placement.rotation.rotate([x - cx, y - cy]);
                [rx + ox, ry + oy]
            })
        })
        .collect();

    NipLayer {
        frame,
        placement,
        painter,
        path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Insets, NipLocation};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn config(location: NipLocation) -> SpeechBubbleConfig {
        SpeechBubbleConfig {
            nip_location: location,
            width: Some(100.0),
            height: Some(40.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_body_sized_to_child_plus_padding() {
        init_logger();
        let layout = SpeechBubbleConfig::default().compose([50.0, 20.0]);
        assert_eq!(layout.bounds, Rect::new(0.0, 0.0, 66.0, 36.0));
        assert_eq!(layout.body.rect, layout.bounds);
        assert_eq!(layout.content, Rect::new(8.0, 8.0, 50.0, 20.0));
    }

    #[test]
    fn test_explicit_size_overrides_child() {
        let cfg = SpeechBubbleConfig {
            width: Some(120.0),
            padding: Insets::symmetric(10.0, 4.0),
            ..Default::default()
        };
        let layout = cfg.compose([50.0, 20.0]);
        assert_eq!(layout.bounds, Rect::new(0.0, 0.0, 120.0, 28.0));
        assert_eq!(layout.content, Rect::new(10.0, 4.0, 100.0, 20.0));
    }

    #[test]
    fn test_shadow_follows_elevation() {
        let layout = config(NipLocation::Top).compose([0.0, 0.0]);
        let shadow = layout.body.shadow.unwrap();
        assert_eq!(shadow.rect, Rect::new(0.0, 1.0, 100.0, 40.0));
        assert_eq!(shadow.blur, 2.0);

        let flat = SpeechBubbleConfig {
            elevation: 0.0,
            ..config(NipLocation::Top)
        };
        assert_eq!(flat.compose([0.0, 0.0]).body.shadow, None);
    }

    #[test]
    fn test_top_nip_sits_above_body() {
        let layout = config(NipLocation::Top).compose([0.0, 0.0]);
        assert_eq!(layout.nip.frame, Rect::new(47.0, -10.0, 6.0, 10.0));
        assert_eq!(
            layout.nip.points(),
            vec![[50.0, -10.0], [47.0, 0.0], [53.0, 0.0]]
        );
    }

    #[test]
    fn test_bottom_nip_points_down() {
        let layout = config(NipLocation::Bottom).compose([0.0, 0.0]);
        assert_eq!(layout.nip.frame, Rect::new(47.0, 40.0, 6.0, 10.0));
        assert_eq!(
            layout.nip.points(),
            vec![[50.0, 50.0], [53.0, 40.0], [47.0, 40.0]]
        );
    }

    #[test]
    fn test_right_nip_points_right() {
        let layout = config(NipLocation::Right).compose([0.0, 0.0]);
        assert_eq!(layout.nip.frame, Rect::new(100.0, 15.0, 6.0, 10.0));
        // Frame center (103, 20); the 6x10 box turns into 10x6
        assert_eq!(
            layout.nip.points(),
            vec![[108.0, 20.0], [98.0, 17.0], [98.0, 23.0]]
        );
    }

    #[test]
    fn test_left_nip_points_left() {
        let layout = config(NipLocation::Left).compose([0.0, 0.0]);
        assert_eq!(layout.nip.frame, Rect::new(-6.0, 15.0, 6.0, 10.0));
        assert_eq!(
            layout.nip.points(),
            vec![[-8.0, 20.0], [2.0, 23.0], [2.0, 17.0]]
        );
    }

    #[test]
    fn test_corner_nip_uses_offset() {
        let cfg = SpeechBubbleConfig {
            offset: [5.0, 5.0],
            ..config(NipLocation::BottomRight)
        };
        let layout = cfg.compose([0.0, 0.0]);
        // Aligned at (94, 30), then moved by (-1, 15)
        assert_eq!(layout.nip.frame, Rect::new(93.0, 45.0, 6.0, 10.0));
        assert_eq!(layout.nip.placement.rotation_degrees(), 180);

        let layout = config(NipLocation::TopLeft).compose([0.0, 0.0]);
        assert_eq!(layout.nip.frame, Rect::new(6.0, -10.0, 6.0, 10.0));
    }

    #[test]
    fn test_nip_takes_body_color() {
        let cfg = SpeechBubbleConfig {
            color: [0.1, 0.2, 0.3, 1.0],
            ..Default::default()
        };
        let layout = cfg.compose([10.0, 10.0]);
        assert_eq!(layout.body.color, [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(layout.nip.painter.color, [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(layout.nip.path.last(), Some(&PathCommand::Fill([0.1, 0.2, 0.3, 1.0])));
    }

    #[test]
    fn test_compose_is_idempotent() {
        for location in NipLocation::ALL {
            let cfg = SpeechBubbleConfig {
                offset: [2.0, -3.0],
                ..config(location)
            };
            assert_eq!(cfg.compose([30.0, 12.0]), cfg.compose([30.0, 12.0]));
        }
    }

    #[test]
    fn test_extent_includes_nip() {
        let layout = config(NipLocation::Top).compose([0.0, 0.0]);
        assert_eq!(layout.extent(), Rect::new(0.0, -10.0, 100.0, 50.0));

        let layout = config(NipLocation::Right).compose([0.0, 0.0]);
        assert_eq!(layout.extent(), Rect::new(0.0, 0.0, 108.0, 40.0));
    }

    #[test]
    fn test_translate_moves_everything() {
        let layout = config(NipLocation::Top).compose([0.0, 0.0]);
        let moved = layout.translate(10.0, 20.0);
        assert_eq!(moved.bounds, Rect::new(10.0, 20.0, 100.0, 40.0));
        assert_eq!(moved.content, layout.content.translate(10.0, 20.0));
        assert_eq!(moved.body.shadow.unwrap().rect, Rect::new(10.0, 21.0, 100.0, 40.0));
        assert_eq!(moved.nip.points()[0], [60.0, 10.0]);
        assert_eq!(moved.translate(-10.0, -20.0), layout);
    }

    #[test]
    fn test_negative_nip_size_does_not_panic() {
        let cfg = SpeechBubbleConfig {
            nip_width: -6.0,
            nip_height: -10.0,
            ..config(NipLocation::Right)
        };
        let layout = cfg.compose([0.0, 0.0]);
        assert_eq!(layout.nip.points().len(), 3);
    }
}
