//! Extend viewport: a minimum world area that stays visible at any window size.

use bevy::camera::{ScalingMode, Viewport};
use bevy::prelude::*;

/// Camera component keeping at least `min_world_size` world units visible.
///
/// The world area is first scaled uniformly to fit the screen. Whatever screen space is
/// left on one axis is then filled by showing more of the world on that axis, so one
/// side always shows exactly the minimum and the other side shows at least it.
///
/// The camera is centred on the middle of the visible world area, which puts the
/// world origin in the bottom-left corner of the screen.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ExtendViewport {
    /// World area that is always visible
    pub min_world_size: Vec2,
    /// World area visible after the last update
    pub world_size: Vec2,
    /// Physical screen size passed to the last update
    pub window_size: UVec2,
    /// Screen rectangle the world is drawn into, in physical pixels
    pub screen_position: UVec2,
    pub screen_size: UVec2,
}

impl ExtendViewport {
    pub fn new(min_world_size: Vec2) -> Self {
        Self {
            min_world_size,
            world_size: min_world_size,
            window_size: UVec2::ZERO,
            screen_position: UVec2::ZERO,
            screen_size: UVec2::ZERO,
        }
    }

    /// Recompute the visible world area for a window size in physical pixels.
    ///
    /// Zero-sized windows (minimised) leave the viewport unchanged.
    pub fn update(&mut self, window_size: UVec2) {
        if window_size.x == 0 || window_size.y == 0 {
            return;
        }

        let screen = window_size.as_vec2();
        let mut world = self.min_world_size;

        // Fit: uniform scale so the whole minimum area is on screen
        let scale = if screen.y / screen.x > world.y / world.x {
            screen.x / world.x
        } else {
            screen.y / world.y
        };
        let mut viewport = (world * scale).round();

        // Extend the world along the axis with screen space left over
        if viewport.x < screen.x {
            let to_viewport = viewport.y / world.y;
            let lengthen = (screen.x - viewport.x) * world.y / viewport.y;
            world.x += lengthen;
            viewport.x += (lengthen * to_viewport).round();
        } else if viewport.y < screen.y {
            let to_viewport = viewport.x / world.x;
            let lengthen = (screen.y - viewport.y) * world.x / viewport.x;
            world.y += lengthen;
            viewport.y += (lengthen * to_viewport).round();
        }

        let viewport = viewport.min(screen);

        self.window_size = window_size;
        self.world_size = world;
        self.screen_size = viewport.as_uvec2();
        self.screen_position = ((screen - viewport) / 2.0).as_uvec2();
    }

    /// Change the minimum world area and recompute for the last window size.
    pub fn set_min_world_size(&mut self, min_world_size: Vec2) {
        self.min_world_size = min_world_size;
        self.world_size = min_world_size;
        self.update(self.window_size);
    }

    /// World position the camera is centred on.
    #[inline]
    pub fn camera_position(&self) -> Vec2 {
        self.world_size / 2.0
    }

    /// Write the viewport into a camera's projection, screen rectangle and position.
    pub fn apply(&self, camera: &mut Camera, projection: &mut Projection, transform: &mut Transform) {
        if let Projection::Orthographic(orthographic) = projection {
            orthographic.scaling_mode = ScalingMode::Fixed {
                width: self.world_size.x,
                height: self.world_size.y,
            };
        }

        camera.viewport = (self.screen_size.cmpgt(UVec2::ZERO).all()).then(|| Viewport {
            physical_position: self.screen_position,
            physical_size: self.screen_size,
            ..default()
        });

        let position = self.camera_position();
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN_WORLD: Vec2 = Vec2::new(480.0, 320.0);

    fn updated(width: u32, height: u32) -> ExtendViewport {
        let mut viewport = ExtendViewport::new(MIN_WORLD);
        viewport.update(UVec2::new(width, height));
        viewport
    }

    #[test]
    fn test_matching_aspect_shows_minimum_area() {
        let viewport = updated(960, 640);

        assert_eq!(viewport.world_size, MIN_WORLD);
        assert_eq!(viewport.screen_size, UVec2::new(960, 640));
        assert_eq!(viewport.screen_position, UVec2::ZERO);
    }

    #[test]
    fn test_wide_window_extends_width() {
        let viewport = updated(1920, 640);

        assert_eq!(viewport.world_size, Vec2::new(960.0, 320.0));
        assert_eq!(viewport.screen_size, UVec2::new(1920, 640));
    }

    #[test]
    fn test_tall_window_extends_height() {
        let viewport = updated(480, 1000);

        assert_eq!(viewport.world_size, Vec2::new(480.0, 1000.0));
        assert_eq!(viewport.screen_size, UVec2::new(480, 1000));
    }

    #[test]
    fn test_one_axis_always_keeps_minimum() {
        for (width, height) in [(1, 1), (1, 900), (1280, 720), (800, 600), (3, 2), (4096, 17)] {
            let viewport = updated(width, height);
            let world = viewport.world_size;

            assert!(
                world.x == MIN_WORLD.x || world.y == MIN_WORLD.y,
                "{width}x{height} gave {world}"
            );
            assert!(world.x >= MIN_WORLD.x && world.y >= MIN_WORLD.y);
            assert!(viewport.screen_size.x <= width && viewport.screen_size.y <= height);
        }
    }

    #[test]
    fn test_one_by_one_window() {
        let viewport = updated(1, 1);

        assert_eq!(viewport.world_size, MIN_WORLD);
        assert_eq!(viewport.screen_size, UVec2::ONE);
    }

    #[test]
    fn test_zero_sized_window_is_ignored() {
        let mut viewport = updated(960, 640);
        viewport.update(UVec2::new(0, 640));

        assert_eq!(viewport.window_size, UVec2::new(960, 640));
        assert_eq!(viewport.world_size, MIN_WORLD);
    }

    #[test]
    fn test_camera_is_centred_on_world() {
        let viewport = updated(1920, 640);
        assert_eq!(viewport.camera_position(), Vec2::new(480.0, 160.0));
    }

    #[test]
    fn test_set_min_world_size_reuses_window_size() {
        let mut viewport = updated(1920, 640);
        viewport.set_min_world_size(Vec2::new(960.0, 640.0));

        assert_eq!(viewport.world_size, Vec2::new(1920.0, 640.0));
    }

    #[test]
    fn test_apply_sets_projection_and_position() {
        let viewport = updated(1920, 640);
        let mut camera = Camera::default();
        let mut projection = Projection::Orthographic(OrthographicProjection::default_2d());
        let mut transform = Transform::default();

        viewport.apply(&mut camera, &mut projection, &mut transform);

        let Projection::Orthographic(orthographic) = projection else {
            panic!("expected an orthographic projection");
        };
        assert!(matches!(
            orthographic.scaling_mode,
            ScalingMode::Fixed { width, height } if width == 960.0 && height == 320.0
        ));
        assert_eq!(transform.translation.truncate(), Vec2::new(480.0, 160.0));
        let screen = camera.viewport.expect("viewport rectangle");
        assert_eq!(screen.physical_size, UVec2::new(1920, 640));
    }
}
