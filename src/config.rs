//! Scene configuration.

use bevy::prelude::*;

/// Configuration for the object layer scene.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use objectlayer::{ObjectLayerConfig, ObjectLayerPlugin};
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(ObjectLayerPlugin::default().with_scene(ObjectLayerConfig {
///         map_path: "maps/level1.tmx".into(),
///         ..default()
///     }))
///     .run();
/// ```
#[derive(Resource, Debug, Clone)]
pub struct ObjectLayerConfig {
    /// Map asset path, relative to the asset root (default: `ObjectLayer.tmx`)
    pub map_path: String,

    /// Name of the object layer colliders are built from (default: `Collisions`)
    pub collision_layer: String,

    /// Tiles that stay visible at any window size (default: 30 x 20)
    pub visible_tiles: UVec2,

    /// Tile size used until the map has loaded (default: 16 x 16)
    pub default_tile_size: Vec2,

    /// Colour the frame is cleared to
    pub clear_color: Color,
}

impl Default for ObjectLayerConfig {
    fn default() -> Self {
        Self {
            map_path: "ObjectLayer.tmx".to_string(),
            collision_layer: "Collisions".to_string(),
            visible_tiles: UVec2::new(30, 20),
            default_tile_size: Vec2::splat(16.0),
            clear_color: Color::srgb(0.1, 0.1, 0.2),
        }
    }
}

impl ObjectLayerConfig {
    /// World area covered by `visible_tiles` tiles of the given size.
    #[inline]
    pub fn min_world_size(&self, tile_size: Vec2) -> Vec2 {
        self.visible_tiles.as_vec2() * tile_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_min_world_size() {
        let config = ObjectLayerConfig::default();
        assert_eq!(
            config.min_world_size(config.default_tile_size),
            Vec2::new(480.0, 320.0)
        );
    }
}
