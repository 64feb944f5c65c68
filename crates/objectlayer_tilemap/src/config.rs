//! Configuration for tilemap rendering.

use bevy::prelude::*;

/// Configuration for tilemap rendering plugin.
#[derive(Resource, Clone, Debug)]
pub struct TilemapRenderConfig {
    /// Z distance between consecutive tile layers (default: 1.0)
    ///
    /// Layer `n` in Tiled's layer order is drawn at `z = n * layer_z_spacing`.
    pub layer_z_spacing: f32,
}

impl Default for TilemapRenderConfig {
    fn default() -> Self {
        Self {
            layer_z_spacing: 1.0,
        }
    }
}
