//! Main plugin for `objectlayer_tilemap`.

use bevy::prelude::*;

use crate::config::TilemapRenderConfig;

/// Plugin for rendering Tiled tile layers with `bevy_ecs_tilemap`.
///
/// Tilemaps are spawned on demand with [`TilemapBuilder`](crate::TilemapBuilder) once a
/// map asset has finished loading.
///
/// # Example
///
/// ```rust,no_run
/// # use bevy::prelude::*;
/// # use objectlayer_tilemap::TilemapPlugin;
/// App::new()
///     .add_plugins(TilemapPlugin::default());
/// ```
#[derive(Default)]
pub struct TilemapPlugin {
    /// Configuration for rendering
    pub config: TilemapRenderConfig,
}

impl TilemapPlugin {
    /// Create plugin with custom configuration.
    pub fn new(config: TilemapRenderConfig) -> Self {
        Self { config }
    }
}

impl Plugin for TilemapPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(bevy_ecs_tilemap::TilemapPlugin);

        app.insert_resource(self.config.clone());

        info!("TilemapPlugin initialized");
    }
}
