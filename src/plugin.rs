//! Unified plugin for the object layer scene.

use bevy::prelude::*;

use objectlayer_assets::TiledmapAssetsPlugin;
use objectlayer_avian::{PhysicsWorldConfig, TiledmapAvianPlugin};

#[cfg(feature = "tilemap")]
use objectlayer_tilemap::{TilemapPlugin, TilemapRenderConfig};

use crate::config::ObjectLayerConfig;
use crate::scene::{SceneState, populate_world, resize_viewport, setup_scene};

/// Plugin that adds the map loader, the physics world and the scene driver.
///
/// # Features
///
/// - `tilemap` (default): Adds [`TilemapPlugin`] and renders the map's tile layers
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use objectlayer::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(ObjectLayerPlugin::default())
///     .run();
/// ```
#[derive(Default)]
pub struct ObjectLayerPlugin {
    /// Scene configuration
    pub scene: ObjectLayerConfig,

    /// Physics world configuration
    pub physics: PhysicsWorldConfig,

    /// Tilemap rendering configuration (if feature enabled)
    #[cfg(feature = "tilemap")]
    pub tilemap: TilemapRenderConfig,
}

impl ObjectLayerPlugin {
    /// Create with custom scene configuration
    pub fn with_scene(mut self, config: ObjectLayerConfig) -> Self {
        self.scene = config;
        self
    }

    /// Create with custom physics world configuration
    pub fn with_physics(mut self, config: PhysicsWorldConfig) -> Self {
        self.physics = config;
        self
    }

    /// Create with custom tilemap rendering configuration
    #[cfg(feature = "tilemap")]
    pub fn with_tilemap(mut self, config: TilemapRenderConfig) -> Self {
        self.tilemap = config;
        self
    }
}

impl Plugin for ObjectLayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(TiledmapAssetsPlugin)
            .add_plugins(TiledmapAvianPlugin::new(self.physics.clone()));

        #[cfg(feature = "tilemap")]
        app.add_plugins(TilemapPlugin::new(self.tilemap.clone()));

        app.insert_resource(self.scene.clone())
            .init_state::<SceneState>()
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                (
                    populate_world.run_if(in_state(SceneState::Loading)),
                    resize_viewport,
                ),
            );

        #[cfg(feature = "tilemap")]
        app.add_systems(OnEnter(SceneState::Ready), crate::scene::spawn_tile_layers);

        info!("ObjectLayerPlugin initialized");
    }
}
