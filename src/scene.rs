//! Scene driver.
//!
//! Runs the screen through three steps:
//!
//! - **Initialize**: [`setup_scene`] spawns the camera and requests the map, then
//!   [`populate_world`] waits for the map and its images, builds one static body per
//!   supported annotation object and fits the camera to the map's tile size.
//! - **Tick**: nothing to schedule here. Avian steps in `PostUpdate` with the frame's
//!   elapsed time, then the renderer clears the frame, draws the tilemaps and draws the
//!   collider gizmos through the same camera.
//! - **Resize**: [`resize_viewport`] refits the camera whenever the window changes size.

use bevy::asset::RecursiveDependencyLoadState;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use objectlayer_assets::prelude::TiledMapAsset;
use objectlayer_avian::prelude::*;

use crate::config::ObjectLayerConfig;
use crate::error::SceneError;
use crate::viewport::ExtendViewport;

#[cfg(feature = "tilemap")]
use objectlayer_tilemap::{TilemapBuilder, TilemapRenderConfig};

/// Lifecycle of the scene.
#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SceneState {
    /// Waiting for the map asset and its dependencies
    #[default]
    Loading,
    /// Physics world built, map on screen
    Ready,
    /// Building the scene failed, the app is exiting
    Failed,
}

/// The map the scene was built from and the bodies created for it.
#[derive(Resource, Debug)]
pub struct ObjectLayerScene {
    /// Strong handle, keeps the map loaded for the scene's lifetime
    pub map: Handle<TiledMapAsset>,
    /// Static bodies created from the collision layer
    pub bodies: Vec<Entity>,
}

/// Marker for the camera driven by the scene's [`ExtendViewport`].
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SceneCamera;

/// Spawn the scene camera and start loading the map.
pub fn setup_scene(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<ObjectLayerConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    commands.insert_resource(ClearColor(config.clear_color));

    let mut viewport = ExtendViewport::new(config.min_world_size(config.default_tile_size));
    if let Ok(window) = windows.single() {
        viewport.update(window.physical_size());
    }

    let mut camera = Camera::default();
    let mut projection = Projection::Orthographic(OrthographicProjection::default_2d());
    let mut transform = Transform::default();
    viewport.apply(&mut camera, &mut projection, &mut transform);

    commands.spawn((
        Camera2d,
        camera,
        projection,
        transform,
        viewport,
        SceneCamera,
        Name::new("Scene camera"),
    ));

    let map = asset_server.load(config.map_path.clone());
    commands.insert_resource(ObjectLayerScene {
        map,
        bodies: Vec::new(),
    });

    info!("Loading map '{}'", config.map_path);
}

/// Build the physics world once the map and all its dependencies have loaded.
///
/// Runs every frame while [`SceneState::Loading`]. A failed load or an invalid
/// collision layer is fatal: the error is logged and the app exits with an error.
pub fn populate_world(
    asset_server: Res<AssetServer>,
    map_assets: Res<Assets<TiledMapAsset>>,
    config: Res<ObjectLayerConfig>,
    mut scene: ResMut<ObjectLayerScene>,
    mut cameras: Query<
        (&mut ExtendViewport, &mut Camera, &mut Projection, &mut Transform),
        With<SceneCamera>,
    >,
    mut next_state: ResMut<NextState<SceneState>>,
    mut exit: MessageWriter<AppExit>,
    mut commands: Commands,
) {
    let map_asset = match asset_server.get_recursive_dependency_load_state(&scene.map) {
        Some(RecursiveDependencyLoadState::Loaded) => {
            let Some(map_asset) = map_assets.get(&scene.map) else {
                warn!("Map asset loaded but not found in Assets resource!");
                return;
            };
            map_asset
        }
        Some(RecursiveDependencyLoadState::Failed(error)) => {
            let error = SceneError::AssetLoad {
                path: config.map_path.clone(),
                reason: error.to_string(),
            };
            fail(error, &mut next_state, &mut exit);
            return;
        }
        _ => return,
    };

    let bodies = match build_physics_world(&mut commands, map_asset, &config.collision_layer) {
        Ok(bodies) => bodies,
        Err(error) => {
            fail(error, &mut next_state, &mut exit);
            return;
        }
    };

    info!(
        "Created {} static colliders from layer '{}'",
        bodies.len(),
        config.collision_layer
    );
    scene.bodies = bodies;

    let tile_size = map_asset.tile_size.as_vec2();
    for (mut viewport, mut camera, mut projection, mut transform) in &mut cameras {
        viewport.set_min_world_size(config.min_world_size(tile_size));
        viewport.apply(&mut camera, &mut projection, &mut transform);
    }

    next_state.set(SceneState::Ready);
}

/// Extract every collider of the collision layer, then create their static bodies.
///
/// Nothing is spawned unless the whole layer is valid.
pub fn build_physics_world(
    commands: &mut Commands,
    map_asset: &TiledMapAsset,
    layer_name: &str,
) -> Result<Vec<Entity>, SceneError> {
    let objects = collision_objects(&map_asset.map, layer_name, map_asset.pixel_height())?;
    let descriptors = extract_colliders(&objects)?;

    Ok(descriptors
        .iter()
        .map(|descriptor| create_static_collider(commands, descriptor))
        .collect())
}

fn fail(error: SceneError, next_state: &mut NextState<SceneState>, exit: &mut MessageWriter<AppExit>) {
    error!("{error}");
    next_state.set(SceneState::Failed);
    exit.write(AppExit::error());
}

/// Spawn tilemaps for the map's tile layers.
#[cfg(feature = "tilemap")]
pub fn spawn_tile_layers(
    mut commands: Commands,
    scene: Res<ObjectLayerScene>,
    map_assets: Res<Assets<TiledMapAsset>>,
    config: Res<TilemapRenderConfig>,
) {
    let Some(map_asset) = map_assets.get(&scene.map) else {
        warn!("Map asset missing when spawning tile layers");
        return;
    };

    TilemapBuilder::build(&mut commands, map_asset, &config);
}

/// Refit the scene camera to the new window size.
///
/// Minimised windows report a zero size and are ignored.
pub fn resize_viewport(
    mut resized: MessageReader<WindowResized>,
    windows: Query<&Window>,
    mut cameras: Query<
        (&mut ExtendViewport, &mut Camera, &mut Projection, &mut Transform),
        With<SceneCamera>,
    >,
) {
    for event in resized.read() {
        let Ok(window) = windows.get(event.window) else {
            continue;
        };

        let size = window.physical_size();
        if size.x == 0 || size.y == 0 {
            continue;
        }

        for (mut viewport, mut camera, mut projection, mut transform) in &mut cameras {
            viewport.update(size);
            viewport.apply(&mut camera, &mut projection, &mut transform);

            debug!(
                "Viewport resized to {}x{}, showing {} world units",
                size.x, size.y, viewport.world_size
            );
        }
    }
}
