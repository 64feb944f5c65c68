use bevy::prelude::*;

use crate::assets::map::TiledMapAsset;
use crate::loaders::map::TiledMapAssetLoader;

/// Plugin that registers the Tiled map asset type and its loader
///
/// This plugin enables loading Tiled maps (.tmx) as Bevy assets.
///
/// # Example
/// ```no_run
/// use bevy::prelude::*;
/// use objectlayer_assets::TiledmapAssetsPlugin;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(TiledmapAssetsPlugin)
///     .run();
/// ```
///
/// # What this plugin does NOT do
///
/// - Entity spawning (the scene decides what to do with a loaded map)
/// - Rendering (that's `objectlayer_tilemap`)
/// - Physics integration (that's `objectlayer_avian`)
pub struct TiledmapAssetsPlugin;

impl Plugin for TiledmapAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<TiledMapAsset>()
            .register_asset_loader(TiledMapAssetLoader);
    }
}
