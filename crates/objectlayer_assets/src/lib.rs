//! # `objectlayer_assets`
//!
//! Asset layer: loads Tiled `.tmx` maps as Bevy assets.
//!
//! The loader parses the map with the `tiled` crate (embedded and external tilesets are
//! resolved by `tiled` itself) and registers every tileset image as a dependency of the
//! map, so `RecursiveDependencyLoadState::Loaded` means the map is ready to render.
//!
//! This crate does not spawn entities, build colliders or render anything.

pub mod assets;
pub mod loaders;
pub mod plugin;

pub use plugin::TiledmapAssetsPlugin;

/// Prelude module for convenient imports
///
/// # Example
/// ```no_run
/// use bevy::prelude::*;
/// use objectlayer_assets::prelude::*;
///
/// fn my_system(maps: Res<Assets<TiledMapAsset>>) {
///     for (_id, map) in maps.iter() {
///         info!("map is {}x{} tiles", map.tilemap_size.x, map.tilemap_size.y);
///     }
/// }
/// ```
pub mod prelude {
    pub use crate::assets::map::TiledMapAsset;
    pub use crate::loaders::map::{MapLoaderError, TiledMapAssetLoader};
    pub use crate::plugin::TiledmapAssetsPlugin;
}
