//! # `objectlayer_tilemap`
//!
//! Tile layer rendering for Tiled maps using `bevy_ecs_tilemap`.
//!
//! Every finite tile layer becomes one tilemap per tileset it uses, laid out in y-up
//! world space with the map's bottom-left corner at the origin. That is the same space
//! the physics colliders are built in, so the debug overlay lines up with the tiles.
//!
//! Object layers and image layers are not rendered.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use objectlayer_assets::prelude::*;
//! use objectlayer_tilemap::{TilemapBuilder, TilemapPlugin, TilemapRenderConfig};
//!
//! fn spawn_tiles(
//!     mut commands: Commands,
//!     maps: Res<Assets<TiledMapAsset>>,
//!     config: Res<TilemapRenderConfig>,
//! ) {
//!     for (_id, map) in maps.iter() {
//!         TilemapBuilder::build(&mut commands, map, &config);
//!     }
//! }
//! ```

pub mod config;
pub mod plugin;
pub mod tiles;

pub use config::TilemapRenderConfig;
pub use plugin::TilemapPlugin;
pub use tiles::tilemap_builder::TilemapBuilder;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::TilemapRenderConfig;
    pub use crate::plugin::TilemapPlugin;
    pub use crate::tiles::tilemap_builder::{TileInstance, TilemapBuilder};
}
