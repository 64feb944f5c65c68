//! # `objectlayer`
//!
//! A single screen that loads a Tiled map, builds static `Avian2D` colliders from the
//! annotation objects of its `Collisions` layer, and renders the tiles with the physics
//! debug overlay on top.
//!
//! The work is spread over the workspace crates:
//!
//! - [`assets`]: `.tmx` asset loader
//! - [`avian`]: annotation objects → collider descriptors → static bodies
//! - [`tilemap`]: tile layer rendering (feature `tilemap`)
//!
//! This crate holds the scene driver that wires them together and keeps the camera
//! showing 30 × 20 tiles at any window size.
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use objectlayer::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins.set(ImagePlugin::default_nearest()))
//!         .add_plugins(ObjectLayerPlugin::default())
//!         .run();
//! }
//! ```

pub mod config;
pub mod error;
pub mod plugin;
pub mod scene;
pub mod viewport;

// Re-export sub-crates for advanced usage
pub use objectlayer_assets as assets;
pub use objectlayer_avian as avian;

#[cfg(feature = "tilemap")]
pub use objectlayer_tilemap as tilemap;

pub use config::ObjectLayerConfig;
pub use error::SceneError;
pub use plugin::ObjectLayerPlugin;

/// Unified prelude
pub mod prelude {
    pub use crate::assets::prelude::*;
    pub use crate::avian::prelude::*;

    #[cfg(feature = "tilemap")]
    pub use crate::tilemap::prelude::*;

    pub use crate::config::ObjectLayerConfig;
    pub use crate::error::SceneError;
    pub use crate::plugin::ObjectLayerPlugin;
    pub use crate::scene::{ObjectLayerScene, SceneCamera, SceneState};
    pub use crate::viewport::ExtendViewport;
}
