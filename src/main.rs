//! Object layer screen.
//!
//! Loads `assets/ObjectLayer.tmx`, builds a static collider for every rectangle, circle
//! and polygon in its `Collisions` layer and draws them over the tiles.
//!
//! Run with:
//! ```bash
//! cargo run
//! ```

use bevy::prelude::*;
use objectlayer::ObjectLayerPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(ImagePlugin::default_nearest()))
        .add_plugins(ObjectLayerPlugin::default())
        .run();
}
